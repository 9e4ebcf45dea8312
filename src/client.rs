use crate::error::Result;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::models::{
    Assignment, AssignmentFailure, AssignmentListing, AssignmentMap, AssignmentRow, ClientConfig,
    DelayConfig, RowFailurePolicy, SectionMap,
};
use crate::parsers;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

pub struct SusyClient {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
    delay_config: DelayConfig,
    row_policy: RowFailurePolicy,
}

impl SusyClient {
    /// Client for the public SuSy installation with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client using `reqwest` configured from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), config))
    }

    /// Client that reads pages through any [`PageFetcher`].
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, config: ClientConfig) -> Self {
        Self {
            fetcher,
            base_url: config.base_url,
            delay_config: config.delay,
            row_policy: config.row_policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn row_policy(&self) -> RowFailurePolicy {
        self.row_policy
    }

    /// Pause between two assignment page fetches, when enabled.
    async fn random_delay(&self) {
        if !self.delay_config.enabled || self.delay_config.max_delay_ms == 0 {
            return;
        }

        let min = self.delay_config.min_delay_ms.min(self.delay_config.max_delay_ms);
        let delay_ms = rand::rng().random_range(min..=self.delay_config.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    /// Lists every active section on the configured main page.
    pub async fn get_sections(&self) -> Result<SectionMap> {
        self.get_sections_from(&self.base_url).await
    }

    /// Lists the sections on the page at `url`; links are joined with `url`.
    #[instrument(skip(self))]
    pub async fn get_sections_from(&self, url: &str) -> Result<SectionMap> {
        const CONTEXT: &str = "could not fetch all sections";

        let html = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| e.context(CONTEXT))?;
        let sections = parsers::sections::parse_sections_from_html(&html, url)
            .map_err(|e| e.context(CONTEXT))?;

        info!(count = sections.len(), "listed sections");
        Ok(sections)
    }

    /// Lists the assignments of the section at `section_url`, fetching each
    /// assignment page for its due date and groups.
    ///
    /// Any failing assignment aborts the whole listing.
    pub async fn get_assignments(&self, section_url: &str) -> Result<AssignmentMap> {
        let listing = self
            .get_assignment_listing_with_policy(section_url, RowFailurePolicy::FailFast)
            .await?;
        Ok(listing.assignments)
    }

    /// Lists assignments under the policy this client was configured with.
    pub async fn get_assignment_listing(&self, section_url: &str) -> Result<AssignmentListing> {
        self.get_assignment_listing_with_policy(section_url, self.row_policy)
            .await
    }

    /// Like [`get_assignments`](Self::get_assignments), with an explicit
    /// policy for assignment pages that fail.
    ///
    /// The section page itself must always be readable.
    #[instrument(skip(self))]
    pub async fn get_assignment_listing_with_policy(
        &self,
        section_url: &str,
        policy: RowFailurePolicy,
    ) -> Result<AssignmentListing> {
        const CONTEXT: &str = "could not fetch assignments";

        let html = self
            .fetcher
            .fetch(section_url)
            .await
            .map_err(|e| e.context(CONTEXT))?;
        let rows = parsers::assignments::parse_assignment_rows(&html, section_url)
            .map_err(|e| e.context(CONTEXT))?;

        let mut listing = AssignmentListing::default();
        for (index, row) in rows.into_iter().enumerate() {
            if index > 0 {
                self.random_delay().await;
            }

            let result = self
                .get_assignment(&row, section_url)
                .await
                .map_err(|e| e.context(format!("error processing {}", row.code)));

            match (result, policy) {
                (Ok(assignment), _) => {
                    listing.assignments.insert(row.code, assignment);
                }
                (Err(e), RowFailurePolicy::FailFast) => return Err(e),
                (Err(error), RowFailurePolicy::CollectPartial) => {
                    warn!(code = %row.code, %error, "skipping assignment");
                    listing.failures.push(AssignmentFailure {
                        code: row.code,
                        url: row.url,
                        error,
                    });
                }
            }
        }

        info!(
            count = listing.assignments.len(),
            failed = listing.failures.len(),
            "listed assignments"
        );
        Ok(listing)
    }

    /// Fetches one assignment page and combines it with its table row.
    ///
    /// Group links are joined with the section URL.
    pub async fn get_assignment(
        &self,
        row: &AssignmentRow,
        section_url: &str,
    ) -> Result<Assignment> {
        let html = self.fetcher.fetch(&row.url).await?;
        let due_date = parsers::due_date::parse_due_date(&html)?;
        let groups = parsers::groups::parse_groups(&html, section_url)?;
        debug!(code = %row.code, %due_date, groups = groups.len(), "parsed assignment");

        Ok(Assignment {
            url: row.url.clone(),
            name: row.name.clone(),
            due_date,
            groups,
        })
    }

    /// Lists the user ids on the group page at `group_url`.
    #[instrument(skip(self))]
    pub async fn get_users(&self, group_url: &str) -> Result<Vec<String>> {
        const CONTEXT: &str = "could not fetch group";

        let html = self
            .fetcher
            .fetch(group_url)
            .await
            .map_err(|e| e.context(CONTEXT))?;
        parsers::users::parse_users(&html).map_err(|e| e.context(CONTEXT))
    }
}
