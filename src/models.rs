use crate::error::SusyError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root address of the SuSy installation at IC/Unicamp.
pub const SUSY_BASE_URL: &str = "https://susy.ic.unicamp.br:9999";

/// Section code (e.g. `"mc102ab"`) mapped to the section's page URL.
pub type SectionMap = HashMap<String, String>;

/// Assignment code mapped to its record.
pub type AssignmentMap = HashMap<String, Assignment>;

/// An assignment listed on a section page, with data from its own page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Assignment {
    /// The assignment page URL.
    pub url: String,
    /// Display name, with non-breaking spaces turned into regular spaces.
    pub name: String,
    /// The submission deadline.
    pub due_date: NaiveDateTime,
    /// URLs of the group report pages, in page order.
    pub groups: Vec<String>,
}

/// One row of a section's assignment table, before its page is fetched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub code: String,
    pub url: String,
    pub name: String,
}

/// An assignment whose page could not be fetched or parsed.
#[derive(Debug)]
pub struct AssignmentFailure {
    pub code: String,
    pub url: String,
    pub error: SusyError,
}

/// Result of listing a section under [`RowFailurePolicy::CollectPartial`].
#[derive(Debug, Default)]
pub struct AssignmentListing {
    pub assignments: AssignmentMap,
    pub failures: Vec<AssignmentFailure>,
}

impl AssignmentListing {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What the assignment lister does when one assignment page fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowFailurePolicy {
    /// Abort the whole listing on the first failing row.
    #[default]
    FailFast,
    /// Keep going and report failing rows next to the successful ones.
    CollectPartial,
}

impl std::str::FromStr for RowFailurePolicy {
    type Err = SusyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(RowFailurePolicy::FailFast),
            "collect-partial" | "partial" => Ok(RowFailurePolicy::CollectPartial),
            other => Err(SusyError::Config(format!("Unknown row policy: {}", other))),
        }
    }
}

/// Random pause taken before every assignment page fetch except the first.
///
/// The pause is drawn from `min_delay_ms..=max_delay_ms`. Nothing else in a
/// listing ever waits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub enabled: bool,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 250,
            max_delay_ms: 1000,
            enabled: false,
        }
    }
}

/// Settings for [`crate::SusyClient`] and its HTTP fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Page listing every active section.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Skip TLS certificate verification. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
    pub user_agent: String,
    pub delay: DelayConfig,
    pub row_policy: RowFailurePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SUSY_BASE_URL.to_string(),
            timeout_secs: 5,
            accept_invalid_certs: false,
            user_agent: concat!("susy-core/", env!("CARGO_PKG_VERSION")).to_string(),
            delay: DelayConfig::default(),
            row_policy: RowFailurePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from `SUSY_*` environment variables, loading
    /// `.env` first when one exists. Unset variables keep their defaults.
    pub fn from_env() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> crate::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SUSY_BASE_URL") {
            if url.trim().is_empty() {
                return Err(SusyError::Config("SUSY_BASE_URL is empty".to_string()));
            }
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = lookup("SUSY_TIMEOUT_SECS") {
            config.timeout_secs = parse_var("SUSY_TIMEOUT_SECS", &secs)?;
        }
        if let Some(flag) = lookup("SUSY_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = parse_var("SUSY_ACCEPT_INVALID_CERTS", &flag)?;
        }
        if let Some(agent) = lookup("SUSY_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(min) = lookup("SUSY_DELAY_MIN_MS") {
            config.delay.min_delay_ms = parse_var("SUSY_DELAY_MIN_MS", &min)?;
            config.delay.enabled = true;
        }
        if let Some(max) = lookup("SUSY_DELAY_MAX_MS") {
            config.delay.max_delay_ms = parse_var("SUSY_DELAY_MAX_MS", &max)?;
            config.delay.enabled = true;
        }
        if config.delay.min_delay_ms > config.delay.max_delay_ms {
            return Err(SusyError::Config(format!(
                "SUSY_DELAY_MIN_MS ({}) is greater than SUSY_DELAY_MAX_MS ({})",
                config.delay.min_delay_ms, config.delay.max_delay_ms
            )));
        }
        if let Some(policy) = lookup("SUSY_ROW_POLICY") {
            config.row_policy = policy.parse()?;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> crate::error::Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SusyError::Config(format!("Invalid value for {}: {}", key, value)))
}
