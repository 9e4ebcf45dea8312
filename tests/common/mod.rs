// tests/common/mod.rs

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use susy_core::{ClientConfig, PageFetcher, Result, SusyClient, SusyError};
use tokio::time::Instant;

pub const BASE_URL: &str = "https://susy.ic.unicamp.br:9999";
pub const SECTION_URL: &str = "https://susy.ic.unicamp.br:9999/mc999";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e))
}

/// Serves fixed pages by URL and remembers which URLs were requested, and when.
/// Unknown URLs fail the way an unreachable server would.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<(String, Instant)>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn requested_at(&self, url: &str) -> Option<Instant> {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .find(|(requested, _)| requested == url)
            .map(|(_, at)| *at)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requested
            .lock()
            .unwrap()
            .push((url.to_string(), Instant::now()));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| SusyError::FetchFailed {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

pub fn client_for(fetcher: Arc<StaticFetcher>) -> SusyClient {
    SusyClient::with_fetcher(fetcher, ClientConfig::default())
}
