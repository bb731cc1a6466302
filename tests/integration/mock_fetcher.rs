//! Mock fetcher for integration testing.
//!
//! Serves canned pages keyed by URL. Unknown URLs answer with an empty
//! results page; URLs registered as failing return a fetch error.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use fixture_scout::data::PageFetcher;
use fixture_scout::types::ScoutError;

pub const EMPTY_PAGE: &str = "<html><body><div class=\"searchResult\"></div></body></html>";

#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Fail every request for `url`.
    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScoutError> {
        self.requests.lock().unwrap().push(url.to_string());

        if self.failing.contains(url) {
            return Err(ScoutError::Fetch {
                url: url.to_string(),
                message: "navigation timed out".to_string(),
            });
        }
        Ok(self.pages.get(url).cloned().unwrap_or_else(|| EMPTY_PAGE.to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Build a results row.
pub fn match_row(time: &str, home: &str, away: &str) -> String {
    format!(
        r#"<div class="event__match event__match--twoLine">
             <div class="event__time">{time}</div>
             <div class="event__participant event__participant--home">{home}</div>
             <div class="event__participant event__participant--away">{away}</div>
           </div>"#
    )
}

/// Build a date header.
pub fn header(text: &str) -> String {
    format!(r#"<div class="event__header"><div class="event__title">{text}</div></div>"#)
}

/// Wrap rows in a page body.
pub fn page(parts: &[String]) -> String {
    format!("<html><body><div class=\"sportName soccer\">{}</div></body></html>", parts.concat())
}
