//! Page retrieval and parsing.
//!
//! Defines the `PageFetcher` trait and the static HTTP implementation,
//! plus the HTML parser that turns a results page into match rows.

pub mod flashscore;
pub mod page;

use async_trait::async_trait;

use crate::types::ScoutError;

/// Abstraction over how a results page is retrieved.
///
/// A failure is returned as a value; callers treat it as "no data for this
/// team" and move on.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw page body for a URL.
    async fn fetch(&self, url: &str) -> Result<String, ScoutError>;

    /// Fetcher name for logging.
    fn name(&self) -> &str;
}
