//! Integration tests: the full team list → fetch → extract → table path
//! against an in-memory fetcher.

mod mock_fetcher;
mod pipeline;
