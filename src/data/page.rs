//! Results page parser.
//!
//! A match row is any element whose class list contains `event__match`.
//! Its time and participants come from the `.event__time`,
//! `.event__participant--home` and `.event__participant--away` children.
//! Dates are not stored on rows: the site groups rows under a header
//! element whose class contains `event__header`, so each row takes the
//! nearest such element that precedes it in document order (ancestors
//! excluded). If the markup changes this silently yields no headers and
//! every date comes out empty.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::types::{MatchBlock, ScoutError};

const ROW_CLASS: &str = "event__match";
const HEADER_CLASS_FRAGMENT: &str = "event__header";

/// Compiled child selectors for a match row.
pub struct PageParser {
    time: Selector,
    home: Selector,
    away: Selector,
}

impl PageParser {
    pub fn new() -> Result<Self, ScoutError> {
        Ok(Self {
            time: selector(".event__time")?,
            home: selector(".event__participant--home")?,
            away: selector(".event__participant--away")?,
        })
    }

    /// Extract every match row, in document order.
    pub fn parse(&self, html: &str) -> Vec<MatchBlock> {
        let document = Html::parse_document(html);
        let mut headers: Vec<(ElementRef<'_>, Option<String>)> = Vec::new();
        let mut blocks = Vec::new();

        for node in document.root_element().descendants() {
            let Some(el) = ElementRef::wrap(node) else { continue };

            let is_header = el
                .value()
                .attr("class")
                .is_some_and(|c| c.contains(HEADER_CLASS_FRAGMENT));
            if is_header {
                headers.push((el, element_text(&el)));
                continue;
            }

            if el.value().classes().any(|c| c == ROW_CLASS) {
                let date_header = headers
                    .iter()
                    .rev()
                    .find(|(h, _)| !el.ancestors().any(|a| a.id() == h.id()))
                    .and_then(|(_, text)| text.clone());

                blocks.push(MatchBlock {
                    time: self.child_text(&el, &self.time),
                    home: self.child_text(&el, &self.home),
                    away: self.child_text(&el, &self.away),
                    date_header,
                });
            }
        }

        debug!(rows = blocks.len(), headers = headers.len(), "Parsed results page");
        blocks
    }

    fn child_text(&self, row: &ElementRef<'_>, sel: &Selector) -> Option<String> {
        row.select(sel).next().and_then(|el| element_text(&el))
    }
}

fn selector(css: &str) -> Result<Selector, ScoutError> {
    Selector::parse(css).map_err(|e| ScoutError::Config(format!("bad selector {css}: {e:?}")))
}

/// Visible text of an element, whitespace collapsed. Empty text is `None`.
fn element_text(el: &ElementRef<'_>) -> Option<String> {
    let text = el.text().collect::<String>();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
