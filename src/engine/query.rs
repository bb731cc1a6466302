//! Search URL construction.

/// Appended to women's team queries so the site's generic search
/// prefers the women's side.
const WOMEN_TOKEN: &str = "women";

/// Build the search URL for a team.
///
/// The query text is percent-encoded before being appended to `base`,
/// so the result never contains a raw space.
pub fn build_search_url(base: &str, clean_name: &str, is_women: bool) -> String {
    let query = if is_women {
        format!("{clean_name} {WOMEN_TOKEN}")
    } else {
        clean_name.to_string()
    };
    format!("{base}{}", urlencoding::encode(&query))
}
