//! Country name → article URL resolution.

/// Base URL for English Wikipedia articles.
const WIKIPEDIA_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Resolve a free-text country name to an absolute article URL.
///
/// Every space becomes an underscore; nothing else is validated or
/// transformed. Pure and total — there is no error case.
pub fn article_url(country: &str) -> String {
    format!("{WIKIPEDIA_ARTICLE_BASE}{}", country.replace(' ', "_"))
}
