//! Country outline — fetch a country's Wikipedia article and render its
//! heading structure as a Markdown outline.

pub mod extract;
pub mod fetch;
pub mod types;
pub mod url;

pub use extract::extract_outline;
pub use fetch::{build_client, fetch_article};
pub use types::*;
pub use url::article_url;

use reqwest::Client;

/// Resolve a country name to its article, extract the headings, and render
/// the Markdown outline. The one-call API the HTTP layer uses.
pub async fn outline_for_country(client: &Client, country: &str) -> OutlineResult<String> {
    let url = article_url(country);
    let html = fetch_article(client, &url, country).await?;
    let outline = extract_outline(&html)?;
    Ok(outline.to_markdown())
}
