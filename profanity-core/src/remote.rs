//! Fetches newline-delimited word lists over HTTP.
//!
//! The fetched words become a call-scoped `remote(<url>)` source. Nothing here is
//! cached and nothing is retried; a failed fetch fails the call that asked for it.

use log::{debug, info};
use std::time::Duration;

use crate::errors::ProfanityError;
use crate::word_lists::{parse_word_list, ProfaneSourceFilter};

/// Upper bound on a single word-list download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads `url` and returns its non-blank lines.
pub async fn fetch_word_list(url: &str) -> Result<Vec<String>, ProfanityError> {
    debug!("Fetching remote word list from {}", url);

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| ProfanityError::RemoteWordList(e.to_string()))?;

    let body = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| ProfanityError::RemoteWordList(format!("{}: {}", url, e)))?
        .text()
        .await
        .map_err(|e| ProfanityError::RemoteWordList(format!("{}: {}", url, e)))?;

    let words = parse_word_list(&body);
    info!("Fetched {} word(s) from {}.", words.len(), url);
    Ok(words)
}

/// Downloads `url` and compiles it into a `remote(<url>)` source.
pub async fn fetch_source(url: &str) -> Result<ProfaneSourceFilter, ProfanityError> {
    let words = fetch_word_list(url).await?;
    ProfaneSourceFilter::remote(url, words)
}
