// File: profanity-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive filtering.
//!
//! These assemble the engine, the call-scoped word lists from the config, and the
//! parameters in a single call.

use anyhow::{Context, Result};
use log::debug;

use crate::config::FilterConfig;
use crate::contracts::{FilterRequest, FilterResponse};
use crate::engine::FilterEngine;
use crate::parameters::FilterParameters;
use crate::pipeline::{CancelToken, FilterPipeline};
use crate::remote::fetch_source;
use crate::result::FilterResult;

/// Builds the parameters for `request`, adding the config's manual and remote lists.
pub async fn parameters_for(config: &FilterConfig, request: &FilterRequest) -> Result<FilterParameters> {
    let mut parameters = request.parameters();

    if let Some(manual) = config.manual_source()? {
        parameters = parameters.with_source(manual);
    }

    for url in &config.word_list_urls {
        let source = fetch_source(url)
            .await
            .with_context(|| format!("Failed to load word list from {}", url))?;
        parameters = parameters.with_source(source);
    }

    debug!("Prepared {} call-scoped source(s).", parameters.additional_sources.len());
    Ok(parameters)
}

/// Filters one request with the pipeline described by `config`.
pub async fn headless_filter(config: &FilterConfig, request: &FilterRequest) -> Result<FilterResult> {
    let engine: Box<dyn FilterEngine> = Box::new(FilterPipeline::from_config(config));
    let parameters = parameters_for(config, request).await?;
    let result = engine
        .filter(Some(&request.text), &parameters, &CancelToken::new())
        .await
        .context("Filtering failed")?;
    Ok(result)
}

/// Filters `content` and returns the filtered text, or the input if nothing matched.
pub async fn headless_filter_string(config: &FilterConfig, content: &str) -> Result<String> {
    let request = FilterRequest {
        text: content.to_string(),
        strategy: config.default_strategy,
        target: config.default_target,
    };
    let result = headless_filter(config, &request).await?;
    Ok(result.output_or_input().to_string())
}

/// Filters one request and renders the boundary response.
pub async fn headless_filter_response(config: &FilterConfig, request: &FilterRequest) -> Result<FilterResponse> {
    Ok(FilterResponse::from(headless_filter(config, request).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{FilterTarget, ReplacementStrategy};
    use std::fs;

    fn config_with_lists(files: &[(&str, &str)]) -> (tempfile::TempDir, FilterConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let config = FilterConfig {
            word_list_dir: Some(dir.path().to_path_buf()),
            ..FilterConfig::default()
        };
        (dir, config)
    }

    #[tokio::test]
    async fn filters_with_built_in_and_manual_lists() -> Result<()> {
        let (_dir, mut config) = config_with_lists(&[("base.txt", "crap\n")]);
        config.manual_words = vec!["heck".into()];

        let output = headless_filter_string(&config, "crap, what the heck").await?;
        assert_eq!(output, "****, what the ****");
        Ok(())
    }

    #[tokio::test]
    async fn response_lists_changed_sources() -> Result<()> {
        let (_dir, mut config) = config_with_lists(&[("base.txt", "crap\n"), ("other.txt", "bugger\n")]);
        config.manual_words = vec!["heck".into()];
        let request = FilterRequest {
            text: "heck".into(),
            strategy: ReplacementStrategy::Bleep,
            target: FilterTarget::Comment,
        };

        let response = headless_filter_response(&config, &request).await?;
        assert!(response.contains_profanity);
        assert_eq!(response.filtered_text.as_deref(), Some("bleep"));
        let sources: Vec<_> = response.filtration_steps.unwrap().into_iter().map(|s| s.source).collect();
        assert_eq!(sources, vec!["manual(1)"]);
        Ok(())
    }
}
