//! The filtering pipeline: every source, in order, over the running text.
//!
//! Sources are applied sequentially. Each source sees the text produced by the sources
//! before it, and every source leaves exactly one [`FilterStep`] behind, changed or not.
//! Matched words are gathered in a [`MatchCollector`] owned by the run.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;
use log::{debug, info};
use rand::RngCore;
use regex::Captures;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::errors::ProfanityError;
use crate::match_collector::MatchCollector;
use crate::parameters::FilterParameters;
use crate::result::{FilterResult, FilterStep};
use crate::strategies::{escape_markdown, limit_dollar_signs, ReplacementStrategyTable};
use crate::word_lists::{SourceSet, WordListRepository};

/// Inputs at least this large are filtered on the blocking pool instead of the runtime.
pub const BLOCKING_THRESHOLD_BYTES: usize = 64 * 1024;

/// Cooperative cancellation, checked between sources. Async callers can also wait on
/// [`CancelToken::cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once [`CancelToken::cancel`] has been called on this token or a clone.
    pub async fn cancelled(&self) {
        loop {
            // Registered before the flag check so a concurrent cancel is not missed.
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterPipeline {
    repository: WordListRepository,
    escape_markdown: bool,
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new(WordListRepository::default())
    }
}

impl FilterPipeline {
    pub fn new(repository: WordListRepository) -> Self {
        Self {
            repository,
            escape_markdown: false,
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(WordListRepository::new(config.resolved_word_list_dir()))
            .with_escape_markdown(config.escape_markdown)
    }

    /// Escape mask characters in replacements for markdown targets (body, comment).
    pub fn with_escape_markdown(mut self, escape_markdown: bool) -> Self {
        self.escape_markdown = escape_markdown;
        self
    }

    pub fn repository(&self) -> &WordListRepository {
        &self.repository
    }

    /// Filters `content` with every built-in source plus the call's additional sources.
    ///
    /// Blank or missing content returns an unfiltered result without touching the
    /// word lists.
    pub async fn run(
        &self,
        content: Option<&str>,
        parameters: &FilterParameters,
        cancel: &CancelToken,
    ) -> Result<FilterResult, ProfanityError> {
        let content = match content {
            Some(text) if !text.trim().is_empty() => text,
            other => {
                debug!("Blank input, nothing to filter.");
                return Ok(FilterResult::empty(other.unwrap_or_default(), parameters.clone()));
            }
        };

        let sources = self.repository.sources(&parameters.additional_sources).await?;

        if content.len() < BLOCKING_THRESHOLD_BYTES {
            return self.apply(&sources, content, parameters, cancel, &mut rand::rng());
        }

        debug!("Input is {} bytes, filtering on the blocking pool.", content.len());
        let pipeline = self.clone();
        let content = content.to_string();
        let parameters = parameters.clone();
        let cancel = cancel.clone();
        tokio::task::spawn_blocking(move || pipeline.apply(&sources, &content, &parameters, &cancel, &mut rand::rng()))
            .await
            .map_err(|e| ProfanityError::Fatal(format!("Filter task failed: {}", e)))?
    }

    /// The synchronous core of [`FilterPipeline::run`], usable with any source set and
    /// random source.
    pub fn apply(
        &self,
        sources: &SourceSet,
        content: &str,
        parameters: &FilterParameters,
        cancel: &CancelToken,
        rng: &mut dyn RngCore,
    ) -> Result<FilterResult, ProfanityError> {
        let evaluator = ReplacementStrategyTable::evaluator_for(parameters.strategy);
        let escape = self.escape_markdown && parameters.target.renders_markdown();
        let mut collector = MatchCollector::new(parameters);
        let mut dollar_emitted = false;
        let mut steps = Vec::with_capacity(sources.len());
        let mut current = content.to_string();

        for source in sources {
            if cancel.is_cancelled() {
                info!("Filtering cancelled after {} of {} source(s).", steps.len(), sources.len());
                return Err(ProfanityError::Cancelled { completed_steps: steps.len() });
            }

            let replaced = match source.pattern() {
                Some(pattern) => pattern
                    .replace_all(&current, |caps: &Captures| {
                        let matched = caps.get(0).map_or("", |m| m.as_str());
                        collector.register(matched);
                        let replacement = evaluator(matched, &mut *rng);
                        let replacement =
                            limit_dollar_signs(parameters.strategy, replacement, &mut dollar_emitted, &mut *rng);
                        if escape {
                            escape_markdown(parameters.strategy, &replacement)
                        } else {
                            replacement
                        }
                    })
                    .into_owned(),
                None => current.clone(),
            };

            if replaced == current {
                debug!("Source '{}' left the text unchanged.", source.source_name);
                steps.push(FilterStep {
                    input: current.clone(),
                    source_name: source.source_name.clone(),
                    output: None,
                });
            } else {
                debug!("Source '{}' changed the text.", source.source_name);
                steps.push(FilterStep {
                    input: std::mem::replace(&mut current, replaced.clone()),
                    source_name: source.source_name.clone(),
                    output: Some(replaced),
                });
            }
        }

        let matches = collector.drain();
        debug!(
            "Filtering finished: {} source(s), {} match(es).",
            steps.len(),
            matches.len()
        );

        Ok(FilterResult {
            input: content.to_string(),
            parameters: parameters.clone(),
            steps: Some(steps),
            matches: Some(matches),
        })
    }
}

#[async_trait]
impl FilterEngine for FilterPipeline {
    async fn filter(
        &self,
        content: Option<&str>,
        parameters: &FilterParameters,
        cancel: &CancelToken,
    ) -> Result<FilterResult, ProfanityError> {
        self.run(content, parameters, cancel).await
    }

    async fn sources(&self) -> Result<Arc<SourceSet>, ProfanityError> {
        self.repository.built_in().await
    }
}
