//! Configuration management for `profanity-core`.
//!
//! This module defines the settings that shape a filtering run: where the built-in word
//! lists live, the default strategy and target, markdown escaping, and extra word lists
//! supplied by the user. Settings are read from YAML and merged over the embedded
//! defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::parameters::{FilterParameters, FilterTarget, ReplacementStrategy};
use crate::word_lists::repository::default_word_list_dir;
use crate::word_lists::ProfaneSourceFilter;

/// Top-level settings for the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Directory holding the built-in `*.txt` word lists.
    pub word_list_dir: Option<PathBuf>,
    #[serde(deserialize_with = "lenient_strategy")]
    pub default_strategy: ReplacementStrategy,
    pub default_target: FilterTarget,
    /// Escape mask characters for markdown targets.
    pub escape_markdown: bool,
    /// Extra words applied as one `manual(n)` source.
    pub manual_words: Vec<String>,
    /// Newline-delimited word lists fetched per run.
    pub word_list_urls: Vec<String>,
}

/// Partial settings as they appear in a user file. Absent keys keep the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UserFilterConfig {
    word_list_dir: Option<PathBuf>,
    #[serde(deserialize_with = "lenient_optional_strategy")]
    default_strategy: Option<ReplacementStrategy>,
    default_target: Option<FilterTarget>,
    escape_markdown: Option<bool>,
    manual_words: Option<Vec<String>>,
    word_list_urls: Option<Vec<String>>,
}

/// Unknown strategy names fall back to asterisk with a warning instead of failing the load.
fn lenient_strategy<'de, D>(deserializer: D) -> std::result::Result<ReplacementStrategy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_optional_strategy(deserializer)?.unwrap_or_default())
}

fn lenient_optional_strategy<'de, D>(deserializer: D) -> std::result::Result<Option<ReplacementStrategy>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| {
        value.parse().unwrap_or_else(|_| {
            warn!("Unknown default_strategy '{}' in config, using {}.", value, ReplacementStrategy::default());
            ReplacementStrategy::default()
        })
    }))
}

impl FilterConfig {
    /// Loads settings from a YAML file and layers them over the embedded defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let user: UserFilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let config = Self::load_default()?.overlay(user);
        config.validate()?;
        info!("Loaded filter config from {}.", path.display());
        Ok(config)
    }

    /// Loads the embedded default settings.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default filter config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: FilterConfig = serde_yml::from_str(default_yaml).context("Failed to parse default filter config")?;
        Ok(config)
    }

    fn overlay(mut self, user: UserFilterConfig) -> Self {
        if let Some(dir) = user.word_list_dir {
            self.word_list_dir = Some(dir);
        }
        if let Some(strategy) = user.default_strategy {
            self.default_strategy = strategy;
        }
        if let Some(target) = user.default_target {
            self.default_target = target;
        }
        if let Some(escape) = user.escape_markdown {
            self.escape_markdown = escape;
        }
        if let Some(words) = user.manual_words {
            self.manual_words = words;
        }
        if let Some(urls) = user.word_list_urls {
            self.word_list_urls = urls;
        }
        self
    }

    /// The word-list directory: explicit setting, then `PROFANITY_WORD_LISTS_DIR`, then
    /// the bundled lists.
    pub fn resolved_word_list_dir(&self) -> PathBuf {
        self.word_list_dir.clone().unwrap_or_else(default_word_list_dir)
    }

    /// The configured manual words as a call-scoped source, if there are any.
    pub fn manual_source(&self) -> Result<Option<ProfaneSourceFilter>> {
        if self.manual_words.iter().all(|w| w.trim().is_empty()) {
            return Ok(None);
        }
        let source = ProfaneSourceFilter::manual(&self.manual_words)?;
        Ok(Some(source))
    }

    /// Parameters for a call using the configured defaults.
    pub fn default_parameters(&self) -> FilterParameters {
        FilterParameters::new(self.default_strategy, self.default_target)
    }

    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for url in &self.word_list_urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(format!("Word list URL '{}' must use http or https.", url));
            }
        }

        if let Some(dir) = &self.word_list_dir {
            if !dir.is_dir() {
                warn!("Configured word list directory {} does not exist.", dir.display());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Merges a user config over the defaults. Without a user config the defaults are
/// returned unchanged.
pub fn merge_config(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    match user_config {
        None => default_config,
        Some(user) => {
            debug!("Merging user filter config over defaults.");
            FilterConfig {
                word_list_dir: user.word_list_dir.or(default_config.word_list_dir),
                default_strategy: user.default_strategy,
                default_target: user.default_target,
                escape_markdown: user.escape_markdown || default_config.escape_markdown,
                manual_words: merge_words(default_config.manual_words, user.manual_words),
                word_list_urls: merge_words(default_config.word_list_urls, user.word_list_urls),
            }
        }
    }
}

fn merge_words(mut base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    for word in extra {
        if !base.contains(&word) {
            base.push(word);
        }
    }
    base
}
