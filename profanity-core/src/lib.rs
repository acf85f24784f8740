// profanity-core/src/lib.rs
//! # Profanity Core Library
//!
//! `profanity-core` finds words from curated, multi-language word lists in arbitrary text
//! and rewrites them with one of fourteen replacement strategies, keeping a step-by-step
//! audit trail of every source that touched the text.
//!
//! The library has no opinion about where text comes from or where results go. Hosts
//! (the `profanity` CLI, a web endpoint, an issue processor) build a [`FilterRequest`],
//! run it through a [`FilterEngine`], and render the [`FilterResponse`].
//!
//! ## Modules
//!
//! * `config`: `FilterConfig`, loaded from YAML and merged over embedded defaults.
//! * `parameters`: `ReplacementStrategy`, `FilterTarget` and `FilterParameters`.
//! * `word_lists`: compiled sources and the cached `WordListRepository`.
//! * `strategies`: the replacement algorithms, one pure function per strategy.
//! * `match_collector`: call-scoped record of matched words.
//! * `pipeline`: `FilterPipeline`, which applies every source in order.
//! * `engine`: the `FilterEngine` trait implemented by the pipeline.
//! * `result`: `FilterStep` and `FilterResult`.
//! * `contracts`: request and response shapes for boundary adapters.
//! * `remote`: fetches word lists from a URL.
//! * `headless`: one-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use profanity_core::{headless_filter_string, FilterConfig};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FilterConfig::load_default()?;
//!     let output = headless_filter_string(&config, "This is a sentence with the word crap.").await?;
//!     assert_eq!(output, "This is a sentence with the word ****.");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`ProfanityError`]. Configuration and headless helpers use
//! `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod contracts;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod match_collector;
pub mod parameters;
pub mod pipeline;
pub mod remote;
pub mod result;
pub mod strategies;
pub mod word_lists;

/// Re-exports the configuration types.
pub use config::{merge_config, FilterConfig};

/// Re-exports the custom error type.
pub use errors::ProfanityError;

/// Re-exports the engine trait and its pipeline implementation.
pub use engine::FilterEngine;
pub use pipeline::{CancelToken, FilterPipeline};

pub use parameters::{FilterParameters, FilterTarget, ReplacementStrategy, StrategyDescription};
pub use result::{FilterResult, FilterStep};
pub use match_collector::MatchCollector;
pub use strategies::{escape_markdown, limit_dollar_signs, Evaluator, ReplacementStrategyTable};
pub use word_lists::{ProfaneSourceFilter, SourceSet, WordListRepository};

/// Re-exports the boundary contracts.
pub use contracts::{FilterRequest, FilterResponse, FiltrationStep};

pub use remote::{fetch_source, fetch_word_list};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_filter, headless_filter_response, headless_filter_string, parameters_for};
