// profanity-core/src/engine.rs
//! Defines the `FilterEngine` trait.
//!
//! Boundary adapters (the CLI, a web host, an issue processor) hold a
//! `Box<dyn FilterEngine>` instead of a concrete pipeline, so tests and hosts can swap
//! in their own implementation.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ProfanityError;
use crate::parameters::FilterParameters;
use crate::pipeline::CancelToken;
use crate::result::FilterResult;
use crate::word_lists::SourceSet;

#[async_trait]
pub trait FilterEngine: Send + Sync {
    /// Filters `content` according to `parameters`.
    ///
    /// # Arguments
    /// * `content` - The text to filter. `None` or blank text is never an error.
    /// * `parameters` - Strategy, target and any call-scoped word lists.
    /// * `cancel` - Checked between sources; a cancelled run returns `ProfanityError::Cancelled`.
    async fn filter(
        &self,
        content: Option<&str>,
        parameters: &FilterParameters,
        cancel: &CancelToken,
    ) -> Result<FilterResult, ProfanityError>;

    /// The built-in sources this engine applies, in order.
    async fn sources(&self) -> Result<Arc<SourceSet>, ProfanityError>;
}
