//! Accumulates the words matched during one filtering call.
//!
//! A collector is created per pipeline run and handed to the evaluators by reference, so
//! concurrent runs with identical parameters can never see each other's matches.

use log::debug;

use crate::parameters::FilterParameters;

/// Debug logs only show matched words when this is set to `true`.
const ALLOW_DEBUG_WORDS_ENV: &str = "PROFANITY_ALLOW_DEBUG_WORDS";

lazy_static::lazy_static! {
    static ref DEBUG_WORDS_ALLOWED: bool = {
        std::env::var(ALLOW_DEBUG_WORDS_ENV)
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Masks a word for debug output unless `PROFANITY_ALLOW_DEBUG_WORDS=true`.
pub fn loggable_word(word: &str) -> String {
    if *DEBUG_WORDS_ALLOWED {
        word.to_string()
    } else {
        format!("[{} chars]", word.chars().count())
    }
}

/// Matched substrings in encounter order. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct MatchCollector {
    parameters: FilterParameters,
    matches: Vec<String>,
}

impl MatchCollector {
    pub fn new(parameters: &FilterParameters) -> Self {
        Self {
            parameters: parameters.clone(),
            matches: Vec::new(),
        }
    }

    pub fn register(&mut self, matched: &str) {
        debug!(
            "Registered match {} for {}/{}.",
            loggable_word(matched),
            self.parameters.strategy,
            self.parameters.target
        );
        self.matches.push(matched.to_string());
    }

    /// Takes every match registered so far, leaving the collector empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.matches)
    }
}
