//! compiler.rs - Compiles word lists into whole-word, case-insensitive patterns.
//!
//! Every source becomes one regex of the form `\b(w1|w2|...)\b`. Words are escaped
//! individually and ordered longest first, so a phrase such as `sod off` wins over its
//! prefix `sod` under leftmost-first alternation.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

use crate::errors::ProfanityError;

/// Upper bound on the compiled size of one source's pattern.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// One named word list together with its compiled pattern.
///
/// Built once and immutable afterwards. A source with no words has no pattern and never
/// matches.
#[derive(Debug, Clone)]
pub struct ProfaneSourceFilter {
    /// The name reported in filter steps (file stem, `manual(n)` or `remote(url)`).
    pub source_name: String,
    /// Unique, trimmed words and phrases. Escaping happens when the pattern is built.
    pub words: BTreeSet<String>,
    pattern: Option<Regex>,
}

impl ProfaneSourceFilter {
    /// Compiles a source from any iterator of words. Blank entries are dropped.
    pub fn from_words<I, S>(source_name: impl Into<String>, words: I) -> Result<Self, ProfanityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source_name = source_name.into();
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let pattern = match build_pattern(&words) {
            Some(pattern) => {
                let regex = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .size_limit(PATTERN_SIZE_LIMIT)
                    .build()
                    .map_err(|e| ProfanityError::SourceCompilation(source_name.clone(), e))?;
                Some(regex)
            }
            None => None,
        };

        debug!(
            target: "profanity_core::compiler",
            "Source '{}' compiled with {} word(s).",
            source_name,
            words.len()
        );

        Ok(Self {
            source_name,
            words,
            pattern,
        })
    }

    /// Compiles a source from the raw contents of a newline-delimited list.
    pub fn from_text(source_name: impl Into<String>, text: &str) -> Result<Self, ProfanityError> {
        Self::from_words(source_name, parse_word_list(text))
    }

    /// A call-scoped list typed in by a caller, named `manual(n)` after its word count.
    pub fn manual<I, S>(words: I) -> Result<Self, ProfanityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self::from_words(format!("manual({})", words.len()), words)
    }

    /// A call-scoped list fetched from `url`.
    pub fn remote<I, S>(url: &str, words: I) -> Result<Self, ProfanityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words(format!("remote({})", url), words)
    }

    /// An empty source, used when a list file cannot be read.
    pub fn empty(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            words: BTreeSet::new(),
            pattern: None,
        }
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits a newline-delimited list into trimmed, non-blank entries.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches('\u{feff}').to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Builds `\b(w1|w2|...)\b` from a word set, or `None` when there is nothing to match.
pub fn build_pattern(words: &BTreeSet<String>) -> Option<String> {
    if words.is_empty() {
        return None;
    }

    let mut ordered: Vec<&String> = words.iter().collect();
    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));

    let alternation = ordered
        .into_iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");

    Some(format!(r"\b({})\b", alternation))
}
