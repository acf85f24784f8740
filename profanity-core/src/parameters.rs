//! Parameter types that identify a single filtering call.
//!
//! A call is described by the [`ReplacementStrategy`] used to rewrite matches and the
//! [`FilterTarget`] the output is destined for. Both are closed enums with stable string
//! forms so they can cross the CLI and JSON boundaries unchanged.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::word_lists::ProfaneSourceFilter;

/// Where the filtered text will be used.
///
/// The target never changes what is matched. It only tells renderers (e.g. markdown
/// escaping) how the output will be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterTarget {
    Title,
    #[default]
    Body,
    Comment,
}

impl FilterTarget {
    pub const ALL: [FilterTarget; 3] = [FilterTarget::Title, FilterTarget::Body, FilterTarget::Comment];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTarget::Title => "title",
            FilterTarget::Body => "body",
            FilterTarget::Comment => "comment",
        }
    }

    /// Titles are rendered as plain text; bodies and comments as markdown.
    pub fn renders_markdown(&self) -> bool {
        !matches!(self, FilterTarget::Title)
    }
}

impl fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy or target string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParameterError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseParameterError {}

/// Lowercases and drops separators so `middle-asterisk`, `middle_asterisk` and
/// `MiddleAsterisk` all compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for FilterTarget {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        FilterTarget::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseParameterError { kind: "target", value: s.to_string() })
    }
}

/// The algorithm used to rewrite a matched word.
///
/// Serializes in camelCase; deserializing accepts every spelling [`FromStr`] does, so
/// the kebab names printed by the CLI work in config files and requests too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplacementStrategy {
    #[default]
    Asterisk,
    Emoji,
    AngerEmoji,
    MiddleSwearEmoji,
    RandomAsterisk,
    MiddleAsterisk,
    FirstLetterThenAsterisk,
    VowelAsterisk,
    Bleep,
    RedactedRectangle,
    StrikeThrough,
    Underscores,
    Grawlix,
    BoldGrawlix,
}

/// A read-only description of a strategy, used by listing surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyDescription {
    pub value: ReplacementStrategy,
    pub name: &'static str,
    pub description: &'static str,
}

impl ReplacementStrategy {
    pub const ALL: [ReplacementStrategy; 14] = [
        ReplacementStrategy::Asterisk,
        ReplacementStrategy::Emoji,
        ReplacementStrategy::AngerEmoji,
        ReplacementStrategy::MiddleSwearEmoji,
        ReplacementStrategy::RandomAsterisk,
        ReplacementStrategy::MiddleAsterisk,
        ReplacementStrategy::FirstLetterThenAsterisk,
        ReplacementStrategy::VowelAsterisk,
        ReplacementStrategy::Bleep,
        ReplacementStrategy::RedactedRectangle,
        ReplacementStrategy::StrikeThrough,
        ReplacementStrategy::Underscores,
        ReplacementStrategy::Grawlix,
        ReplacementStrategy::BoldGrawlix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReplacementStrategy::Asterisk => "asterisk",
            ReplacementStrategy::Emoji => "emoji",
            ReplacementStrategy::AngerEmoji => "anger-emoji",
            ReplacementStrategy::MiddleSwearEmoji => "middle-swear-emoji",
            ReplacementStrategy::RandomAsterisk => "random-asterisk",
            ReplacementStrategy::MiddleAsterisk => "middle-asterisk",
            ReplacementStrategy::FirstLetterThenAsterisk => "first-letter-then-asterisk",
            ReplacementStrategy::VowelAsterisk => "vowel-asterisk",
            ReplacementStrategy::Bleep => "bleep",
            ReplacementStrategy::RedactedRectangle => "redacted-rectangle",
            ReplacementStrategy::StrikeThrough => "strike-through",
            ReplacementStrategy::Underscores => "underscores",
            ReplacementStrategy::Grawlix => "grawlix",
            ReplacementStrategy::BoldGrawlix => "bold-grawlix",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReplacementStrategy::Asterisk => "Replaces every character with an asterisk.",
            ReplacementStrategy::Emoji => "Replaces the word with a random emoji.",
            ReplacementStrategy::AngerEmoji => "Replaces the word with a random angry emoji.",
            ReplacementStrategy::MiddleSwearEmoji => "Keeps the first and last letters and puts a swearing emoji between them.",
            ReplacementStrategy::RandomAsterisk => "Replaces the word with a random number of asterisks, always fewer than its length.",
            ReplacementStrategy::MiddleAsterisk => "Keeps the first and last letters and masks the rest with asterisks.",
            ReplacementStrategy::FirstLetterThenAsterisk => "Keeps the first letter and masks the rest with asterisks.",
            ReplacementStrategy::VowelAsterisk => "Masks the vowels with asterisks.",
            ReplacementStrategy::Bleep => "Replaces the word with \"bleep\".",
            ReplacementStrategy::RedactedRectangle => "Replaces every character with a solid block.",
            ReplacementStrategy::StrikeThrough => "Strikes the word through.",
            ReplacementStrategy::Underscores => "Replaces every character with an underscore.",
            ReplacementStrategy::Grawlix => "Replaces the word with a run of symbols of the same length.",
            ReplacementStrategy::BoldGrawlix => "Replaces the word with a bold run of symbols of the same length.",
        }
    }

    pub fn describe(&self) -> StrategyDescription {
        StrategyDescription {
            value: *self,
            name: self.name(),
            description: self.description(),
        }
    }

    /// Parses a strategy, falling back to [`ReplacementStrategy::Asterisk`] for anything
    /// unrecognised. Boundary adapters use this so a bad value never fails a request.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            log::debug!("Unknown replacement strategy '{}', using asterisk.", value);
            ReplacementStrategy::default()
        })
    }
}

impl fmt::Display for ReplacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReplacementStrategy {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ReplacementStrategy::ALL
            .into_iter()
            .find(|strategy| normalize(strategy.name()) == wanted)
            .ok_or_else(|| ParseParameterError { kind: "replacement strategy", value: s.to_string() })
    }
}

impl<'de> Deserialize<'de> for ReplacementStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Everything that shapes one filtering call.
///
/// Equality and hashing only consider `strategy` and `target`. Extra sources are
/// call-scoped input, not identity.
#[derive(Debug, Clone, Default)]
pub struct FilterParameters {
    pub strategy: ReplacementStrategy,
    pub target: FilterTarget,
    pub additional_sources: Vec<Arc<ProfaneSourceFilter>>,
}

impl FilterParameters {
    pub fn new(strategy: ReplacementStrategy, target: FilterTarget) -> Self {
        Self {
            strategy,
            target,
            additional_sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: ProfaneSourceFilter) -> Self {
        self.additional_sources.push(Arc::new(source));
        self
    }

    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = ProfaneSourceFilter>,
    {
        self.additional_sources.extend(sources.into_iter().map(Arc::new));
        self
    }
}

impl PartialEq for FilterParameters {
    fn eq(&self, other: &Self) -> bool {
        self.strategy == other.strategy && self.target == other.target
    }
}

impl Eq for FilterParameters {}

impl Hash for FilterParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.strategy.hash(state);
        self.target.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parsing_accepts_common_spellings() {
        assert_eq!("MiddleAsterisk".parse::<ReplacementStrategy>().unwrap(), ReplacementStrategy::MiddleAsterisk);
        assert_eq!("middle-asterisk".parse::<ReplacementStrategy>().unwrap(), ReplacementStrategy::MiddleAsterisk);
        assert_eq!("middle_asterisk".parse::<ReplacementStrategy>().unwrap(), ReplacementStrategy::MiddleAsterisk);
        assert_eq!("BOLD-GRAWLIX".parse::<ReplacementStrategy>().unwrap(), ReplacementStrategy::BoldGrawlix);
        assert!("sparkles".parse::<ReplacementStrategy>().is_err());
    }

    #[test]
    fn strategy_deserializes_from_display_and_serde_names() {
        for strategy in ReplacementStrategy::ALL {
            let from_display: ReplacementStrategy = serde_json::from_value(strategy.to_string().into()).unwrap();
            assert_eq!(from_display, strategy);
            let round_trip: ReplacementStrategy =
                serde_json::from_value(serde_json::to_value(strategy).unwrap()).unwrap();
            assert_eq!(round_trip, strategy);
        }
        assert!(serde_json::from_str::<ReplacementStrategy>("\"sparkles\"").is_err());
    }

    #[test]
    fn unknown_strategy_defaults_to_asterisk() {
        assert_eq!(ReplacementStrategy::parse_or_default("nope"), ReplacementStrategy::Asterisk);
        assert_eq!(ReplacementStrategy::parse_or_default("bleep"), ReplacementStrategy::Bleep);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in ReplacementStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<ReplacementStrategy>().unwrap(), strategy);
        }
        for target in FilterTarget::ALL {
            assert_eq!(target.to_string().parse::<FilterTarget>().unwrap(), target);
        }
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&ReplacementStrategy::FirstLetterThenAsterisk).unwrap();
        assert_eq!(json, "\"firstLetterThenAsterisk\"");
        let target: FilterTarget = serde_json::from_str("\"comment\"").unwrap();
        assert_eq!(target, FilterTarget::Comment);
    }

    #[test]
    fn parameter_identity_ignores_additional_sources() {
        let plain = FilterParameters::new(ReplacementStrategy::Asterisk, FilterTarget::Body);
        let extra = FilterParameters::new(ReplacementStrategy::Asterisk, FilterTarget::Body)
            .with_source(ProfaneSourceFilter::from_words("manual(1)", ["heck"]).unwrap());
        assert_eq!(plain, extra);
        assert_ne!(plain, FilterParameters::new(ReplacementStrategy::Asterisk, FilterTarget::Title));
    }
}
