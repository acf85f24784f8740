//! Canonical request and response shapes shared by every boundary adapter.
//!
//! Hosts (the CLI, an HTTP endpoint, an issue processor) translate their own input into a
//! [`FilterRequest`] and render a [`FilterResponse`]. Only changed steps are reported.

use serde::{Deserialize, Serialize};

use crate::parameters::{FilterParameters, FilterTarget, ReplacementStrategy};
use crate::result::FilterResult;

pub use crate::parameters::StrategyDescription;

/// A request to filter one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub text: String,
    #[serde(default, deserialize_with = "lenient_strategy")]
    pub strategy: ReplacementStrategy,
    #[serde(default)]
    pub target: FilterTarget,
}

impl FilterRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> FilterParameters {
        FilterParameters::new(self.strategy, self.target)
    }
}

/// Unknown strategy names fall back to the default instead of rejecting the request.
fn lenient_strategy<'de, D>(deserializer: D) -> Result<ReplacementStrategy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| ReplacementStrategy::parse_or_default(&value))
        .unwrap_or_default())
}

/// One changed step, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltrationStep {
    pub input: String,
    pub output: String,
    pub source: String,
}

/// The outcome of a [`FilterRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub contains_profanity: bool,
    pub input_text: String,
    pub filtered_text: Option<String>,
    pub replacement_strategy: ReplacementStrategy,
    pub filtration_steps: Option<Vec<FiltrationStep>>,
    pub matches: Option<Vec<String>>,
}

impl From<&FilterResult> for FilterResponse {
    fn from(result: &FilterResult) -> Self {
        let filtration_steps = result.steps.as_ref().map(|steps| {
            steps
                .iter()
                .filter_map(|step| {
                    step.output.as_ref().map(|output| FiltrationStep {
                        input: step.input.clone(),
                        output: output.clone(),
                        source: step.source_name.clone(),
                    })
                })
                .collect()
        });

        Self {
            contains_profanity: result.is_filtered(),
            input_text: result.input.clone(),
            filtered_text: result.final_output().map(str::to_string),
            replacement_strategy: result.parameters.strategy,
            filtration_steps,
            matches: result.matches.clone(),
        }
    }
}

impl From<FilterResult> for FilterResponse {
    fn from(result: FilterResult) -> Self {
        FilterResponse::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FilterStep;

    #[test]
    fn request_defaults_and_lenient_strategy() {
        let request: FilterRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(request.strategy, ReplacementStrategy::Asterisk);
        assert_eq!(request.target, FilterTarget::Body);

        let request: FilterRequest =
            serde_json::from_str(r#"{"text":"hi","strategy":"middle-asterisk","target":"title"}"#).unwrap();
        assert_eq!(request.strategy, ReplacementStrategy::MiddleAsterisk);
        assert_eq!(request.target, FilterTarget::Title);

        let request: FilterRequest = serde_json::from_str(r#"{"text":"hi","strategy":"confetti"}"#).unwrap();
        assert_eq!(request.strategy, ReplacementStrategy::Asterisk);
    }

    #[test]
    fn response_reports_only_changed_steps() {
        let result = FilterResult {
            input: "oh crap".into(),
            parameters: FilterParameters::default(),
            steps: Some(vec![
                FilterStep { input: "oh crap".into(), source_name: "a".into(), output: Some("oh ****".into()) },
                FilterStep { input: "oh ****".into(), source_name: "b".into(), output: None },
            ]),
            matches: Some(vec!["crap".into()]),
        };

        let response = FilterResponse::from(&result);
        assert!(response.contains_profanity);
        assert_eq!(response.filtered_text.as_deref(), Some("oh ****"));
        let steps = response.filtration_steps.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].source, "a");

        let json = serde_json::to_value(FilterResponse::from(result)).unwrap();
        assert_eq!(json["containsProfanity"], true);
        assert_eq!(json["replacementStrategy"], "asterisk");
    }
}
