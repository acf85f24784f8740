//! The audit trail produced by one pipeline run.

use serde::Serialize;

use crate::parameters::FilterParameters;

/// One source applied to the running text.
///
/// `output` is only set when the source changed the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterStep {
    pub input: String,
    pub source_name: String,
    pub output: Option<String>,
}

impl FilterStep {
    pub fn is_changed(&self) -> bool {
        self.output.is_some()
    }
}

/// The immutable outcome of filtering one piece of text.
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub input: String,
    pub parameters: FilterParameters,
    pub steps: Option<Vec<FilterStep>>,
    pub matches: Option<Vec<String>>,
}

impl FilterResult {
    /// A result for text that needed no work (blank input).
    pub fn empty(input: impl Into<String>, parameters: FilterParameters) -> Self {
        Self {
            input: input.into(),
            parameters,
            steps: None,
            matches: None,
        }
    }

    /// The output of the last step that changed the text.
    pub fn final_output(&self) -> Option<&str> {
        self.steps
            .as_ref()?
            .iter()
            .rev()
            .find_map(|step| step.output.as_deref())
    }

    pub fn is_filtered(&self) -> bool {
        self.final_output().is_some()
    }

    /// The filtered text, or the original input when nothing matched.
    pub fn output_or_input(&self) -> &str {
        self.final_output().unwrap_or(&self.input)
    }

    pub fn steps(&self) -> &[FilterStep] {
        self.steps.as_deref().unwrap_or_default()
    }

    pub fn changed_steps(&self) -> impl Iterator<Item = &FilterStep> {
        self.steps().iter().filter(|s| s.is_changed())
    }

    pub fn matches(&self) -> &[String] {
        self.matches.as_deref().unwrap_or_default()
    }
}
