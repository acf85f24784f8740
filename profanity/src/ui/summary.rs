//! Step summary printed after a filter run.

use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use owo_colors::OwoColorize;
use profanity_core::FilterResult;
use std::io::{self, Write};

/// Writes which word lists changed the text and how many words matched.
pub fn print_summary<W: Write>(result: &FilterResult, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let heading = "Filter Summary:";
    if supports_color {
        writeln!(writer, "\n{}", heading.bold())?;
    } else {
        writeln!(writer, "\n{}", heading)?;
    }

    if !result.is_filtered() {
        writeln!(writer, "No profanity found ({} word list(s) checked).", result.steps().len())?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Step", "Word list", "Changed"]);

    for (index, step) in result.steps().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            step.source_name.clone(),
            if step.is_changed() { "yes".to_string() } else { "no".to_string() },
        ]);
    }

    writeln!(writer, "{}", table)?;
    writeln!(
        writer,
        "Strategy: {}  Target: {}  Matches: {}",
        result.parameters.strategy,
        result.parameters.target,
        result.matches().len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use profanity_core::{FilterParameters, FilterStep};

    #[test]
    fn lists_every_step() {
        let result = FilterResult {
            input: "oh crap".into(),
            parameters: FilterParameters::default(),
            steps: Some(vec![
                FilterStep { input: "oh crap".into(), source_name: "american_english".into(), output: Some("oh ****".into()) },
                FilterStep { input: "oh ****".into(), source_name: "british_english".into(), output: None },
            ]),
            matches: Some(vec!["crap".into()]),
        };

        let mut out = Vec::new();
        print_summary(&result, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("american_english"));
        assert!(text.contains("british_english"));
        assert!(text.contains("Matches: 1"));
    }

    #[test]
    fn clean_result_says_so() {
        let result = FilterResult::empty("", FilterParameters::default());
        let mut out = Vec::new();
        print_summary(&result, &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No profanity found"));
    }
}
