//! Read-only listings: strategies, targets and word lists.

use anyhow::{anyhow, Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use profanity_core::word_lists::repository::default_word_list_dir;
use profanity_core::{FilterEngine, FilterPipeline, FilterTarget, ReplacementStrategy, WordListRepository};

use crate::cli::ListsCommand;

#[derive(Debug, Serialize)]
struct TargetDescription {
    value: FilterTarget,
    name: &'static str,
    renders_markdown: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WordListSummary {
    source_name: String,
    word_count: usize,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Prints every replacement strategy with its description.
pub fn run_strategies<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    let descriptions: Vec<_> = ReplacementStrategy::ALL.iter().map(|s| s.describe()).collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&descriptions)?)?;
        return Ok(());
    }

    let mut table = new_table(vec!["Strategy", "Description"]);
    for description in &descriptions {
        table.add_row(vec![description.name, description.description]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}

/// Prints every filter target.
pub fn run_targets<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    let targets: Vec<_> = FilterTarget::ALL
        .iter()
        .map(|t| TargetDescription { value: *t, name: t.as_str(), renders_markdown: t.renders_markdown() })
        .collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&targets)?)?;
        return Ok(());
    }

    let mut table = new_table(vec!["Target", "Markdown"]);
    for target in &targets {
        table.add_row(vec![target.name, if target.renders_markdown { "yes" } else { "no" }]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}

/// Prints the built-in word lists, or the words of the list named in `cmd`.
pub async fn run_lists<W: Write>(cmd: &ListsCommand, writer: &mut W) -> Result<()> {
    let dir = cmd.word_list_dir.clone().unwrap_or_else(default_word_list_dir);
    let repository = WordListRepository::new(dir);

    if let Some(name) = &cmd.name {
        let words = repository
            .word_list(name)
            .await?
            .ok_or_else(|| anyhow!("No word list named '{}' in {}", name, repository.dir().display()))?;
        if cmd.json {
            writeln!(writer, "{}", serde_json::to_string_pretty(&words)?)?;
        } else {
            for word in words {
                writeln!(writer, "{}", word)?;
            }
        }
        return Ok(());
    }

    let engine: Box<dyn FilterEngine> = Box::new(FilterPipeline::new(repository.clone()));
    let sources = engine
        .sources()
        .await
        .with_context(|| format!("Failed to load word lists from {}", repository.dir().display()))?;
    let summaries: Vec<_> = sources
        .iter()
        .map(|source| WordListSummary { source_name: source.source_name.clone(), word_count: source.words.len() })
        .collect();

    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    let mut table = new_table(vec!["Word list", "Words"]);
    for summary in &summaries {
        table.add_row(vec![summary.source_name.clone(), summary.word_count.to_string()]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_json_lists_all_fourteen() {
        let mut out = Vec::new();
        run_strategies(&mut out, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[0]["name"], "asterisk");
    }

    #[test]
    fn targets_table_mentions_every_target() {
        let mut out = Vec::new();
        run_targets(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        for target in FilterTarget::ALL {
            assert!(text.contains(target.as_str()));
        }
    }

    #[tokio::test]
    async fn lists_words_of_a_named_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("house.txt"), "heck\ndarn\n").unwrap();
        let cmd = ListsCommand { name: Some("house".into()), word_list_dir: Some(dir.path().to_path_buf()), json: true };

        let mut out = Vec::new();
        run_lists(&cmd, &mut out).await.unwrap();
        let words: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains(&"heck".to_string()));
    }

    #[tokio::test]
    async fn summarises_lists_in_application_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zulu.txt"), "heck\n").unwrap();
        std::fs::write(dir.path().join("alpha.txt"), "darn\ndrat\n").unwrap();
        let cmd = ListsCommand { name: None, word_list_dir: Some(dir.path().to_path_buf()), json: true };

        let mut out = Vec::new();
        run_lists(&cmd, &mut out).await.unwrap();
        let lists: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(lists[0]["sourceName"], "alpha");
        assert_eq!(lists[0]["wordCount"], 2);
        assert_eq!(lists[1]["sourceName"], "zulu");
    }

    #[tokio::test]
    async fn unknown_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ListsCommand { name: Some("nope".into()), word_list_dir: Some(dir.path().to_path_buf()), json: false };
        let mut out = Vec::new();
        assert!(run_lists(&cmd, &mut out).await.is_err());
    }
}
