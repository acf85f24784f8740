//! Command implementations for the `profanity` CLI.

pub mod filter;
pub mod lists;
pub mod live;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;

use profanity_core::FilterConfig;

use crate::cli::EngineArgs;
use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Loads the config file (or the embedded defaults) and applies the command-line
/// overrides on top.
pub fn build_config(args: &EngineArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FilterConfig::load_default()?,
    };

    if let Some(dir) = &args.word_list_dir {
        config.word_list_dir = Some(dir.clone());
    }
    for word in args.words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
        if !config.manual_words.iter().any(|existing| existing == word) {
            config.manual_words.push(word.to_string());
        }
    }
    for url in &args.word_list_urls {
        if !config.word_list_urls.contains(url) {
            config.word_list_urls.push(url.clone());
        }
    }
    config.escape_markdown |= args.markdown_safe;

    debug!(
        "Effective config: dir={}, {} manual word(s), {} remote list(s), escape_markdown={}",
        config.resolved_word_list_dir().display(),
        config.manual_words.len(),
        config.word_list_urls.len(),
        config.escape_markdown
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_words_extend_the_defaults() {
        let args = EngineArgs {
            words: vec!["heck".into(), " ".into(), "heck".into(), "darn".into()],
            markdown_safe: true,
            word_list_dir: Some("/tmp/lists".into()),
            ..EngineArgs::default()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.manual_words, vec!["heck", "darn"]);
        assert!(config.escape_markdown);
        assert_eq!(config.word_list_dir.as_deref(), Some(std::path::Path::new("/tmp/lists")));
    }
}
