//! The `live` command: JSON-lines filtering over stdin and stdout.
//!
//! Each input line is a `FilterRequest`; each output line is the matching
//! `FilterResponse`. Call-scoped word lists from the config and the command line are
//! loaded once and shared by every request.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use profanity_core::{
    parameters_for, CancelToken, FilterConfig, FilterEngine, FilterPipeline, FilterRequest, FilterResponse,
    ProfanityError,
};

use crate::cli::LiveCommand;
use crate::commands::build_config;

/// Runs the `live` command on the process's stdin and stdout until EOF or Ctrl-C.
pub async fn run_live_command(cmd: &LiveCommand) -> Result<()> {
    let config = build_config(&cmd.engine)?;
    let cancel = CancelToken::new();

    let watcher = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping live filtering.");
            watcher.cancel();
        }
    });

    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    run_live(&config, reader, &mut writer, &cancel).await
}

/// Answers every request line from `reader` on `writer`, one response per line.
/// Malformed lines are logged and skipped.
pub async fn run_live<R, W>(config: &FilterConfig, reader: R, writer: &mut W, cancel: &CancelToken) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let engine: Box<dyn FilterEngine> = Box::new(FilterPipeline::from_config(config));
    let shared_sources = parameters_for(config, &FilterRequest::default()).await?.additional_sources;

    let mut lines = reader.lines();
    let mut answered = 0usize;

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Cancelled while waiting for input.");
                break;
            }
            line = lines.next_line() => line.context("Failed to read request line")?,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let request: FilterRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Skipping malformed request line: {}", e);
                continue;
            }
        };

        let mut parameters = request.parameters();
        parameters.additional_sources = shared_sources.clone();

        let result = match engine.filter(Some(&request.text), &parameters, cancel).await {
            Ok(result) => result,
            Err(ProfanityError::Cancelled { completed_steps }) => {
                debug!("Request cancelled after {} step(s).", completed_steps);
                break;
            }
            Err(e) => return Err(e).context("Filtering failed"),
        };

        let response = FilterResponse::from(result);
        let mut json = serde_json::to_string(&response).context("Failed to serialize response")?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        writer.flush().await?;
        answered += 1;
    }

    info!("Live filtering finished after {} request(s).", answered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_with_list(dir: &tempfile::TempDir) -> FilterConfig {
        fs::write(dir.path().join("base.txt"), "crap\n").unwrap();
        FilterConfig {
            word_list_dir: Some(dir.path().to_path_buf()),
            manual_words: vec!["heck".into()],
            ..FilterConfig::default()
        }
    }

    #[tokio::test]
    async fn answers_each_request_and_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_list(&dir);
        let input = concat!(
            "{\"text\":\"oh crap\"}\n",
            "not json\n",
            "\n",
            "{\"text\":\"what the heck\",\"strategy\":\"bleep\",\"target\":\"title\"}\n",
            "{\"text\":\"all clean\"}\n",
        );

        let mut out = Vec::new();
        run_live(&config, input.as_bytes(), &mut out, &CancelToken::new()).await.unwrap();

        let responses: Vec<FilterResponse> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].filtered_text.as_deref(), Some("oh ****"));
        assert_eq!(responses[1].filtered_text.as_deref(), Some("what the bleep"));
        assert_eq!(responses[1].filtration_steps.as_ref().unwrap()[0].source, "manual(1)");
        assert!(!responses[2].contains_profanity);
    }

    #[tokio::test]
    async fn stops_when_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_list(&dir);
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut out = Vec::new();
        run_live(&config, "{\"text\":\"oh crap\"}\n".as_bytes(), &mut out, &cancel).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn cancel_stops_an_idle_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_list(&dir);
        let cancel = CancelToken::new();

        // The writer half stays open, so the reader never reaches EOF.
        let (_client, server) = tokio::io::duplex(64);
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let mut out = Vec::new();
        let finished = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            run_live(&config, BufReader::new(server), &mut out, &cancel),
        )
        .await;

        assert!(finished.is_ok(), "live session kept waiting after cancel");
        finished.unwrap().unwrap();
        assert!(out.is_empty());
    }
}
