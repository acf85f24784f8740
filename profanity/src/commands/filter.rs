//! The `filter` command: read text, run the pipeline, print the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use profanity_core::{
    parameters_for, CancelToken, FilterConfig, FilterEngine, FilterPipeline, FilterRequest, FilterResponse,
    FilterResult, FilterTarget, ReplacementStrategy,
};

use crate::cli::FilterCommand;
use crate::commands::{build_config, info_msg, warn_msg};
use crate::ui::{diff_viewer, summary};

/// Options for a single filter run, resolved from the command line.
pub struct FilterOptions {
    pub input: String,
    pub strategy: ReplacementStrategy,
    pub target: FilterTarget,
    pub output_path: Option<PathBuf>,
    pub json: bool,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Runs the `filter` command. Returns `true` when profanity was found.
pub async fn run_filter_command(cmd: &FilterCommand, quiet: bool) -> Result<bool> {
    let config = build_config(&cmd.engine)?;
    let input = read_input(cmd.input_file.as_ref())?;

    let opts = FilterOptions {
        input,
        strategy: resolve_strategy(cmd.strategy.as_deref(), &config, quiet),
        target: cmd.target.unwrap_or(config.default_target),
        output_path: cmd.output.clone(),
        json: cmd.json,
        diff: cmd.diff,
        no_summary: cmd.no_summary,
        quiet,
    };

    run_filter_opts(&config, opts).await
}

/// Filters `opts.input` with the pipeline described by `config` and writes the outputs.
pub async fn run_filter_opts(config: &FilterConfig, opts: FilterOptions) -> Result<bool> {
    info!("Starting filter operation.");

    let request = FilterRequest {
        text: opts.input.clone(),
        strategy: opts.strategy,
        target: opts.target,
    };
    let parameters = parameters_for(config, &request).await?;
    let engine: Box<dyn FilterEngine> = Box::new(FilterPipeline::from_config(config));

    let result = engine
        .filter(Some(&opts.input), &parameters, &CancelToken::new())
        .await
        .context("Filtering failed")?;

    debug!(
        "Filtered {} byte(s) through {} step(s), {} match(es).",
        opts.input.len(),
        result.steps().len(),
        result.matches().len()
    );

    handle_primary_output(&opts, &result)?;
    handle_summary(&opts, &result)?;

    info!("Filter operation completed.");
    Ok(result.is_filtered())
}

fn resolve_strategy(raw: Option<&str>, config: &FilterConfig, quiet: bool) -> ReplacementStrategy {
    match raw {
        None => config.default_strategy,
        Some(name) => name.parse().unwrap_or_else(|_| {
            if !quiet {
                warn_msg(format!("Unknown strategy '{}', using {}.", name, ReplacementStrategy::default()));
            }
            ReplacementStrategy::parse_or_default(name)
        }),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn render(opts: &FilterOptions, result: &FilterResult, writer: &mut dyn Write, supports_color: bool) -> Result<()> {
    if opts.json {
        let response = FilterResponse::from(result);
        let json = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
        writeln!(writer, "{}", json)?;
    } else if opts.diff {
        let mut buffer = Vec::new();
        diff_viewer::print_diff(&opts.input, result.output_or_input(), &mut buffer, supports_color)?;
        writer.write_all(&buffer)?;
    } else {
        write!(writer, "{}", result.output_or_input())?;
        if !result.output_or_input().ends_with('\n') {
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn handle_primary_output(opts: &FilterOptions, result: &FilterResult) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing filtered content to file: {}", path.display()));
        }
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))?;
        render(opts, result, &mut file, false)?;
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        render(opts, result, &mut writer, supports_color)?;
    }
    Ok(())
}

fn handle_summary(opts: &FilterOptions, result: &FilterResult) -> Result<()> {
    if !opts.no_summary && !opts.quiet && !opts.json {
        let supports_color = io::stderr().is_terminal();
        summary::print_summary(result, &mut io::stderr(), supports_color)?;
    }
    Ok(())
}
