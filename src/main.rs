//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};

use chatlens::ChatlensError;
use chatlens::cli::{Args, ReportFormat};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::core::{FilterConfig, apply_filters};
use chatlens::format::{ExportFormat, write_to_format};
use chatlens::logging::init_cli_logging;
use chatlens::parser::ChatParser;
use chatlens::report::Analyzer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_cli_logging(args.quiet, args.verbose);

    // Validate everything the user typed before touching the input file
    let filter = build_filter(&args)?;
    let analysis_config = load_analysis_config(&args)?;
    let export_format = match &args.export {
        Some(path) => Some(match args.export_format {
            Some(format) => ExportFormat::from(format),
            None => ExportFormat::from_path(path)?,
        }),
        None => None,
    };

    let mut parser_config = ParserConfig::new();
    if let Some(format) = args.time_format {
        parser_config = parser_config.with_format(format);
    }

    info!(input = %args.input.display(), "reading chat export");
    let timeline = ChatParser::with_config(parser_config).parse_file(&args.input)?;
    debug!(
        records = timeline.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "parsed"
    );

    if args.senders {
        for sender in timeline.senders() {
            println!("{}", sender);
        }
        return Ok(());
    }

    if let (Some(path), Some(format)) = (&args.export, export_format) {
        let selected = apply_filters(timeline.records(), &filter);
        write_to_format(selected.iter().copied(), path, format)?;
        info!(records = selected.len(), path = %path.display(), %format, "exported timeline");
    }

    let report = Analyzer::with_config(analysis_config).analyze(&timeline, &filter);
    let rendered = match args.format {
        ReportFormat::Text => report.to_string(),
        ReportFormat::Json => report.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{}", ensure_trailing_newline(rendered)),
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, ChatlensError> {
    let mut filter = FilterConfig::new();
    if let Some(after) = &args.after {
        filter = filter.with_date_from(after)?;
    }
    if let Some(before) = &args.before {
        filter = filter.with_date_to(before)?;
    }
    if let Some(user) = &args.user {
        filter = filter.with_sender(user.clone());
    }
    Ok(filter)
}

fn load_analysis_config(args: &Args) -> Result<AnalysisConfig, ChatlensError> {
    let Some(path) = &args.config else {
        return Ok(AnalysisConfig::default());
    };
    let json = fs::read_to_string(path)?;
    AnalysisConfig::from_json(&json)
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
