// ABOUTME: CLI binary for the folio layout engine.
// ABOUTME: Reads extracted-content JSON and writes the composed body, full page, or analysis JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use digests_folio::{
    pull_quote_count, suggest_filename, ExtractedContent, LayoutError, Pipeline, Style,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Lay out an extracted article with images and pull quotes")]
struct Args {
    /// Extracted content JSON file ("-" or omitted reads stdin)
    #[arg()]
    input: Option<PathBuf>,

    /// Output format: body (default), document, json
    #[arg(short = 'f', long = "format", default_value = "body")]
    format: String,

    /// Output file or directory (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Layout style: magazine or minimal
    #[arg(long = "style", default_value = "magazine")]
    style: String,

    /// Number of pull quotes to select
    #[arg(long = "pull-quotes", default_value_t = 2, allow_negative_numbers = true)]
    pull_quotes: i64,

    /// Leave images out of the layout
    #[arg(long = "no-images")]
    no_images: bool,

    /// Leave pull quotes out of the layout
    #[arg(long = "no-pull-quotes")]
    no_pull_quotes: bool,

    /// Do not mark the opening paragraph for a drop cap
    #[arg(long = "no-drop-cap")]
    no_drop_cap: bool,

    /// Omit the page header and footer in document output
    #[arg(long = "no-header-footer")]
    no_header_footer: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Log analysis details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Body,
    Document,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Body | OutputFormat::Document => "html",
        }
    }
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "body" | "html" => Ok(OutputFormat::Body),
        "document" | "page" => Ok(OutputFormat::Document),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown format '{}', expected body, document or json", other),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|e| anyhow!("cannot read file {:?}: {}", path, e))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| anyhow!("cannot read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let format = parse_format(&args.format)?;
    let style: Style = args.style.parse()?;
    let num_pull_quotes = pull_quote_count(args.pull_quotes)?;

    let pipeline = Pipeline::builder()
        .style(style)
        .num_pull_quotes(num_pull_quotes)
        .include_images(!args.no_images)
        .include_pull_quotes(!args.no_pull_quotes)
        .include_drop_cap(!args.no_drop_cap)
        .include_header_footer(!args.no_header_footer)
        .build()?;

    let raw = read_input(args.input.as_deref())?;
    let content = ExtractedContent::from_json(&raw)?;

    let start = Instant::now();
    let output_str = match format {
        OutputFormat::Body => pipeline.run(&content).body,
        OutputFormat::Document => pipeline.compose_document(&pipeline.analyze(&content)),
        OutputFormat::Json => serde_json::to_string_pretty(&pipeline.run(&content))?,
    };
    let elapsed = start.elapsed();

    match &args.output {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(suggest_filename(
                    &content.title,
                    &content.source_url,
                    format.extension(),
                ))
            } else {
                path.clone()
            };
            fs::write(&target, &output_str).map_err(|e| {
                LayoutError::output("write", Some(anyhow!("{}: {}", target.display(), e)))
            })?;
            tracing::info!(path = %target.display(), "wrote output");
        }
        None => println!("{}", output_str),
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
