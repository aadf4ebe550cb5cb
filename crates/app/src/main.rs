//! ParcelSort - package classification CLI
//!
//! Main entry point for the `parcelsort` binary.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parcelsort_app::{classify_args, run_batch, run_demo, AppContext};
use parcelsort_infra::observability::logging::{self, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "parcelsort", version, about = "Classify packages by dimensions and mass")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Print the operational summary as JSON before exiting
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the built-in reference packages
    Demo,
    /// Classify a single package
    ///
    /// Values are passed through unparsed so negative or non-numeric input
    /// is reported by the classifier itself.
    Classify {
        /// Width in cm
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Height in cm
        #[arg(allow_hyphen_values = true)]
        height: String,
        /// Length in cm
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// Mass in kg
        #[arg(allow_hyphen_values = true)]
        mass: String,
    },
    /// Classify every package in a JSON array file
    Batch {
        /// Input file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Whether command results are written to stdout as a JSON document
    fn writes_json_to_stdout(&self) -> bool {
        matches!(self, Command::Batch { output: None, .. })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty });

    let ctx = AppContext::new();
    tracing::info!(
        fragile = ctx.config.enable_fragile,
        express = ctx.config.enable_express,
        "ParcelSort starting"
    );

    let outcome = execute(&cli.command, &ctx);

    if cli.summary {
        let summary = summary_json(&ctx)?;
        if cli.command.writes_json_to_stdout() {
            eprintln!("{summary}");
        } else {
            println!("{summary}");
        }
    }

    outcome
}

fn execute(command: &Command, ctx: &AppContext) -> Result<()> {
    match command {
        Command::Demo => {
            let results = run_demo(ctx).context("running demo cases")?;
            for result in &results {
                let status = if result.matches() { "ok" } else { "MISMATCH" };
                println!("{}:", result.name);
                println!("   Dimensions: {}x{}x{} cm", result.width, result.height, result.length);
                println!("   Mass: {} kg", result.mass);
                println!("   Volume: {} cm³", result.volume);
                println!("   Classification: {}", result.category);
                println!("   Status: {status} (expected {})", result.expected);
            }
        }
        Command::Classify { width, height, length, mass } => {
            let args = [width.clone(), height.clone(), length.clone(), mass.clone()];
            let category = classify_args(ctx, &args)?;
            println!("{category}");
        }
        Command::Batch { input, output } => {
            let report = match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("creating output file {}", path.display()))?;
                    run_batch(ctx, input, BufWriter::new(file))
                }
                None => run_batch(ctx, input, std::io::stdout().lock()),
            }
            .with_context(|| format!("processing batch {}", input.display()))?;

            tracing::info!(
                total = report.outcomes.len(),
                failed = report.failed(),
                "Batch complete"
            );
        }
    }
    Ok(())
}

fn summary_json(ctx: &AppContext) -> Result<String> {
    serde_json::to_string_pretty(&ctx.summary()).context("serializing operational summary")
}
