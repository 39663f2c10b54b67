//! Modot CLI - filtered module dependency graphs from the command line.
//!
//! Reads "A B" dependency edge records (by default from `go mod graph`),
//! keeps only the edges touching modules whose name contains a keyword, and
//! prints the surviving subgraph as Graphviz DOT with matching nodes
//! highlighted.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use modot::{EdgeSource, Error, KeywordFilter, ModuleGraph};

/// Modot: render a filtered module dependency graph as Graphviz DOT.
#[derive(Parser)]
#[command(name = "modot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Keep only edges touching modules whose name contains this substring
    ///
    /// Matching is plain case-sensitive containment. The default empty
    /// keyword matches nothing, producing an empty graph.
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// Graphviz fill color for modules matching the keyword
    #[arg(short, long, default_value = modot::filter::DEFAULT_FILL_COLOR)]
    color: String,

    /// Read edge records from a file instead of running `go mod graph` ("-" for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the DOT document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity. Logs go to stderr so the DOT
    // document on stdout stays pipeable.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> modot::Result<()> {
    let source = EdgeSource::from_input(cli.input.as_deref());
    let reader = source.open()?;

    let mut graph = ModuleGraph::new(KeywordFilter::new(&cli.keyword, &cli.color));
    let summary = graph.parse(reader)?;
    tracing::info!(
        "parsed {} lines: kept {} records ({} modules, {} edges), skipped {} malformed",
        summary.lines,
        summary.kept,
        graph.node_count(),
        graph.edge_count(),
        summary.skipped.len()
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            modot::render(&graph, &mut out)?;
            out.flush().map_err(Error::Sink)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            modot::render(&graph, &mut out)?;
            out.flush().map_err(Error::Sink)?;
        }
    }

    Ok(())
}
