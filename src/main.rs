//! docdiff: document similarity scoring and multi-granularity diff tool.

use anyhow::Result;
use clap::{Parser, Subcommand};
use docdiff::{
    cli,
    config::{load_or_default, AppConfig, ComparePaths, ConfigPreset},
    engine::DiffMode,
    pipeline::exit_codes,
    report::ReportFormat,
    score::Algorithm,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version)]
#[command(about = "Document similarity scoring and diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Documents identical (or --fail-on-diff not set)
    1  Differences detected
    2  Error occurred

EXAMPLES:
    # Compare two text documents
    docdiff compare old.txt new.txt

    # CI check: JSON output, fail when anything changed
    docdiff compare old.txt new.txt -o json --fail-on-diff

    # Whole-text diff with character offsets
    docdiff compare old.txt new.txt --mode full

    # Semantic similarity with a trained word2vec text model
    docdiff compare old.txt new.txt -a embedding --model vectors.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the first (baseline) document
    doc1: PathBuf,

    /// Path to the second document
    doc2: PathBuf,

    /// Similarity algorithm
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Diff granularity
    #[arg(short, long)]
    mode: Option<DiffMode>,

    /// Path to a word2vec text-format embedding model
    #[arg(long)]
    model: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Diff lines shown before truncation in summary output
    #[arg(long)]
    max_diff_lines: Option<usize>,

    /// Exit with code 1 if any difference is detected
    #[arg(long)]
    fail_on_diff: bool,

    /// Configuration preset (default, ci, large-docs)
    #[arg(long)]
    preset: Option<String>,

    /// Exclude overly frequent elements from the alignment index
    #[arg(long)]
    filter_popular: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and report similarity plus differences
    Compare(CompareArgs),

    /// Print an example configuration file
    InitConfig,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("docdiff={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge CLI arguments over the loaded configuration.
fn build_config(cli: &Cli, args: &CompareArgs) -> Result<AppConfig> {
    let mut config = if let Some(name) = &args.preset {
        let preset = ConfigPreset::from_name(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown preset '{name}' (available: {})",
                ConfigPreset::all()
                    .iter()
                    .map(ConfigPreset::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        AppConfig::from_preset(preset)
    } else {
        let (config, loaded_from) = load_or_default(cli.config.as_deref())?;
        if let Some(path) = loaded_from {
            tracing::debug!(path = %path.display(), "using config file");
        }
        config
    };

    if let Some(algorithm) = args.algorithm {
        config.compare.algorithm = algorithm;
    }
    if let Some(mode) = args.mode {
        config.compare.mode = mode;
    }
    if let Some(model) = &args.model {
        config.compare.model_path = Some(model.clone());
        // A model on the command line implies embedding mode unless the
        // algorithm was given explicitly.
        if args.algorithm.is_none() {
            config.compare.algorithm = Algorithm::Embedding;
        }
    }
    if let Some(format) = args.output {
        config.output.format = format;
    }
    if let Some(file) = &args.output_file {
        config.output.file = Some(file.clone());
    }
    if let Some(max) = args.max_diff_lines {
        config.output.max_diff_lines = max;
    }
    if args.fail_on_diff {
        config.behavior.fail_on_diff = true;
    }
    if args.filter_popular {
        config.compare.scoring.align.filter_popular = true;
    }
    if cli.quiet {
        config.behavior.quiet = true;
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Compare(args) => {
            let config = build_config(cli, args)?;
            let paths = ComparePaths {
                doc1: args.doc1.clone(),
                doc2: args.doc2.clone(),
            };
            cli::run_compare(&paths, &config)
        }
        Commands::InitConfig => {
            print!("{}", docdiff::config::generate_example_config());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
