use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, error, LevelFilter};

use dft_analyzer::files::generate::{DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_FILE};
use dft_analyzer::files::{read_samples, write_report, write_report_file, write_sine_file};
use dft_analyzer::{AnalyzerConfig, SpectrumAnalyzer};

/// Direct-sum DFT of an evenly sampled signal file.
#[derive(Parser)]
#[command(name = "dft", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report amplitude and phase per bin up to the Nyquist limit
    Analyze {
        /// Sample file, one decimal number per line
        input: PathBuf,

        /// Samples per unit time
        #[arg(allow_negative_numbers = true)]
        sampling_frequency: f64,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the report to stdout
        #[arg(short, long)]
        quiet: bool,

        /// Spread bins across worker threads
        #[arg(long)]
        parallel: bool,
    },

    /// Write one sine cycle as a sample file
    Generate {
        /// Number of samples
        #[arg(default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Output path
        #[arg(default_value = DEFAULT_SAMPLE_FILE)]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            input,
            sampling_frequency,
            output,
            quiet,
            parallel,
        } => {
            // Validate parameters before touching the input file
            let analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
                sampling_frequency,
                parallel,
            })?;
            debug!("{:?}", analyzer.config());

            let samples = read_samples(&input)?;
            let bins = analyzer
                .analyze(&samples)
                .with_context(|| format!("cannot analyze {}", input.display()))?;
            debug!("Computed {} bins", bins.len());

            if let Some(path) = output {
                write_report_file(&path, &bins)?;
            }
            if !quiet {
                write_report(&mut io::stdout().lock(), &bins).context("cannot write to stdout")?;
            }
        }

        Command::Generate { count, output } => {
            write_sine_file(&output, count)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error!("{:#}", err);
        process::exit(1);
    }
}
