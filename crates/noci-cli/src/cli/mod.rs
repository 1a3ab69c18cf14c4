use clap::Parser;
use noci_core::domain::NociError;
use noci_core::{ScanSettings, read_report_source, render_report, scan_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let scan_error = error.as_noci_error();
            eprintln!("{}", scan_error.diagnostic_line());
            eprintln!("{}", scan_error.fatal_exit_line());
            scan_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("noci-summary".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => execute(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "noci-summary", about = "Summarize NOCI calculation output logs")]
struct Cli {
    /// NOCI output file to parse
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Oscillator-strength threshold for printing a state
    #[arg(long = "osc-threshold", default_value_t = 0.0)]
    osc_threshold: f64,

    /// Chirgwin-Coulson weight printing threshold
    #[arg(long = "weight-threshold", default_value_t = 0.01)]
    weight_threshold: f64,

    /// Number of singular values to print per determinant
    #[arg(short = 'n', long = "singular-values", default_value_t = 3)]
    singular_values: usize,

    /// Emit scan diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn execute(cli: Cli) -> Result<i32, CliError> {
    init_diagnostics(cli.verbose)?;

    let settings = ScanSettings {
        oscillator_threshold: cli.osc_threshold,
        weight_threshold: cli.weight_threshold,
        singular_value_count: cli.singular_values,
    };
    tracing::debug!(
        file = %cli.file.display(),
        oscillator_threshold = settings.oscillator_threshold,
        weight_threshold = settings.weight_threshold,
        singular_values = settings.singular_value_count,
        "parsing NOCI output"
    );

    let source = read_report_source(&cli.file).map_err(CliError::Scan)?;
    let set = scan_report(&source, settings).map_err(CliError::Scan)?;
    print!("{}", render_report(&set));

    eprintln!("Normal Termination");
    Ok(0)
}

/// Diagnostics go to stderr through the subscriber; the report owns
/// stdout. `--verbose` raises the filter to DEBUG for the scan targets.
fn init_diagnostics(verbose: bool) -> Result<(), CliError> {
    let default_directives = if verbose {
        "noci_core=debug,noci_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install the diagnostic subscriber: {error}"))?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Scan(NociError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_noci_error(&self) -> NociError {
        match self {
            Self::Usage(message) => NociError::usage("INPUT.CLI_USAGE", message.clone()),
            Self::Scan(error) => error.clone(),
            Self::Internal(error) => NociError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
