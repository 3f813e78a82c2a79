use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use orthologue_fetch::config::{
    ConfigLoader, ConfigOverrides, DEFAULT_BASE_URL, DEFAULT_GENE_SYMBOL, DEFAULT_SPECIES,
    DEFAULT_TIMEOUT_SECS,
};
use orthologue_fetch::error::OrthoError;
use orthologue_fetch::output::{ConsoleOutput, JsonOutput, OutputMode};
use orthologue_fetch::pipeline::Pipeline;
use orthologue_fetch::transport::HttpTransport;

#[derive(Parser)]
#[command(name = "ortho-fetch")]
#[command(about = "Fetch annotated orthologue protein sequences from Ensembl into one FASTA file")]
#[command(version, author)]
struct Cli {
    #[arg(long, help = format!("Source species [default: {DEFAULT_SPECIES}]"))]
    species: Option<String>,

    #[arg(long, help = format!("Gene symbol [default: {DEFAULT_GENE_SYMBOL}]"))]
    gene: Option<String>,

    #[arg(long, help = "Output FASTA path [default: <GENE>_all_orthologues.fasta]")]
    output: Option<Utf8PathBuf>,

    #[arg(long, help = format!("REST endpoint [default: {DEFAULT_BASE_URL}]"))]
    base_url: Option<String>,

    #[arg(long, help = format!("Per-request timeout [default: {DEFAULT_TIMEOUT_SECS}]"))]
    timeout_secs: Option<u64>,

    #[arg(long, help = "Print a JSON run summary instead of progress lines")]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<OrthoError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &OrthoError) -> u8 {
    match error {
        OrthoError::InvalidConfig(_) => 2,
        OrthoError::LookupStatus { .. }
        | OrthoError::Http(_)
        | OrthoError::MalformedResponse(_) => 3,
        OrthoError::Filesystem(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Console
    };

    let config = ConfigLoader::resolve(ConfigOverrides {
        base_url: cli.base_url,
        species: cli.species,
        gene_symbol: cli.gene,
        output: cli.output,
        timeout_secs: cli.timeout_secs,
    })?;
    let transport = HttpTransport::new(config.timeout)?;
    let pipeline = Pipeline::new(transport, config);

    match output_mode {
        OutputMode::Console => {
            pipeline.run(&ConsoleOutput)?;
        }
        OutputMode::Json => {
            let summary = pipeline.run(&JsonOutput)?;
            JsonOutput::print_summary(&summary).into_diagnostic()?;
        }
    }
    Ok(())
}
