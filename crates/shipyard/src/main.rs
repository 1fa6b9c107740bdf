mod environment;
mod error;
mod interaction;
mod logging;
mod release;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shipyard_core::{BumpType, StepSelection};
use shipyard_operations::ReleaseRequest;
use shipyard_project::discover_project;
use tracing::debug;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "shipyard")]
#[command(version = env!("SHIPYARD_VERSION"))]
#[command(
    about = "Release an npm package: test, build, version, tag, publish and update docs",
    long_about = None
)]
struct Cli {
    /// Version type to release; prompted for when omitted on a terminal
    #[arg(long = "type", value_enum)]
    bump_type: Option<BumpType>,

    /// Record every command and file change instead of performing it
    #[arg(long)]
    dry_run: bool,

    /// Comma-separated release steps to run, e.g. `--steps=tag,publish,docs`
    #[arg(long, default_value_t = StepSelection::all())]
    steps: StepSelection,

    /// Path to start project discovery from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let start_path = resolve_start_path(cli.path)?;
    let project = discover_project(&start_path)?;
    let environment = environment::detect();
    debug!(
        package = %project.manifest.name,
        version = %project.manifest.version,
        root = %project.root.display(),
        ?environment,
        "release context"
    );
    let request = ReleaseRequest {
        bump_type: cli.bump_type,
        dry_run: cli.dry_run,
        steps: cli.steps,
    };

    release::run(&project, &environment, &request)
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }

    if let Some(steps) = error.resume_steps() {
        eprintln!("hint: resume with `npm run release -- --steps={steps}`");
    }
}
