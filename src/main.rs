use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use toolchain_check::config::Config;
use toolchain_check::logging;
use toolchain_check::shell::{scope, timer};
use toolchain_check::version::checker::CheckOptions;
use toolchain_check::version::driver::VersionChecker;
use toolchain_check::version::http::PageFetcher;
use toolchain_check::version::recipes::default_recipes;
use toolchain_check::version::report::ConsoleReporter;
use toolchain_check::version::target::Target;

#[derive(Parser)]
#[command(name = "toolchain-check")]
#[command(
    version,
    about = "Check toolchain dependencies for newer upstream releases"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Turn on debug info, including per-target timing
    #[arg(long, global = true)]
    debug: bool,

    /// Tool to version check instead of the whole set
    #[arg(long)]
    target: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command in each directory of a scope
    Run {
        /// Group of directories where the command should run
        #[arg(long)]
        scope: String,
        /// Command to run in each directory
        #[arg(long)]
        cmd: String,
        /// Directory the scope paths are relative to (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Time a command
    Time {
        /// Command to time
        #[arg(long)]
        cmd: String,
        /// Working directory for the command
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    match cli.command {
        None => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(check_versions(config, cli.debug, cli.target)),
        Some(Command::Run {
            scope: scope_name,
            cmd,
            root,
        }) => {
            let root = match root {
                Some(root) => root,
                None => std::env::current_dir().context("Failed to read current directory")?,
            };
            scope::run_in_scope(
                &config.scopes,
                &scope_name,
                &cmd,
                &root,
                &mut std::io::stdout(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Time { cmd, dir }) => {
            let elapsed = timer::time_command(&cmd, &dir)?;
            println!("duration of the command '{}' in hours:minutes:seconds", cmd);
            println!("{}", timer::format_elapsed(elapsed));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check_versions(
    config: Config,
    debug: bool,
    target: Option<String>,
) -> anyhow::Result<ExitCode> {
    let fetcher =
        PageFetcher::new(config.fetch_timeout()).context("Failed to create HTTP client")?;

    let checker = VersionChecker::new(
        Target::from_table(&config.targets),
        default_recipes(Arc::new(fetcher)),
        Arc::new(ConsoleReporter),
        CheckOptions {
            timeout: config.fetch_timeout(),
            timing: debug,
        },
    );

    let outcome = checker.run(target.as_deref()).await;
    Ok(ExitCode::from(outcome.exit_code()))
}
