// ShowLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (platform default or --config)
// 3. Logging initialisation (debug mode support)
// 4. Captured log read + parse
// 5. Interactive session on stdin/stdout

use clap::Parser;
use showlog::app::session::{self, SessionExit};
use showlog::core::model::MalformedMarkerPolicy;
use showlog::core::parser::parse_lines;
use showlog::platform::config::{self, AppConfig, PlatformPaths};
use showlog::platform::fs::read_log_lines;
use showlog::util::error::{ConfigError, SessionError, ShowLogError};
use showlog::util::{constants, logging};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// ShowLog - mock switch CLI for captured show-command logs.
///
/// Parses a log holding the output of many `show` commands and lets you
/// re-run those commands interactively, as if connected to the device.
#[derive(Parser, Debug)]
#[command(name = "showlog", version, about)]
struct Cli {
    /// Captured switch log to browse.
    #[arg(value_name = "LOGFILE")]
    path: PathBuf,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Do not print the welcome banner.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Skip command markers with no closing backtick instead of aborting.
    #[arg(long = "skip-malformed")]
    skip_malformed: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging exists so its [logging] section can
    // take effect; problems are reported once the subscriber is up.
    let loaded = match cli.config {
        Some(ref path) => config::load_explicit_config(path),
        None => Ok(config::load_config(&PlatformPaths::resolve().config_file())),
    };
    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(cli.debug, None, None);
            return fail(e.into());
        }
    };

    logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );
    report_config_warnings(&config_warnings);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        log = %cli.path.display(),
        "ShowLog starting"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run(&cli, &app_config, stdin.lock(), stdout.lock()) {
        Ok(exit) => {
            tracing::info!(?exit, "ShowLog finished");
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

/// Read, parse, and serve the captured log until the user leaves.
///
/// Nothing is written to `output` unless the log loads and names a device.
fn run<R: BufRead, W: Write>(
    cli: &Cli,
    app_config: &AppConfig,
    input: R,
    mut output: W,
) -> showlog::util::error::Result<SessionExit> {
    let policy = if cli.skip_malformed {
        MalformedMarkerPolicy::Skip
    } else {
        app_config.malformed_markers
    };

    let lines = read_log_lines(&cli.path).map_err(|e| ShowLogError::Io {
        path: cli.path.clone(),
        operation: "read log file",
        source: e,
    })?;

    let commands = parse_lines(&lines, policy)?;
    tracing::info!(
        commands = commands.len(),
        policy = %policy,
        "Captured log loaded"
    );

    // Session::new validates the device name before anything is printed,
    // so the banner only appears for a log that can actually be served.
    let mut session = session::Session::new(&commands)?;

    if app_config.show_banner && !cli.quiet {
        writeln!(output, "{}", banner(&cli.path)).map_err(|source| SessionError::Io {
            operation: "write banner",
            source,
        })?;
    }

    let exit = session.run(input, output)?;
    Ok(exit)
}

fn report_config_warnings(warnings: &[ConfigError]) {
    for warning in warnings {
        tracing::warn!(error = %warning, "Config warning");
    }
}

fn fail(e: ShowLogError) -> ExitCode {
    tracing::error!(error = %e, "ShowLog aborted");
    eprintln!("Error: {e}");
    ExitCode::FAILURE
}

/// Welcome text shown before the first prompt.
fn banner(path: &Path) -> String {
    format!(
        "\n\
         \tWelcome to the {name} mock CLI!\n\
         \n\
         \tType list_commands to see every captured command. To filter the\n\
         \tlist, put a search string after it, e.g.:\n\
         \n\
         \t    list_commands show zoneset active\n\
         \n\
         \tType a command exactly as listed to see its output, or quit to leave.\n\
         \n\
         \tLOGFILE = {path}",
        name = constants::APP_NAME,
        path = path.display(),
    )
}
