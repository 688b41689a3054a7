//! Agidash - terminal dashboard for an AI agent platform

use agidash::App;
use agidash::config::Config;
use agidash::{oauth, paths};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

/// Terminal dashboard for an AI agent platform
#[derive(Parser)]
#[command(name = "agidash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the OAuth authorization URL without launching the dashboard
    AuthUrl {
        /// Also open the URL in the system browser
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    // Clear the log file on startup
    if let Err(e) = std::fs::write(paths::log_path(), "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f "$TMPDIR"/agidash.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "agidash.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e:#}; using default configuration");
            Config::default()
        }
    };

    match cli.command {
        Some(Commands::AuthUrl { open }) => cmd_auth_url(&config, open),
        None => agidash::tui::run(App::new(config)),
    }
}

fn cmd_auth_url(config: &Config, open: bool) -> Result<()> {
    let url = config.oauth.authorization_url()?;
    println!("{url}");
    if open {
        oauth::open_in_browser(&url)?;
    }
    Ok(())
}
