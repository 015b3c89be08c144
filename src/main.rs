use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use harvard_cite::config::{find_config_file, load_config, user_config_path, Config};
use harvard_cite::ui::{self, ListFormat, Palette};
use harvard_cite::utils::CitationLog;
use harvard_cite::{Session, SessionOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Harvard Cite - Generate Harvard-style references and in-text citations
#[derive(Parser, Debug)]
#[command(name = "harvard-cite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Harvard-style references and in-text citations", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors in the diagnostic log
    #[arg(long, short)]
    quiet: bool,

    /// Output format for the "View All" listing
    #[arg(long, short, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// File citations are appended to (overrides the config file)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Do not append citations to the log file
    #[arg(long, global = true, default_value_t = false)]
    no_log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for the citation listing
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default configuration as TOML
    InitConfig {
        /// Destination (default: the per-user config file)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("harvard_cite={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(Commands::InitConfig { path, force }) = &cli.command {
        return init_config(path.clone(), *force);
    }

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }
    let config = load_config(config_path.as_deref())?;

    let options = session_options(&cli, &config);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), options);

    // The interactive path always exits cleanly
    if let Err(e) = session.run() {
        tracing::error!("Session ended: {}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Merge command-line overrides into the loaded configuration
fn session_options(cli: &Cli, config: &Config) -> SessionOptions {
    let log = if cli.no_log || !config.log.enabled {
        None
    } else {
        let path = cli.log_file.clone().unwrap_or_else(|| config.log.path.clone());
        Some(CitationLog::new(path))
    };

    let list_format = match cli.output {
        Some(OutputFormat::Auto) => {
            if ui::is_terminal() {
                ListFormat::Table
            } else {
                ListFormat::Json
            }
        }
        Some(OutputFormat::Table) => ListFormat::Table,
        Some(OutputFormat::Json) => ListFormat::Json,
        Some(OutputFormat::Plain) => ListFormat::Plain,
        None => config.display.output,
    };

    SessionOptions {
        log,
        require_author: config.prompts.require_author,
        list_format,
        palette: Palette::default(),
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(user_config_path) {
        Some(path) => path,
        None => anyhow::bail!("No config directory found; pass a path explicitly"),
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["harvard-cite"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, None);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.no_log);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["harvard-cite", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["harvard-cite", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_output_format() {
        let cli = Cli::parse_from(["harvard-cite", "-o", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let cli = Cli::parse_from(["harvard-cite", "--output", "table"]);
        assert_eq!(cli.output, Some(OutputFormat::Table));
    }

    #[test]
    fn test_cli_init_config_command() {
        let cli = Cli::parse_from(["harvard-cite", "init-config", "/tmp/hc.toml", "--force"]);
        match cli.command {
            Some(Commands::InitConfig { path, force }) => {
                assert_eq!(path, Some(PathBuf::from("/tmp/hc.toml")));
                assert!(force);
            }
            _ => panic!("Expected InitConfig command"),
        }
    }

    #[test]
    fn test_session_options_overrides() {
        let cli = Cli::parse_from([
            "harvard-cite",
            "--log-file",
            "/tmp/out.txt",
            "--output",
            "plain",
        ]);
        let mut config = Config::default();
        config.display.output = ListFormat::Json;
        config.prompts.require_author = true;

        let options = session_options(&cli, &config);
        assert_eq!(
            options.log.as_ref().map(|log| log.path().to_path_buf()),
            Some(PathBuf::from("/tmp/out.txt"))
        );
        assert_eq!(options.list_format, ListFormat::Plain);
        assert!(options.require_author);
    }

    #[test]
    fn test_session_options_no_log() {
        let cli = Cli::parse_from(["harvard-cite", "--no-log"]);
        let options = session_options(&cli, &Config::default());
        assert!(options.log.is_none());

        let cli = Cli::parse_from(["harvard-cite"]);
        let mut config = Config::default();
        config.log.enabled = false;
        assert!(session_options(&cli, &config).log.is_none());
    }
}
