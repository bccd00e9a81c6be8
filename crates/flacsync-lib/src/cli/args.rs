use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Mirror {
        config_path: Option<String>,
        catalog_path: Option<String>,
        base_url: Option<String>,
        root_dir: Option<String>,
    },
    List {
        config_path: Option<String>,
        catalog_path: Option<String>,
        base_url: Option<String>,
        root_dir: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "flacsync",
    version,
    about = "Mirror a FLAC audio collection from an archive.org-style file index, verifying each item against its declared MD5"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    /// No subcommand means `mirror` with the built-in defaults.
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Parse the index and download every missing or corrupt item
    Mirror {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file overriding the built-in defaults"
        )]
        config: Option<String>,

        #[arg(
            long = "catalog",
            value_name = "FILE",
            help = "Overrides the catalog index path"
        )]
        catalog: Option<String>,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Overrides the remote collection base URL"
        )]
        base_url: Option<String>,

        #[arg(
            short = 'o',
            long = "root-dir",
            value_name = "DIR",
            help = "Overrides the directory author subdirectories are created in"
        )]
        root_dir: Option<String>,
    },

    /// Parse the index and print the per-entry summary records without downloading
    List {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file overriding the built-in defaults"
        )]
        config: Option<String>,

        #[arg(
            long = "catalog",
            value_name = "FILE",
            help = "Overrides the catalog index path"
        )]
        catalog: Option<String>,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Overrides the remote collection base URL"
        )]
        base_url: Option<String>,

        #[arg(
            short = 'o',
            long = "root-dir",
            value_name = "DIR",
            help = "Overrides the directory author subdirectories are created in"
        )]
        root_dir: Option<String>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        None => Command::Mirror {
            config_path: None,
            catalog_path: None,
            base_url: None,
            root_dir: None,
        },
        Some(CliCommand::Mirror {
            config,
            catalog,
            base_url,
            root_dir,
        }) => Command::Mirror {
            config_path: config,
            catalog_path: catalog,
            base_url,
            root_dir,
        },
        Some(CliCommand::List {
            config,
            catalog,
            base_url,
            root_dir,
        }) => Command::List {
            config_path: config,
            catalog_path: catalog,
            base_url,
            root_dir,
        },
    };

    Args { command, log_level }
}
