//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use taskflow::adapters::InMemoryTaskRepository;
use taskflow::config::{AppConfig, ConfigOverrides};
use taskflow::core::services::TaskService;
use taskflow::output::{LifecycleResult, OutputMode};
use taskflow::server::ApiServer;

/// taskflow - Track tasks through a fixed lifecycle over HTTP
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "Task tracking HTTP API",
    long_about = "Serve a JSON API for creating, updating, and advancing tasks.\n\n\
                  Tasks move through pending -> in-progress -> completed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Config file (defaults to ~/.config/taskflow/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Show the task status lifecycle
    Statuses,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve {
            config,
            host,
            port,
            workers,
        }) => serve(config, ConfigOverrides {
            host,
            port,
            workers,
        }),
        Some(Command::Statuses) => {
            print!("{}", LifecycleResult::current().render(output_mode));
            if output_mode == OutputMode::Json {
                println!();
            }
            Ok(())
        },
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        None => {
            print_version(output_mode);
            if output_mode == OutputMode::Human {
                println!("\nRun 'taskflow --help' for usage");
                println!("Run 'taskflow serve' to start the API");
            }
            Ok(())
        },
    }
}

fn serve(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path.as_deref())?.with_overrides(overrides);
    info!("Starting taskflow v{}", taskflow::VERSION);

    let service = TaskService::new(InMemoryTaskRepository::new());
    let server = ApiServer::bind(&config.server.bind_addr(), service, config.server.workers)?;
    server.run()
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": taskflow::VERSION
            })
        );
    } else {
        println!("taskflow v{}", taskflow::VERSION);
    }
}
