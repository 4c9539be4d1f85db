//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use readapt_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "readapt")]
#[command(version)]
#[command(about = "Accessibility-oriented reading assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Adapt text for a condition profile
    Adapt {
        /// The text to adapt (stdin is read when neither --text nor --file is given)
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text", value_name = "PATH")]
        file: Option<PathBuf>,

        /// Condition to adapt for (none, dyslexia, adhd, vision)
        #[arg(short, long, default_value = "none")]
        condition: String,

        /// Dyslexia severity (mild, severe)
        #[arg(long, default_value = "mild")]
        severity: String,

        /// ADHD variant (normal, inattentive, hyperactive, combined)
        #[arg(long, default_value = "combined", value_name = "VARIANT")]
        adhd_type: String,

        /// Vision level (normal, mild, moderate, severe)
        #[arg(long, default_value = "moderate", value_name = "LEVEL")]
        vision_level: String,

        /// Resolve the profile from stored assessment results instead
        #[arg(long, value_name = "PATH", conflicts_with = "condition")]
        assessment: Option<PathBuf>,

        /// Adapt via the remote service, falling back to the local engine
        #[arg(long)]
        remote: bool,

        /// Emit the full adapted output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the profile and style resolved from stored assessment results
    Profile {
        /// Assessment results file (default: ${READAPT_HOME}/assessment.json)
        #[arg(long, value_name = "PATH")]
        assessment: Option<PathBuf>,
    },

    /// Generate a summary via the summary service
    Summarize {
        /// The text to summarize (stdin is read when neither --text nor --file is given)
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text", value_name = "PATH")]
        file: Option<PathBuf>,

        /// Summary flavor (adhd, general)
        #[arg(long, default_value = "general", value_name = "TYPE")]
        summary_type: String,

        /// Maximum summary length in words
        #[arg(long, default_value_t = 100)]
        max_length: u32,
    },

    /// Synthesize speech via the TTS service
    Speak {
        /// The text to speak (stdin is read when neither --text nor --file is given)
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text", value_name = "PATH")]
        file: Option<PathBuf>,

        /// Voice to use (default from config)
        #[arg(long)]
        voice: Option<String>,

        /// Speech speed multiplier (default from config)
        #[arg(long)]
        speed: Option<f32>,
    },

    /// Propose reading adjustments from activity signals
    Suggest {
        /// Condition to tailor suggestions for (none, dyslexia, adhd, vision)
        #[arg(short, long, default_value = "none")]
        condition: String,

        /// Seconds since the last interaction
        #[arg(long, default_value_t = 0)]
        idle_secs: u64,

        /// Upward scroll events in the current session
        #[arg(long, default_value_t = 0)]
        scroll_ups: u32,

        /// Total active reading seconds in the current session
        #[arg(long, default_value_t = 0)]
        reading_secs: u64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Show the resolved configuration
    Show,
    /// Set the services base URL
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

/// Initializes stderr logging, filtered by READAPT_LOG (or RUST_LOG).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("READAPT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::load().context("load config")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli, &config).await })
}

async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Adapt {
            text,
            file,
            condition,
            severity,
            adhd_type,
            vision_level,
            assessment,
            remote,
            json,
        } => {
            commands::adapt::run(
                commands::adapt::AdaptOptions {
                    text,
                    file,
                    condition,
                    severity,
                    adhd_type,
                    vision_level,
                    assessment,
                    remote,
                    json,
                },
                config,
            )
            .await
        }
        Commands::Profile { assessment } => commands::profile::run(assessment.as_deref()),
        Commands::Summarize {
            text,
            file,
            summary_type,
            max_length,
        } => {
            commands::summarize::run(
                text.as_deref(),
                file.as_deref(),
                &summary_type,
                max_length,
                config,
            )
            .await
        }
        Commands::Speak {
            text,
            file,
            voice,
            speed,
        } => commands::speak::run(text.as_deref(), file.as_deref(), voice, speed, config).await,
        Commands::Suggest {
            condition,
            idle_secs,
            scroll_ups,
            reading_secs,
        } => commands::suggest::run(&condition, idle_secs, scroll_ups, reading_secs),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(config),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
