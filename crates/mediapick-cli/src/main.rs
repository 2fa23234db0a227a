//! mediapick: run a picker session against local files.
//!
//! The "picker" selects the paths given on the command line; the normalized
//! result is printed as the bridge JSON payload. Settings come from the
//! MEDIAPICK_* environment variables.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use mediapick_bridge::{Command, ImagePickerPlugin};
use mediapick_cli::{bridge_args, init_tracing, scripted_selection};
use mediapick_core::PickerConfig;
use mediapick_processing::FileContentResolver;
use mediapick_services::{PickerLauncher, StaticLauncher};

#[derive(Parser)]
#[command(name = "mediapick", about = "Media picker harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a single image or video
    PickImage {
        /// File the picker selects
        file: PathBuf,
        /// Intermediate JPEG quality (0-100)
        #[arg(long)]
        quality: Option<i64>,
        /// Selection filter: image, video, all
        #[arg(long)]
        media_type: Option<String>,
        /// Report a user cancel instead of selecting
        #[arg(long)]
        cancel: bool,
    },
    /// Pick several images or videos
    PickImages {
        /// Files the picker selects, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Keep at most this many items
        #[arg(long)]
        max: Option<i64>,
        /// Intermediate JPEG quality (0-100)
        #[arg(long)]
        quality: Option<i64>,
        /// Selection filter: image, video, all
        #[arg(long)]
        media_type: Option<String>,
        /// Report a user cancel instead of selecting
        #[arg(long)]
        cancel: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PickerConfig::from_env().context("Invalid MEDIAPICK_* configuration")?;
    let cli = Cli::parse();

    let (command, files, cancel, args) = match cli.command {
        Commands::PickImage {
            file,
            quality,
            media_type,
            cancel,
        } => (
            Command::PickImage,
            vec![file],
            cancel,
            bridge_args(quality, media_type.as_deref(), None),
        ),
        Commands::PickImages {
            files,
            max,
            quality,
            media_type,
            cancel,
        } => (
            Command::PickImages,
            files,
            cancel,
            bridge_args(quality, media_type.as_deref(), max),
        ),
    };

    let launcher: Arc<dyn PickerLauncher> =
        Arc::new(StaticLauncher::new(scripted_selection(&files, cancel)));
    let plugin =
        ImagePickerPlugin::from_config(&config, Some(launcher), Arc::new(FileContentResolver::new()))
            .await
            .context("Failed to initialize picker")?;

    let payload = plugin
        .execute(command.as_str(), &args)
        .await
        .with_context(|| format!("{} failed", command.as_str()))?;
    print_json(&payload)?;

    mediapick_infra::shutdown_telemetry();
    Ok(())
}
