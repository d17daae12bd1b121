//! Resizer CLI: run the pipeline or the codec locally.
//!
//! Reads the same environment variables as the Lambda function (a `.env` file
//! is honoured). Use `STORAGE_BACKEND=memory` and `NOTIFIER_BACKEND=log` to
//! stay off AWS.

use anyhow::Context;
use clap::{Parser, Subcommand};
use resizer_core::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_RESIZE_WIDTH};
use resizer_core::{LogFormat, Settings};
use resizer_infra::init_telemetry;
use resizer_lambda::{handle_payload, resize_file};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resizer", about = "Image resize pipeline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one invocation with an event document read from a file
    Invoke {
        /// Path to the S3 notification JSON
        #[arg(long)]
        event: PathBuf,
    },
    /// Resize a local JPEG or PNG file
    Resize {
        /// Image to resize
        input: PathBuf,
        /// Target width in pixels
        #[arg(long, default_value_t = DEFAULT_RESIZE_WIDTH)]
        width: u32,
        /// JPEG quality (1-100)
        #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
        /// Output path (defaults to resized/<name> next to the input)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env();

    // The CLI prints results to stdout; keep logs human-readable unless asked otherwise
    let format = if std::env::var("LOG_FORMAT").is_ok() {
        settings.log_format
    } else {
        LogFormat::Pretty
    };
    init_telemetry(format).map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    match cli.command {
        Commands::Invoke { event } => {
            let raw = std::fs::read_to_string(&event)
                .with_context(|| format!("Failed to read {}", event.display()))?;
            let payload: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", event.display()))?;

            let result = handle_payload(&settings, payload).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Resize {
            input,
            width,
            quality,
            output,
        } => {
            anyhow::ensure!(width > 0, "width must be positive");
            let written = resize_file(&input, output.as_deref(), width, quality.clamp(1, 100))?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
