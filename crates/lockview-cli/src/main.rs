// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lockview — command-line front end.
//
// Entry point. Initialises logging, loads the config, and runs one redactor
// over a file: an image becomes a partially blurred PNG, a JSON record becomes
// its locked copy.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lockview_core::{BlurParameters, LockviewConfig};
use lockview_image::{EncodedImage, ImageRedactor};
use lockview_record::RecordRedactor;
use tracing::info;

/// Build locked previews of images and records.
#[derive(Parser, Debug)]
#[command(name = "lockview", version, about)]
struct Cli {
    /// Config file path. Defaults are used when it does not exist.
    #[arg(short, long, default_value = "lockview.json")]
    config: PathBuf,

    /// Increase log verbosity (debug level).
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blur the lower part of an image.
    Image {
        /// Encoded image file, or a text file holding a data URL with `--data-url`.
        input: PathBuf,
        /// Where to write the preview.
        output: PathBuf,
        /// Read and write data URLs instead of raw image bytes.
        #[arg(long)]
        data_url: bool,
        #[command(flatten)]
        overrides: BlurOverrides,
    },
    /// Replace every value of a JSON record with placeholders.
    Record {
        /// JSON record file.
        input: PathBuf,
        /// Where to write the locked record. Printed to stdout when omitted.
        output: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON.
    ShowConfig,
}

/// Per-run overrides of the configured blur parameters.
#[derive(Args, Debug, Default)]
struct BlurOverrides {
    #[arg(long)]
    blur_radius: Option<f32>,
    #[arg(long)]
    visible_ratio: Option<f32>,
    #[arg(long)]
    fade_ratio: Option<f32>,
    #[arg(long)]
    highlight_opacity: Option<f32>,
}

impl BlurOverrides {
    fn apply(&self, mut params: BlurParameters) -> BlurParameters {
        if let Some(radius) = self.blur_radius {
            params.blur_radius = radius;
        }
        if let Some(ratio) = self.visible_ratio {
            params.visible_ratio = ratio;
        }
        if let Some(ratio) = self.fade_ratio {
            params.fade_ratio = ratio;
        }
        if let Some(opacity) = self.highlight_opacity {
            params.highlight_opacity = opacity;
        }
        params
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = LockviewConfig::load_or_default(&cli.config);

    match cli.command {
        Command::Image {
            input,
            output,
            data_url,
            overrides,
        } => {
            let params = overrides.apply(config.blur);
            run_image(&input, &output, data_url, params).await
        }
        Command::Record { input, output } => run_record(&input, output.as_deref(), config),
        Command::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

async fn run_image(input: &Path, output: &Path, data_url: bool, params: BlurParameters) -> Result<()> {
    let redactor = ImageRedactor::new(params);

    if data_url {
        let url = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let preview = redactor.redact_data_url(&url);
        std::fs::write(output, preview)
            .with_context(|| format!("failed to write {}", output.display()))?;
    } else {
        let bytes =
            std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
        let preview = redactor.redact_async(EncodedImage::from_bytes(bytes)).await;
        std::fs::write(output, &preview.bytes)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(mime = %preview.mime, bytes = preview.bytes.len(), "Image preview written");
    }
    Ok(())
}

fn run_record(input: &Path, output: Option<&Path>, config: LockviewConfig) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let locked = RecordRedactor::new(config.placeholders).redact_json(&text);
    let json = serde_json::to_string_pretty(&locked)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Locked record written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

// -- Tests --------------------------------------------------------------------
