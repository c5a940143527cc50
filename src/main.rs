use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use frame_reel::encoding::{FfmpegMode, DEFAULT_FPS, DEFAULT_SCALE, MAX_SCALE};
use frame_reel::pipeline::{self, ReelConfig};
use frame_reel::{telemetry, ReelError};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FRAME_REEL_GIT_HASH"),
    ")"
);

/// Renders `hand_frames_data.rs` into `hand_video.mp4`. With no arguments
/// both paths resolve against the crate root.
#[derive(Debug, Parser)]
#[command(name = "make_hand_video")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Render 8x12 RGB frame data into an MP4")]
struct Cli {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Edge length in pixels of one logical pixel.
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    scale: u32,
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
    #[arg(long, value_enum, default_value_t = FfmpegMode::Auto)]
    ffmpeg_mode: FfmpegMode,
    /// Parse and validate only.
    #[arg(long)]
    check: bool,
    /// Print the run report as JSON on stdout; logs go to stderr.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self, root: &Path) -> ReelConfig {
        let mut config = ReelConfig::rooted_at(root);
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.encode.scale = self.scale;
        config.encode.fps = self.fps;
        config.encode.ffmpeg_mode = self.ffmpeg_mode;
        config.check_only = self.check;
        config
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let json = cli.json;
    telemetry::init(json);

    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = cli.into_config(repo_root);

    match pipeline::run(&config) {
        Ok(report) => {
            if json {
                let rendered =
                    serde_json::to_string_pretty(&report).context("failed to serialize report")?;
                println!("{rendered}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error @ (ReelError::InputNotFound(_) | ReelError::NoFramesParsed(_))) => {
            tracing::error!("{error}");
            Ok(ExitCode::FAILURE)
        }
        Err(error) => Err(anyhow::Error::new(error).context(format!(
            "failed to build {}",
            config.output.display()
        ))),
    }
}
