use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encoding::{encode, EncodeSettings, FfmpegMode};
use crate::error::{ReelError, ReelResult};
use crate::parser::parse;
use crate::validate::{validate, ShapeWarning};

pub const DEFAULT_INPUT_FILE: &str = "hand_frames_data.rs";
pub const DEFAULT_OUTPUT_FILE: &str = "hand_video.mp4";

#[derive(Debug, Clone)]
pub struct ReelConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encode: EncodeSettings,
    /// Parse and validate only; ffmpeg is never invoked.
    pub check_only: bool,
}

impl ReelConfig {
    /// Reads `hand_frames_data.rs` from `root` and writes `hand_video.mp4` next to it.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            input: root.join(DEFAULT_INPUT_FILE),
            output: root.join(DEFAULT_OUTPUT_FILE),
            encode: EncodeSettings::default(),
            check_only: false,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        self.encode.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub frames: usize,
    pub warnings: Vec<ShapeWarning>,
    pub ffmpeg_mode: FfmpegMode,
}

/// Parse → validate → render → encode, strictly in that order.
pub fn run(config: &ReelConfig) -> ReelResult<RunReport> {
    config.validate()?;

    if !config.input.exists() {
        return Err(ReelError::InputNotFound(config.input.clone()));
    }

    tracing::info!("Extracting frames from {}...", config.input.display());
    let text = std::fs::read_to_string(&config.input).map_err(|source| ReelError::ReadInput {
        path: config.input.clone(),
        source,
    })?;
    let frames = parse(&text);
    tracing::info!("Found {} frames", frames.len());

    if frames.is_empty() {
        return Err(ReelError::NoFramesParsed(config.input.clone()));
    }

    let warnings = validate(&frames);

    let output = if config.check_only {
        None
    } else {
        encode(&frames, &config.output, &config.encode)?;
        tracing::info!("Video saved to: {}", config.output.display());
        Some(config.output.clone())
    };

    Ok(RunReport {
        input: config.input.clone(),
        output,
        frames: frames.len(),
        warnings,
        ffmpeg_mode: config.encode.ffmpeg_mode,
    })
}
