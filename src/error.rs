use std::path::PathBuf;
use std::process::ExitStatus;

pub type ReelResult<T> = Result<T, ReelError>;

#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read input file {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no frames found in {}", .0.display())]
    NoFramesParsed(PathBuf),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("invalid encode settings: {0}")]
    InvalidSettings(String),

    #[error("no frames to encode")]
    NoFrames,

    #[error("failed to create scratch directory")]
    Scratch(#[source] std::io::Error),

    #[error("failed to create output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write frame {index} to {}", .path.display())]
    WriteFrame {
        index: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "ffmpeg executable not found (resolved_path={}); install ffmpeg or build with `--features sidecar_ffmpeg`",
        .program.display()
    )]
    FfmpegNotFound { program: PathBuf },

    #[error("failed to spawn ffmpeg process (resolved_path={}, args='{args}')", .program.display())]
    Spawn {
        program: PathBuf,
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ffmpeg failed with status {status} (args='{args}', stderr_tail='{stderr_tail}')")]
    FfmpegFailed {
        status: ExitStatus,
        args: String,
        stderr_tail: String,
    },

    #[error("ffmpeg sidecar unavailable: {0}")]
    Sidecar(String),
}

impl EncodeError {
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}
