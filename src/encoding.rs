use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use tempfile::TempDir;

use crate::error::EncodeError;
use crate::frames::FrameSequence;
use crate::render::{render_frame, scaled_dimensions};

pub const DEFAULT_SCALE: u32 = 40;
pub const DEFAULT_FPS: u32 = 10;
pub const DEFAULT_CRF: u8 = 18;

/// ffmpeg's `image2` demuxer reads the scratch frames through this pattern.
pub const FRAME_PATTERN: &str = "frame_%04d.png";
const SCRATCH_PREFIX: &str = "frame-reel-";
const MAX_CRF: u8 = 51;
/// Largest accepted scale; 12288×8192 output frames.
pub const MAX_SCALE: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FfmpegMode {
    #[default]
    Auto,
    System,
    Sidecar,
}

impl FfmpegMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::System => "system",
            Self::Sidecar => "sidecar",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EncodeSettings {
    pub scale: u32,
    pub fps: u32,
    pub crf: u8,
    pub ffmpeg_mode: FfmpegMode,
    /// Explicit encoder executable; wins over `ffmpeg_mode`.
    pub ffmpeg_path: Option<PathBuf>,
    /// Parent for the scratch frame directory. Defaults to the system temp dir.
    pub scratch_root: Option<PathBuf>,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            fps: DEFAULT_FPS,
            crf: DEFAULT_CRF,
            ffmpeg_mode: FfmpegMode::default(),
            ffmpeg_path: None,
            scratch_root: None,
        }
    }
}

impl EncodeSettings {
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(EncodeError::invalid_settings(format!(
                "scale must be in 1..={MAX_SCALE}, got {}",
                self.scale
            )));
        }
        if self.fps == 0 {
            return Err(EncodeError::invalid_settings("fps must be > 0"));
        }
        if self.crf > MAX_CRF {
            return Err(EncodeError::invalid_settings(format!(
                "crf must be in 0..={MAX_CRF}, got {}",
                self.crf
            )));
        }
        Ok(())
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Renders every frame to a scratch PNG sequence and hands it to ffmpeg.
///
/// The scratch directory is removed on every return path, and so are any
/// output directories this call created when it fails. On success the video
/// exists at `output_path`; any existing file there is overwritten.
pub fn encode(
    frames: &FrameSequence,
    output_path: &Path,
    settings: &EncodeSettings,
) -> Result<(), EncodeError> {
    settings.validate()?;
    if frames.is_empty() {
        return Err(EncodeError::NoFrames);
    }
    let program = resolve_ffmpeg_program(settings)?;

    let scratch = scratch_dir(settings.scratch_root.as_deref())?;
    write_frames(frames, scratch.path(), settings.scale)?;

    tracing::info!(
        "Creating video with {} frames at {} fps...",
        frames.len(),
        settings.fps
    );
    let output_dir = OutputDir::create_for(output_path)?;
    let args = ffmpeg_args(&scratch.path().join(FRAME_PATTERN), settings, output_path);
    run_ffmpeg(&program, &args)?;
    output_dir.keep();

    drop(scratch);
    Ok(())
}

fn scratch_dir(root: Option<&Path>) -> Result<TempDir, EncodeError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(SCRATCH_PREFIX);
    let dir = match root {
        Some(root) => builder.tempdir_in(root),
        None => builder.tempdir(),
    }
    .map_err(EncodeError::Scratch)?;
    tracing::debug!(scratch = %dir.path().display(), "created scratch directory");
    Ok(dir)
}

fn write_frames(frames: &FrameSequence, dir: &Path, scale: u32) -> Result<(), EncodeError> {
    let (width, height) = scaled_dimensions(scale)?;
    tracing::info!("Rendering {} frames at {}x{}", frames.len(), width, height);

    for (index, frame) in frames.iter().enumerate() {
        let path = dir.join(frame_file_name(index));
        render_frame(frame, scale)?
            .save(&path)
            .map_err(|source| EncodeError::WriteFrame {
                index,
                path: path.clone(),
                source,
            })?;
        tracing::trace!(frame = index, path = %path.display(), "wrote frame");
    }
    Ok(())
}

pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:04}.png")
}

fn resolve_ffmpeg_program(settings: &EncodeSettings) -> Result<PathBuf, EncodeError> {
    if let Some(path) = &settings.ffmpeg_path {
        return Ok(path.clone());
    }

    let program = match settings.ffmpeg_mode {
        FfmpegMode::Auto | FfmpegMode::System => PathBuf::from("ffmpeg"),
        FfmpegMode::Sidecar => sidecar_program()?,
    };
    tracing::debug!(
        mode = settings.ffmpeg_mode.label(),
        program = %program.display(),
        "resolved ffmpeg"
    );
    Ok(program)
}

#[cfg(feature = "sidecar_ffmpeg")]
fn sidecar_program() -> Result<PathBuf, EncodeError> {
    let path = ffmpeg_sidecar::paths::ffmpeg_path();
    if !path.exists() {
        tracing::info!("downloading ffmpeg sidecar binary");
        ffmpeg_sidecar::download::auto_download()
            .map_err(|error| EncodeError::Sidecar(format!("auto-download failed: {error:#}")))?;
    }
    Ok(path)
}

#[cfg(not(feature = "sidecar_ffmpeg"))]
fn sidecar_program() -> Result<PathBuf, EncodeError> {
    Err(EncodeError::Sidecar(
        "built without `sidecar_ffmpeg`; rebuild with `--features sidecar_ffmpeg`".to_owned(),
    ))
}

/// Output directories created for one encode. Dropped without `keep`, the
/// topmost directory this run created is removed again.
struct OutputDir {
    created_root: Option<PathBuf>,
}

impl OutputDir {
    fn create_for(output_path: &Path) -> Result<Self, EncodeError> {
        let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        else {
            return Ok(Self { created_root: None });
        };

        let created_root = parent
            .ancestors()
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .last()
            .map(Path::to_path_buf);
        std::fs::create_dir_all(parent).map_err(|source| EncodeError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
        Ok(Self { created_root })
    }

    fn keep(mut self) {
        self.created_root = None;
    }
}

impl Drop for OutputDir {
    fn drop(&mut self) {
        if let Some(root) = self.created_root.take() {
            let _ = std::fs::remove_dir_all(&root);
        }
    }
}

pub fn ffmpeg_args(input_pattern: &Path, settings: &EncodeSettings, output_path: &Path) -> Vec<String> {
    vec![
        "-hide_banner".to_owned(),
        "-loglevel".to_owned(),
        "error".to_owned(),
        "-y".to_owned(),
        "-framerate".to_owned(),
        settings.fps.to_string(),
        "-i".to_owned(),
        input_pattern.to_string_lossy().into_owned(),
        "-c:v".to_owned(),
        "libx264".to_owned(),
        "-pix_fmt".to_owned(),
        "yuv420p".to_owned(),
        "-crf".to_owned(),
        settings.crf.to_string(),
        output_path.to_string_lossy().into_owned(),
    ]
}

fn run_ffmpeg(program: &Path, args: &[String]) -> Result<(), EncodeError> {
    tracing::debug!(program = %program.display(), args = %args.join(" "), "running ffmpeg");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                EncodeError::FfmpegNotFound {
                    program: program.to_path_buf(),
                }
            } else {
                EncodeError::Spawn {
                    program: program.to_path_buf(),
                    args: args.join(" "),
                    source,
                }
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EncodeError::FfmpegFailed {
            status: output.status,
            args: args.join(" "),
            stderr_tail: last_n_chars(&stderr, 500),
        });
    }
    Ok(())
}

fn last_n_chars(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    s.chars()
        .skip(count.saturating_sub(max_chars))
        .collect::<String>()
        .trim()
        .to_owned()
}
