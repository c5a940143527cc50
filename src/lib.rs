#![forbid(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod frames;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod telemetry;
pub mod validate;

pub use encoding::{encode, EncodeSettings, FfmpegMode};
pub use error::{EncodeError, ReelError, ReelResult};
pub use frames::{Frame, FrameSequence, Pixel, Row, FRAME_HEIGHT, FRAME_WIDTH};
pub use parser::parse;
pub use pipeline::{run, ReelConfig, RunReport};
pub use render::render_frame;
pub use validate::{validate, ShapeWarning};
