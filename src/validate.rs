use std::fmt;

use serde::Serialize;

use crate::frames::{FrameSequence, FRAME_HEIGHT, FRAME_WIDTH};

/// Advisory shape mismatch. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeWarning {
    RowCount { frame: usize, rows: usize },
    PixelCount { frame: usize, row: usize, pixels: usize },
}

impl fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { frame, rows } => {
                write!(f, "frame {frame} has {rows} rows (expected {FRAME_HEIGHT})")
            }
            Self::PixelCount { frame, row, pixels } => write!(
                f,
                "frame {frame}, row {row} has {pixels} pixels (expected {FRAME_WIDTH})"
            ),
        }
    }
}

/// Reports every frame and row that deviates from the 8×12 shape.
///
/// Warnings are logged as they are found and also returned in order.
pub fn validate(frames: &FrameSequence) -> Vec<ShapeWarning> {
    let mut warnings = Vec::new();
    for (frame_index, frame) in frames.iter().enumerate() {
        if frame.row_count() != FRAME_HEIGHT {
            warnings.push(ShapeWarning::RowCount {
                frame: frame_index,
                rows: frame.row_count(),
            });
        }
        for (row_index, row) in frame.rows().iter().enumerate() {
            if row.len() != FRAME_WIDTH {
                warnings.push(ShapeWarning::PixelCount {
                    frame: frame_index,
                    row: row_index,
                    pixels: row.len(),
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{Frame, Pixel};

    #[test]
    fn canonical_sequence_has_no_warnings() {
        let frame = Frame::new(vec![vec![Pixel::default(); FRAME_WIDTH]; FRAME_HEIGHT]);
        let frames = FrameSequence::new(vec![frame.clone(), frame]);
        assert!(validate(&frames).is_empty());
    }

    #[test]
    fn short_frame_reports_rows_then_pixels() {
        let frame = Frame::new(vec![vec![Pixel::default(); 3]]);
        let warnings = validate(&FrameSequence::new(vec![frame]));
        assert_eq!(
            warnings,
            vec![
                ShapeWarning::RowCount { frame: 0, rows: 1 },
                ShapeWarning::PixelCount {
                    frame: 0,
                    row: 0,
                    pixels: 3
                },
            ]
        );
    }

    #[test]
    fn warnings_identify_frame_and_row() {
        let good = vec![Pixel::default(); FRAME_WIDTH];
        let mut rows = vec![good; FRAME_HEIGHT];
        rows[5].push(Pixel::default());
        let frames = FrameSequence::new(vec![Frame::default(), Frame::new(rows)]);

        let warnings = validate(&frames);
        assert_eq!(
            warnings,
            vec![
                ShapeWarning::RowCount { frame: 0, rows: 0 },
                ShapeWarning::PixelCount {
                    frame: 1,
                    row: 5,
                    pixels: 13
                },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "frame 1, row 5 has 13 pixels (expected 12)"
        );
    }
}
