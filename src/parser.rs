//! Extracts frames from a generated Rust data file.
//!
//! The input is scanned line by line. A `// Frame` comment opens a frame,
//! every `RGB8::new(r, g, b)` literal on a line is appended to the current
//! row and a line containing `],` closes the row.

use std::sync::OnceLock;

use regex::Regex;

use crate::frames::{Frame, FrameSequence, Pixel, Row};

const FRAME_MARKER: &str = "// Frame";
const ROW_TERMINATOR: &str = "],";

fn pixel_literal_regex() -> &'static Regex {
    static PIXEL_RE: OnceLock<Regex> = OnceLock::new();
    PIXEL_RE.get_or_init(|| {
        Regex::new(r"RGB8::new\((\d+),\s*(\d+),\s*(\d+)\)")
            .expect("pixel literal regex should compile")
    })
}

#[derive(Debug, Default)]
struct Accumulator {
    frames: Vec<Frame>,
    frame: Frame,
    row: Row,
    in_frame: bool,
}

impl Accumulator {
    fn feed(mut self, line: &str) -> Self {
        if line.contains(FRAME_MARKER) {
            self.flush_frame();
            self.in_frame = true;
            return self;
        }

        if !self.in_frame {
            return self;
        }

        self.row.extend(pixels_in_line(line));

        if line.contains(ROW_TERMINATOR) && !self.row.is_empty() {
            let row = std::mem::take(&mut self.row);
            self.frame.push_row(row);
        }
        self
    }

    fn flush_frame(&mut self) {
        let frame = std::mem::take(&mut self.frame);
        if !frame.is_empty() {
            self.frames.push(frame);
        }
    }

    fn finish(mut self) -> FrameSequence {
        self.flush_frame();
        FrameSequence::new(self.frames)
    }
}

/// Parses every frame block in `text`, preserving source order.
///
/// Never fails: text that does not match a pixel literal contributes
/// nothing, and frames keep whatever shape they have in the source.
pub fn parse(text: &str) -> FrameSequence {
    text.lines()
        .fold(Accumulator::default(), Accumulator::feed)
        .finish()
}

fn pixels_in_line(line: &str) -> impl Iterator<Item = Pixel> + '_ {
    pixel_literal_regex().captures_iter(line).filter_map(|caps| {
        let r = caps[1].parse::<u8>().ok()?;
        let g = caps[2].parse::<u8>().ok()?;
        let b = caps[3].parse::<u8>().ok()?;
        Some(Pixel::new(r, g, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::new(r, g, b)
    }

    #[test]
    fn single_short_row_is_kept_as_is() {
        let text = "// Frame 1\n[RGB8::new(10,20,30), RGB8::new(40,50,60), RGB8::new(70,80,90)],\n";
        let frames = parse(text);
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames.frames()[0].rows(),
            &[vec![px(10, 20, 30), px(40, 50, 60), px(70, 80, 90)]]
        );
    }

    #[test]
    fn empty_input_has_no_frames() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn text_before_first_marker_is_ignored() {
        let text = "const X: RGB8 = RGB8::new(1, 2, 3);\n],\n// Frame 1\n[RGB8::new(4, 5, 6)],\n";
        let frames = parse(text);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(4, 5, 6)]]);
    }

    #[test]
    fn header_comment_mentioning_frame_adds_nothing() {
        let text = "// Frame duration for 10 FPS\nconst FRAMES: [([[RGB8; 12]; 8], Duration); 2] = [\n// Frame 1\n[RGB8::new(1, 1, 1)],\n";
        let frames = parse(text);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(1, 1, 1)]]);
    }

    #[test]
    fn terminator_without_pixels_adds_no_row() {
        let text = "// Frame 1\n(\n[\n[RGB8::new(1, 1, 1)],\n],\n],\n";
        let frames = parse(text);
        assert_eq!(frames.frames()[0].row_count(), 1);
    }

    #[test]
    fn rows_may_span_several_lines() {
        let text = "// Frame 1\n[RGB8::new(1, 1, 1),\n RGB8::new(2, 2, 2)],\n";
        let frames = parse(text);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(1, 1, 1), px(2, 2, 2)]]);
    }

    #[test]
    fn malformed_literals_are_skipped() {
        let text = "// Frame 1\n[RGB8::new(1, 2), RGB8::new(a, b, c), RGB8::new(300, 0, 0), RGB8::new(7, 8, 9)],\n";
        let frames = parse(text);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(7, 8, 9)]]);
    }

    #[test]
    fn frame_without_rows_is_dropped() {
        let text = "// Frame 1\n// Frame 2\n[RGB8::new(3, 3, 3)],\n// Frame 3\n";
        let frames = parse(text);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(3, 3, 3)]]);
    }

    #[test]
    fn unterminated_row_carries_into_next_frame() {
        let text = "// Frame 1\n[RGB8::new(1, 1, 1)],\n[RGB8::new(2, 2, 2)\n// Frame 2\nRGB8::new(3, 3, 3)],\n";
        let frames = parse(text);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(1, 1, 1)]]);
        assert_eq!(frames.frames()[1].rows(), &[vec![px(2, 2, 2), px(3, 3, 3)]]);
    }

    #[test]
    fn trailing_row_without_terminator_is_dropped() {
        let text = "// Frame 1\n[RGB8::new(1, 1, 1)],\n[RGB8::new(2, 2, 2)";
        let frames = parse(text);
        assert_eq!(frames.frames()[0].rows(), &[vec![px(1, 1, 1)]]);
    }
}
