mod common;

use frame_reel::{parse, validate, Pixel, ShapeWarning, FRAME_HEIGHT, FRAME_WIDTH};

use common::{frame_data, pixel_at};

#[test]
fn generated_data_file_yields_every_frame_in_order() {
    let frames = parse(&frame_data(5, FRAME_HEIGHT, FRAME_WIDTH));

    assert_eq!(frames.len(), 5);
    for (f, frame) in frames.iter().enumerate() {
        assert!(frame.is_canonical(), "frame {f} should be 8x12");
        for (r, row) in frame.rows().iter().enumerate() {
            for (c, pixel) in row.iter().enumerate() {
                assert_eq!(*pixel, Pixel::from(pixel_at(f, r, c)));
            }
        }
    }
    assert!(validate(&frames).is_empty());
}

#[test]
fn three_pixel_example_parses_and_warns_twice() {
    let text = "// Frame 1\n        [RGB8::new(10,20,30), RGB8::new(40,50,60), RGB8::new(70,80,90)],\n";
    let frames = parse(text);

    assert_eq!(frames.len(), 1);
    assert_eq!(
        frames.frames()[0].rows(),
        &[vec![
            Pixel::new(10, 20, 30),
            Pixel::new(40, 50, 60),
            Pixel::new(70, 80, 90),
        ]]
    );
    assert_eq!(
        validate(&frames),
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
fn ragged_frames_are_kept_without_padding() {
    let frames = parse(&frame_data(2, 3, 5));
    assert_eq!(frames.len(), 2);
    assert!(frames
        .iter()
        .all(|frame| frame.row_count() == 3 && frame.rows().iter().all(|row| row.len() == 5)));
    assert_eq!(validate(&frames).len(), 2 * (1 + 3));
}
