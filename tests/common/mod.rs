#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Frame data in the layout the frame generator emits: a `// Frame N`
/// comment, then one `[...],` line per row of `RGB8::new` literals.
pub fn frame_data(frame_count: usize, rows: usize, cols: usize) -> String {
    let mut text = String::from(
        "// Video frames generated from PNG files (hand video)\n\
         // Frame duration for 10 FPS (100ms per frame)\n\
         const HAND_FRAME_DURATION: Duration = Duration::from_millis(100);\n\
         const HAND_FRAMES: [([[RGB8; 12]; 8], Duration); HAND_FRAME_COUNT] = [\n",
    );
    for frame in 0..frame_count {
        text.push_str(&format!("    // Frame {}\n    (\n        [\n", frame + 1));
        for row in 0..rows {
            let pixels = (0..cols)
                .map(|col| {
                    let (r, g, b) = pixel_at(frame, row, col);
                    format!("RGB8::new({r}, {g}, {b})")
                })
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!("        [{pixels}],\n"));
        }
        text.push_str("        ],\n        HAND_FRAME_DURATION,\n    ),\n");
    }
    text.push_str("];\n");
    text
}

pub fn pixel_at(frame: usize, row: usize, col: usize) -> (u8, u8, u8) {
    (
        (frame * 17 % 256) as u8,
        (row * 31 % 256) as u8,
        (col * 19 % 256) as u8,
    )
}

#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{body}")).expect("script should write");
    let mut perms = fs::metadata(path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("script should be executable");
}

pub fn dir_entries(path: &Path) -> Vec<String> {
    let mut names = fs::read_dir(path)
        .expect("dir should read")
        .map(|entry| {
            entry
                .expect("entry should read")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}
