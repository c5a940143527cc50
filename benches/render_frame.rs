//! Parse and render benchmarks.
//! Run: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_reel::{parse, render_frame, Frame, Pixel, FRAME_HEIGHT, FRAME_WIDTH};

fn sample_data(frame_count: usize) -> String {
    let mut text = String::new();
    for frame in 0..frame_count {
        text.push_str(&format!("    // Frame {}\n    (\n        [\n", frame + 1));
        for row in 0..FRAME_HEIGHT {
            let pixels = (0..FRAME_WIDTH)
                .map(|col| format!("RGB8::new({}, {}, {})", frame % 256, row * 30, col * 20))
                .collect::<Vec<_>>()
                .join(", ");
            text.push_str(&format!("        [{pixels}],\n"));
        }
        text.push_str("        ],\n    ),\n");
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_data(70);
    c.bench_function("parse_70_frames", |b| b.iter(|| black_box(parse(black_box(&text)))));
}

fn bench_render(c: &mut Criterion) {
    let frame = Frame::new(vec![vec![Pixel::new(90, 75, 67); FRAME_WIDTH]; FRAME_HEIGHT]);

    let mut group = c.benchmark_group("render_frame");
    group.sample_size(50);
    group.bench_function("scale_40", |b| b.iter(|| black_box(render_frame(&frame, 40).expect("render"))));
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
