// Video frames generated from PNG files (hand video)
// Auto-generated - do not edit manually

#[allow(dead_code)]
// Frame duration for 10 FPS (100ms per frame)
const HAND_FRAME_DURATION: Duration = Duration::from_millis(100);

#[allow(dead_code)]
const HAND_FRAME_COUNT: usize = 4;

#[allow(dead_code)]
const HAND_FRAMES: [([[RGB8; 12]; 8], Duration); HAND_FRAME_COUNT] = [
    // Frame 1
    (
        [
        [RGB8::new(20, 22, 30), RGB8::new(20, 23, 30), RGB8::new(20, 24, 30), RGB8::new(20, 25, 30), RGB8::new(20, 26, 30), RGB8::new(20, 27, 30), RGB8::new(20, 28, 30), RGB8::new(20, 29, 30), RGB8::new(20, 30, 30), RGB8::new(20, 31, 30), RGB8::new(20, 32, 30), RGB8::new(20, 33, 30)],
        [RGB8::new(22, 22, 30), RGB8::new(22, 23, 30), RGB8::new(22, 24, 30), RGB8::new(22, 25, 30), RGB8::new(22, 26, 30), RGB8::new(22, 27, 30), RGB8::new(22, 28, 30), RGB8::new(22, 29, 30), RGB8::new(22, 30, 30), RGB8::new(22, 31, 30), RGB8::new(22, 32, 30), RGB8::new(22, 33, 30)],
        [RGB8::new(24, 22, 30), RGB8::new(24, 23, 30), RGB8::new(24, 24, 30), RGB8::new(24, 25, 30), RGB8::new(210, 162, 110), RGB8::new(210, 165, 110), RGB8::new(210, 168, 110), RGB8::new(210, 171, 110), RGB8::new(24, 30, 30), RGB8::new(24, 31, 30), RGB8::new(24, 32, 30), RGB8::new(24, 33, 30)],
        [RGB8::new(26, 22, 30), RGB8::new(26, 23, 30), RGB8::new(26, 24, 30), RGB8::new(26, 25, 30), RGB8::new(215, 162, 110), RGB8::new(215, 165, 110), RGB8::new(215, 168, 110), RGB8::new(215, 171, 110), RGB8::new(26, 30, 30), RGB8::new(26, 31, 30), RGB8::new(26, 32, 30), RGB8::new(26, 33, 30)],
        [RGB8::new(28, 22, 30), RGB8::new(28, 23, 30), RGB8::new(28, 24, 30), RGB8::new(28, 25, 30), RGB8::new(220, 162, 110), RGB8::new(220, 165, 110), RGB8::new(220, 168, 110), RGB8::new(220, 171, 110), RGB8::new(28, 30, 30), RGB8::new(28, 31, 30), RGB8::new(28, 32, 30), RGB8::new(28, 33, 30)],
        [RGB8::new(30, 22, 30), RGB8::new(30, 23, 30), RGB8::new(30, 24, 30), RGB8::new(30, 25, 30), RGB8::new(225, 162, 110), RGB8::new(225, 165, 110), RGB8::new(225, 168, 110), RGB8::new(225, 171, 110), RGB8::new(30, 30, 30), RGB8::new(30, 31, 30), RGB8::new(30, 32, 30), RGB8::new(30, 33, 30)],
        [RGB8::new(32, 22, 30), RGB8::new(32, 23, 30), RGB8::new(32, 24, 30), RGB8::new(32, 25, 30), RGB8::new(230, 162, 110), RGB8::new(230, 165, 110), RGB8::new(230, 168, 110), RGB8::new(230, 171, 110), RGB8::new(32, 30, 30), RGB8::new(32, 31, 30), RGB8::new(32, 32, 30), RGB8::new(32, 33, 30)],
        [RGB8::new(34, 22, 30), RGB8::new(34, 23, 30), RGB8::new(34, 24, 30), RGB8::new(34, 25, 30), RGB8::new(34, 26, 30), RGB8::new(34, 27, 30), RGB8::new(34, 28, 30), RGB8::new(34, 29, 30), RGB8::new(34, 30, 30), RGB8::new(34, 31, 30), RGB8::new(34, 32, 30), RGB8::new(34, 33, 30)],
        ],
        HAND_FRAME_DURATION,
    ),
    // Frame 2
    (
        [
        [RGB8::new(20, 22, 33), RGB8::new(20, 23, 33), RGB8::new(20, 24, 33), RGB8::new(20, 25, 33), RGB8::new(20, 26, 33), RGB8::new(20, 27, 33), RGB8::new(20, 28, 33), RGB8::new(20, 29, 33), RGB8::new(20, 30, 33), RGB8::new(20, 31, 33), RGB8::new(20, 32, 33), RGB8::new(20, 33, 33)],
        [RGB8::new(22, 22, 33), RGB8::new(22, 23, 33), RGB8::new(22, 24, 33), RGB8::new(22, 25, 33), RGB8::new(22, 26, 33), RGB8::new(22, 27, 33), RGB8::new(22, 28, 33), RGB8::new(22, 29, 33), RGB8::new(22, 30, 33), RGB8::new(22, 31, 33), RGB8::new(22, 32, 33), RGB8::new(22, 33, 33)],
        [RGB8::new(24, 22, 33), RGB8::new(24, 23, 33), RGB8::new(24, 24, 33), RGB8::new(24, 25, 33), RGB8::new(24, 26, 33), RGB8::new(24, 27, 33), RGB8::new(24, 28, 33), RGB8::new(210, 171, 120), RGB8::new(210, 174, 120), RGB8::new(210, 177, 120), RGB8::new(210, 180, 120), RGB8::new(24, 33, 33)],
        [RGB8::new(26, 22, 33), RGB8::new(26, 23, 33), RGB8::new(26, 24, 33), RGB8::new(26, 25, 33), RGB8::new(26, 26, 33), RGB8::new(26, 27, 33), RGB8::new(26, 28, 33), RGB8::new(215, 171, 120), RGB8::new(215, 174, 120), RGB8::new(215, 177, 120), RGB8::new(215, 180, 120), RGB8::new(26, 33, 33)],
        [RGB8::new(28, 22, 33), RGB8::new(28, 23, 33), RGB8::new(28, 24, 33), RGB8::new(28, 25, 33), RGB8::new(28, 26, 33), RGB8::new(28, 27, 33), RGB8::new(28, 28, 33), RGB8::new(220, 171, 120), RGB8::new(220, 174, 120), RGB8::new(220, 177, 120), RGB8::new(220, 180, 120), RGB8::new(28, 33, 33)],
        [RGB8::new(30, 22, 33), RGB8::new(30, 23, 33), RGB8::new(30, 24, 33), RGB8::new(30, 25, 33), RGB8::new(30, 26, 33), RGB8::new(30, 27, 33), RGB8::new(30, 28, 33), RGB8::new(225, 171, 120), RGB8::new(225, 174, 120), RGB8::new(225, 177, 120), RGB8::new(225, 180, 120), RGB8::new(30, 33, 33)],
        [RGB8::new(32, 22, 33), RGB8::new(32, 23, 33), RGB8::new(32, 24, 33), RGB8::new(32, 25, 33), RGB8::new(32, 26, 33), RGB8::new(32, 27, 33), RGB8::new(32, 28, 33), RGB8::new(230, 171, 120), RGB8::new(230, 174, 120), RGB8::new(230, 177, 120), RGB8::new(230, 180, 120), RGB8::new(32, 33, 33)],
        [RGB8::new(34, 22, 33), RGB8::new(34, 23, 33), RGB8::new(34, 24, 33), RGB8::new(34, 25, 33), RGB8::new(34, 26, 33), RGB8::new(34, 27, 33), RGB8::new(34, 28, 33), RGB8::new(34, 29, 33), RGB8::new(34, 30, 33), RGB8::new(34, 31, 33), RGB8::new(34, 32, 33), RGB8::new(34, 33, 33)],
        ],
        HAND_FRAME_DURATION,
    ),
    // Frame 3
    (
        [
        [RGB8::new(20, 22, 36), RGB8::new(20, 23, 36), RGB8::new(20, 24, 36), RGB8::new(20, 25, 36), RGB8::new(20, 26, 36), RGB8::new(20, 27, 36), RGB8::new(20, 28, 36), RGB8::new(20, 29, 36), RGB8::new(20, 30, 36), RGB8::new(20, 31, 36), RGB8::new(20, 32, 36), RGB8::new(20, 33, 36)],
        [RGB8::new(22, 22, 36), RGB8::new(22, 23, 36), RGB8::new(22, 24, 36), RGB8::new(22, 25, 36), RGB8::new(22, 26, 36), RGB8::new(22, 27, 36), RGB8::new(22, 28, 36), RGB8::new(22, 29, 36), RGB8::new(22, 30, 36), RGB8::new(22, 31, 36), RGB8::new(22, 32, 36), RGB8::new(22, 33, 36)],
        [RGB8::new(24, 22, 36), RGB8::new(24, 23, 36), RGB8::new(24, 24, 36), RGB8::new(24, 25, 36), RGB8::new(24, 26, 36), RGB8::new(24, 27, 36), RGB8::new(24, 28, 36), RGB8::new(24, 29, 36), RGB8::new(24, 30, 36), RGB8::new(24, 31, 36), RGB8::new(210, 180, 130), RGB8::new(210, 183, 130)],
        [RGB8::new(26, 22, 36), RGB8::new(26, 23, 36), RGB8::new(26, 24, 36), RGB8::new(26, 25, 36), RGB8::new(26, 26, 36), RGB8::new(26, 27, 36), RGB8::new(26, 28, 36), RGB8::new(26, 29, 36), RGB8::new(26, 30, 36), RGB8::new(26, 31, 36), RGB8::new(215, 180, 130), RGB8::new(215, 183, 130)],
        [RGB8::new(28, 22, 36), RGB8::new(28, 23, 36), RGB8::new(28, 24, 36), RGB8::new(28, 25, 36), RGB8::new(28, 26, 36), RGB8::new(28, 27, 36), RGB8::new(28, 28, 36), RGB8::new(28, 29, 36), RGB8::new(28, 30, 36), RGB8::new(28, 31, 36), RGB8::new(220, 180, 130), RGB8::new(220, 183, 130)],
        [RGB8::new(30, 22, 36), RGB8::new(30, 23, 36), RGB8::new(30, 24, 36), RGB8::new(30, 25, 36), RGB8::new(30, 26, 36), RGB8::new(30, 27, 36), RGB8::new(30, 28, 36), RGB8::new(30, 29, 36), RGB8::new(30, 30, 36), RGB8::new(30, 31, 36), RGB8::new(225, 180, 130), RGB8::new(225, 183, 130)],
        [RGB8::new(32, 22, 36), RGB8::new(32, 23, 36), RGB8::new(32, 24, 36), RGB8::new(32, 25, 36), RGB8::new(32, 26, 36), RGB8::new(32, 27, 36), RGB8::new(32, 28, 36), RGB8::new(32, 29, 36), RGB8::new(32, 30, 36), RGB8::new(32, 31, 36), RGB8::new(230, 180, 130), RGB8::new(230, 183, 130)],
        [RGB8::new(34, 22, 36), RGB8::new(34, 23, 36), RGB8::new(34, 24, 36), RGB8::new(34, 25, 36), RGB8::new(34, 26, 36), RGB8::new(34, 27, 36), RGB8::new(34, 28, 36), RGB8::new(34, 29, 36), RGB8::new(34, 30, 36), RGB8::new(34, 31, 36), RGB8::new(34, 32, 36), RGB8::new(34, 33, 36)],
        ],
        HAND_FRAME_DURATION,
    ),
    // Frame 4
    (
        [
        [RGB8::new(20, 22, 39), RGB8::new(20, 23, 39), RGB8::new(20, 24, 39), RGB8::new(20, 25, 39), RGB8::new(20, 26, 39), RGB8::new(20, 27, 39), RGB8::new(20, 28, 39), RGB8::new(20, 29, 39), RGB8::new(20, 30, 39), RGB8::new(20, 31, 39), RGB8::new(20, 32, 39), RGB8::new(20, 33, 39)],
        [RGB8::new(22, 22, 39), RGB8::new(22, 23, 39), RGB8::new(22, 24, 39), RGB8::new(22, 25, 39), RGB8::new(22, 26, 39), RGB8::new(22, 27, 39), RGB8::new(22, 28, 39), RGB8::new(22, 29, 39), RGB8::new(22, 30, 39), RGB8::new(22, 31, 39), RGB8::new(22, 32, 39), RGB8::new(22, 33, 39)],
        [RGB8::new(24, 22, 39), RGB8::new(24, 23, 39), RGB8::new(24, 24, 39), RGB8::new(24, 25, 39), RGB8::new(24, 26, 39), RGB8::new(24, 27, 39), RGB8::new(24, 28, 39), RGB8::new(24, 29, 39), RGB8::new(24, 30, 39), RGB8::new(24, 31, 39), RGB8::new(24, 32, 39), RGB8::new(24, 33, 39)],
        [RGB8::new(26, 22, 39), RGB8::new(26, 23, 39), RGB8::new(26, 24, 39), RGB8::new(26, 25, 39), RGB8::new(26, 26, 39), RGB8::new(26, 27, 39), RGB8::new(26, 28, 39), RGB8::new(26, 29, 39), RGB8::new(26, 30, 39), RGB8::new(26, 31, 39), RGB8::new(26, 32, 39), RGB8::new(26, 33, 39)],
        [RGB8::new(28, 22, 39), RGB8::new(28, 23, 39), RGB8::new(28, 24, 39), RGB8::new(28, 25, 39), RGB8::new(28, 26, 39), RGB8::new(28, 27, 39), RGB8::new(28, 28, 39), RGB8::new(28, 29, 39), RGB8::new(28, 30, 39), RGB8::new(28, 31, 39), RGB8::new(28, 32, 39), RGB8::new(28, 33, 39)],
        [RGB8::new(30, 22, 39), RGB8::new(30, 23, 39), RGB8::new(30, 24, 39), RGB8::new(30, 25, 39), RGB8::new(30, 26, 39), RGB8::new(30, 27, 39), RGB8::new(30, 28, 39), RGB8::new(30, 29, 39), RGB8::new(30, 30, 39), RGB8::new(30, 31, 39), RGB8::new(30, 32, 39), RGB8::new(30, 33, 39)],
        [RGB8::new(32, 22, 39), RGB8::new(32, 23, 39), RGB8::new(32, 24, 39), RGB8::new(32, 25, 39), RGB8::new(32, 26, 39), RGB8::new(32, 27, 39), RGB8::new(32, 28, 39), RGB8::new(32, 29, 39), RGB8::new(32, 30, 39), RGB8::new(32, 31, 39), RGB8::new(32, 32, 39), RGB8::new(32, 33, 39)],
        [RGB8::new(34, 22, 39), RGB8::new(34, 23, 39), RGB8::new(34, 24, 39), RGB8::new(34, 25, 39), RGB8::new(34, 26, 39), RGB8::new(34, 27, 39), RGB8::new(34, 28, 39), RGB8::new(34, 29, 39), RGB8::new(34, 30, 39), RGB8::new(34, 31, 39), RGB8::new(34, 32, 39), RGB8::new(34, 33, 39)],
        ],
        HAND_FRAME_DURATION,
    ),
];
