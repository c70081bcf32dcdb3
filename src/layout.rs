use sdl2::{keyboard::Keycode, pixels::Color, rect::Rect};

pub const TITLE: &str = "Piano";
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;
pub const SIZE: (u32, u32) = (WIDTH, HEIGHT);

const SOUNDS_DIR: &str = "sounds";
const FIRST_SAMPLE: usize = 9;

const WHITE_WIDTH: u32 = 100;
const BLACK_WIDTH: u32 = 50;
const BLACK_HEIGHT: u32 = 250;

// no black key between E and F
const BLACK_SLOTS: [i32; 5] = [1, 2, 4, 5, 6];
const WHITE_SLOTS: i32 = 8;

const BINDINGS: [Keycode; 13] = [
    Keycode::A,
    Keycode::S,
    Keycode::F,
    Keycode::G,
    Keycode::H,
    Keycode::Z,
    Keycode::X,
    Keycode::C,
    Keycode::V,
    Keycode::B,
    Keycode::N,
    Keycode::M,
    Keycode::COMMA,
];

pub const KEYS: usize = BINDINGS.len();

pub struct KeyLayout {
    pub body: Rect,
    pub color: Color,
    pub binding: Keycode,
    pub sample: usize,
}

/// Black keys first, then white, left to right within each row.
pub fn layout() -> Vec<KeyLayout> {
    let step = WHITE_WIDTH as i32;

    let black = BLACK_SLOTS.iter().map(|&slot| {
        let x = slot * step - BLACK_WIDTH as i32 / 2;
        (Rect::new(x, 0, BLACK_WIDTH, BLACK_HEIGHT), Color::BLACK)
    });
    let white = (0..WHITE_SLOTS).map(|slot| {
        let x = slot * step;
        (Rect::new(x, 0, WHITE_WIDTH, HEIGHT), Color::WHITE)
    });

    black
        .chain(white)
        .zip(BINDINGS)
        .enumerate()
        .map(|(sample, ((body, color), binding))| KeyLayout {
            body,
            color,
            binding,
            sample,
        })
        .collect()
}

pub fn sample_path(sample: usize) -> String {
    format!("{SOUNDS_DIR}/pn{}.wav", FIRST_SAMPLE + sample)
}
