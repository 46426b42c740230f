//! Colors used by the animation

use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized sRGB components with full alpha
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// Linear-light components with full alpha, for sRGB render targets
    pub fn to_linear_array(self) -> [f32; 4] {
        fn decode(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b), 1.0]
    }
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Window background before the first flash completes
pub const INITIAL_BACKGROUND: Rgb = Rgb::new(27, 33, 30);
pub const SQUARE_A: Rgb = Rgb::new(255, 27, 81);
pub const SQUARE_B: Rgb = WHITE;
pub const BALL: Rgb = Rgb::new(234, 17, 54);
pub const CIRCLE_FILL: Rgb = Rgb::new(40, 46, 43);
pub const LINE: Rgb = WHITE;
pub const OVERLAY_TEXT: Rgb = WHITE;

/// Flash/background color cycle
pub const PALETTE: [Rgb; 16] = [
    Rgb::new(197, 1, 225),
    Rgb::new(156, 38, 248),
    Rgb::new(150, 40, 249),
    Rgb::new(98, 102, 253),
    Rgb::new(46, 150, 249),
    Rgb::new(98, 102, 253),
    Rgb::new(4, 194, 230),
    Rgb::new(23, 229, 208),
    Rgb::new(46, 249, 160),
    Rgb::new(106, 255, 109),
    Rgb::new(198, 229, 1),
    Rgb::new(233, 197, 1),
    Rgb::new(255, 108, 98),
    Rgb::new(243, 44, 155),
    Rgb::new(232, 48, 206),
    Rgb::new(27, 33, 30),
];

/// Index after `index`, wrapping to 0 past the last palette entry
#[inline]
pub fn next_index(index: usize) -> usize {
    let next = index + 1;
    if next >= PALETTE.len() { 0 } else { next }
}
