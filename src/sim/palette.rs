//! 16-colour palette
//!
//! Colour 0 is the background and colour 7 the border; neither is ever rolled
//! for stalactites, the hero or headline text.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Navy = 1,
    Purple = 2,
    Green = 3,
    Brown = 4,
    DarkBlue = 5,
    LightBlue = 6,
    White = 7,
    Red = 8,
    Orange = 9,
    Yellow = 10,
    Lime = 11,
    Cyan = 12,
    Gray = 13,
    Pink = 14,
    Peach = 15,
}

impl Color {
    pub const BACKGROUND: Color = Color::Black;
    pub const BORDER: Color = Color::White;

    pub fn index(self) -> u8 {
        self as u8
    }

    /// 0xRRGGBB value of this entry
    pub fn hex(self) -> u32 {
        match self {
            Color::Black => 0x000000,
            Color::Navy => 0x2B335F,
            Color::Purple => 0x7E2072,
            Color::Green => 0x19959C,
            Color::Brown => 0x8B4852,
            Color::DarkBlue => 0x395C98,
            Color::LightBlue => 0xA9C1FF,
            Color::White => 0xEEEEEE,
            Color::Red => 0xD4186C,
            Color::Orange => 0xD38441,
            Color::Yellow => 0xE9C35B,
            Color::Lime => 0x70C6A9,
            Color::Cyan => 0x7696DE,
            Color::Gray => 0xA3A3A3,
            Color::Pink => 0xFF9798,
            Color::Peach => 0xEDC7B0,
        }
    }
}

/// Colours eligible for random rolls (everything but background and border)
pub const STALACTITE_COLORS: [Color; 14] = [
    Color::Navy,
    Color::Purple,
    Color::Green,
    Color::Brown,
    Color::DarkBlue,
    Color::LightBlue,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Lime,
    Color::Cyan,
    Color::Gray,
    Color::Pink,
    Color::Peach,
];

/// Uniformly pick one of the rollable colours
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    STALACTITE_COLORS[rng.random_range(0..STALACTITE_COLORS.len())]
}
