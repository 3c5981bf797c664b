//! The therapeutic color palette offered by the color picker.

use crate::model::Color;

/// Warm, calm hues first, then neutrals.
pub const THERAPEUTIC: [Color; 16] = [
    Color::rgb(0xFF, 0x6B, 0x6B), // warm red
    Color::rgb(0x4E, 0xCD, 0xC4), // turquoise
    Color::rgb(0x45, 0xB7, 0xD1), // sky blue
    Color::rgb(0xFF, 0xA0, 0x7A), // salmon
    Color::rgb(0x98, 0xD8, 0xC8), // mint
    Color::rgb(0xF7, 0xDC, 0x6F), // soft yellow
    Color::rgb(0xBB, 0x8F, 0xCE), // lavender
    Color::rgb(0xF8, 0xB8, 0x8B), // peach
    Color::rgb(0x85, 0xC1, 0xE2), // pastel blue
    Color::rgb(0xF0, 0x62, 0x92), // pink
    Color::rgb(0xAE, 0xD5, 0x81), // lime
    Color::rgb(0xFF, 0xB7, 0x4D), // orange
    Color::BLACK,
    Color::DARK_GRAY,
    Color::GRAY,
    Color::WHITE,
];
