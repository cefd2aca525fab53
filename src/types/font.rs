//! Font size enumeration

use serde::{Deserialize, Serialize};

use crate::DisplayError;

/// Fixed glyph cell sizes understood by the controller.
///
/// The discriminant is the 4-bit size code packed into text and numeric mode bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FontSize {
    Font6x12 = 0x00,
    Font8x16 = 0x01,
    Font10x20 = 0x02,
    Font12x24 = 0x03,
    Font14x28 = 0x04,
    Font16x32 = 0x05,
    Font20x40 = 0x06,
    Font24x48 = 0x07,
    Font28x56 = 0x08,
    Font32x64 = 0x09,
}

impl FontSize {
    /// Font used for menu entries.
    pub const MENU: FontSize = FontSize::Font8x16;
    /// Font used for the status area.
    pub const STATUS: FontSize = FontSize::Font10x20;
    /// Font used for headings.
    pub const HEAD: FontSize = FontSize::Font10x20;

    /// All sizes in code order.
    pub const ALL: [FontSize; 10] = [
        FontSize::Font6x12,
        FontSize::Font8x16,
        FontSize::Font10x20,
        FontSize::Font12x24,
        FontSize::Font14x28,
        FontSize::Font16x32,
        FontSize::Font20x40,
        FontSize::Font24x48,
        FontSize::Font28x56,
        FontSize::Font32x64,
    ];

    /// 4-bit size code sent on the wire.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Glyph cell size in pixels as (width, height).
    pub const fn glyph_size(self) -> (u16, u16) {
        match self {
            FontSize::Font6x12 => (6, 12),
            FontSize::Font8x16 => (8, 16),
            FontSize::Font10x20 => (10, 20),
            FontSize::Font12x24 => (12, 24),
            FontSize::Font14x28 => (14, 28),
            FontSize::Font16x32 => (16, 32),
            FontSize::Font20x40 => (20, 40),
            FontSize::Font24x48 => (24, 48),
            FontSize::Font28x56 => (28, 56),
            FontSize::Font32x64 => (32, 64),
        }
    }
}

impl TryFrom<u8> for FontSize {
    type Error = DisplayError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        FontSize::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| DisplayError::invalid_parameter("font size", code))
    }
}
