//! 16-bit panel colors and the predefined palette

use serde::{Deserialize, Serialize};

/// A color in the controller's native 16-bit color space.
///
/// Any 16-bit value is valid; the associated constants name the palette the
/// stock printer UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const YELLOW: Color = Color(0xFF0F);
    /// Popup window background
    pub const BG_WINDOW: Color = Color(0x31E8);
    /// Dark blue background
    pub const BG_BLUE: Color = Color(0x1125);
    pub const BG_BLACK: Color = Color(0x0841);
    pub const BG_RED: Color = Color(0xF00F);
    /// Popup font background
    pub const POPUP_TEXT: Color = Color(0xD6BA);
    /// Split line
    pub const LINE: Color = Color(0x3A6A);
    /// Blue square cursor
    pub const RECTANGLE: Color = Color(0xEE2F);
    pub const PERCENT: Color = Color(0xFE29);
    /// Progress bar fill
    pub const BAR_FILL: Color = Color(0x10E4);
    pub const SELECT: Color = Color(0x33BB);

    /// Create a color from its raw 16-bit value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw 16-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for Color {
    fn from(value: u16) -> Self {
        Color(value)
    }
}

impl From<Color> for i128 {
    fn from(color: Color) -> Self {
        i128::from(color.0)
    }
}
