//! Bit-packed mode bytes for text, numeric and area-move commands
//!
//! Each command header is modelled as a record with named members and assembled
//! into its wire byte by a single `to_byte` conversion.

use serde::{Deserialize, Serialize};

use super::{Direction, FontSize};

/// Mode byte of the text draw command.
///
/// Layout: bit 7 width-adjust, bit 6 show-background, bits 5-4 unused, bits 3-0 font size.
/// Show-background sits one bit lower than in [`NumberMode`], where it is bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMode {
    pub width_adjust: bool,
    pub show_background: bool,
    pub font_size: FontSize,
}

impl TextMode {
    const WIDTH_ADJUST: u8 = 0x80;
    const SHOW_BACKGROUND: u8 = 0x40;

    /// Text mode with width adjustment enabled, as every text command sends it.
    pub fn new(show_background: bool, font_size: FontSize) -> Self {
        Self { width_adjust: true, show_background, font_size }
    }

    /// Assemble the wire byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.font_size.code();
        if self.width_adjust {
            byte |= Self::WIDTH_ADJUST;
        }
        if self.show_background {
            byte |= Self::SHOW_BACKGROUND;
        }
        byte
    }
}

/// Mode byte of the integer and fixed-point value commands.
///
/// Layout: bit 7 show-background, bit 6 signed, bit 5 zero-fill, bit 4 zero-mode,
/// bits 3-0 font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMode {
    pub show_background: bool,
    /// Value field carries a two's-complement signed number
    pub signed: bool,
    /// Pad to the requested digit count
    pub zero_fill: bool,
    /// Leading zeros render as `0` (true) or as spaces (false)
    pub zero_mode: bool,
    pub font_size: FontSize,
}

impl NumberMode {
    const SHOW_BACKGROUND: u8 = 0x80;
    const SIGNED: u8 = 0x40;
    const ZERO_FILL: u8 = 0x20;
    const ZERO_MODE: u8 = 0x10;

    /// Unsigned number mode.
    pub fn new(show_background: bool, zero_fill: bool, zero_mode: bool, font_size: FontSize) -> Self {
        Self { show_background, signed: false, zero_fill, zero_mode, font_size }
    }

    /// Assemble the wire byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.font_size.code();
        if self.show_background {
            byte |= Self::SHOW_BACKGROUND;
        }
        if self.signed {
            byte |= Self::SIGNED;
        }
        if self.zero_fill {
            byte |= Self::ZERO_FILL;
        }
        if self.zero_mode {
            byte |= Self::ZERO_MODE;
        }
        byte
    }
}

/// Mode byte of the move-screen-area command.
///
/// Layout: bit 7 translation mode (always set by this driver; clear means circular
/// shift), bits 1-0 direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMode {
    pub translate: bool,
    pub direction: Direction,
}

impl MoveMode {
    const TRANSLATE: u8 = 0x80;

    /// Translation move in the given direction.
    pub fn translate(direction: Direction) -> Self {
        Self { translate: true, direction }
    }

    /// Assemble the wire byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.direction.code();
        if self.translate {
            byte |= Self::TRANSLATE;
        }
        byte
    }
}
