//! Command opcodes and framing constants for the T5UIC1 serial protocol
//!
//! Values are specific to this controller family and must match the panel firmware.

/// Bytes appended after every frame.
pub const FRAME_TAIL: [u8; 4] = [0xCC, 0x33, 0xC3, 0x3C];

/// Preamble byte documented for the controller family (optional, see `LinkConfig::frame_head`).
pub const FRAME_HEAD: u8 = 0xAA;

/// Successful handshake reply: 0xAA 0x00 'O' 'K'.
pub const HANDSHAKE_ACK: [u8; 4] = [0xAA, 0x00, b'O', b'K'];

/// Minimum backlight level accepted by `set_backlight_brightness`.
pub const BACKLIGHT_FLOOR: u8 = 0x1F;

/// Maximum number of characters drawn by a single text command.
pub const MAX_TEXT_CHARS: usize = 40;

// Opcodes actually emitted by the driver
pub mod cmd {
    pub const HANDSHAKE: u8 = 0x00;
    pub const DRAW_RECT: u8 = 0x05;
    pub const MOVE_SCREEN_AREA: u8 = 0x09;
    pub const DRAW_TEXT: u8 = 0x11;
    pub const DRAW_VALUE: u8 = 0x14;
    pub const DRAW_ICON: u8 = 0x23;
    pub const BACKLIGHT_BRIGHTNESS: u8 = 0x30;
    pub const FRAME_SET_DIR: u8 = 0x34;
    pub const UPDATE_LCD: u8 = 0x3D;
    pub const SET_PALETTE: u8 = 0x40;
    /// Line opcode; also carries point draws (point size in the width/height bytes)
    pub const DRAW_LINE: u8 = 0x51;
    pub const CLEAR_SCREEN: u8 = 0x52;
    /// Two-byte opcode, sent as a word
    pub const JPEG_SHOW_AND_CACHE: u16 = 0x2200;

    /// Unlock sequence that precedes the rotation byte of `FRAME_SET_DIR`
    pub const FRAME_SET_DIR_KEY: [u8; 2] = [0x5A, 0xA5];
}

