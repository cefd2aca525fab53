//! Enum-coded command parameters

use serde::{Deserialize, Serialize};

use crate::DisplayError;

/// Rectangle drawing mode, sent as a data byte after the rectangle opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RectangleMode {
    Outline = 0,
    Filled = 1,
    XorFill = 2,
}

impl RectangleMode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RectangleMode {
    type Error = DisplayError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RectangleMode::Outline),
            1 => Ok(RectangleMode::Filled),
            2 => Ok(RectangleMode::XorFill),
            other => Err(DisplayError::invalid_parameter("rectangle mode", other)),
        }
    }
}

/// Direction of a screen-area move (2-bit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0x00,
    Right = 0x01,
    Up = 0x02,
    Down = 0x03,
}

impl Direction {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = DisplayError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Direction::Left),
            0x01 => Ok(Direction::Right),
            0x02 => Ok(Direction::Up),
            0x03 => Ok(Direction::Down),
            other => Err(DisplayError::invalid_parameter("scroll direction", other)),
        }
    }
}

/// Screen orientation set by `frame_set_dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rotation {
    Deg0 = 0,
    #[default]
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Rotation {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rotation {
    type Error = DisplayError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Rotation::Deg0),
            1 => Ok(Rotation::Deg90),
            2 => Ok(Rotation::Deg180),
            3 => Ok(Rotation::Deg270),
            other => Err(DisplayError::invalid_parameter("rotation", other)),
        }
    }
}
