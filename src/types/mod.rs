//! Core protocol types.
//!
//! This module holds the vocabulary the frame encoder and drawing commands share:
//! - [`Color`] is the controller's 16-bit color with the stock UI palette
//! - [`FontSize`] enumerates the ten fixed glyph cells (rejects any other code)
//! - [`TextMode`], [`NumberMode`] and [`MoveMode`] model the bit-packed mode bytes
//! - [`RectangleMode`], [`Direction`] and [`Rotation`] are enum-coded parameters
//! - [`LinkState`] tracks handshake progress
//! - [`opcodes`] lists command bytes and framing constants
//!
//! ## Usage Example
//!
//! ```rust
//! use t5uic1::types::{FontSize, NumberMode, TextMode};
//!
//! let text = TextMode::new(true, FontSize::Font10x20);
//! assert_eq!(text.to_byte(), 0xC2);
//!
//! let number = NumberMode::new(false, true, true, FontSize::Font8x16);
//! assert_eq!(number.to_byte(), 0x31);
//!
//! assert!(FontSize::try_from(10).is_err());
//! ```

mod bitfield;
mod color;
mod font;
mod link_state;
pub mod opcodes;
mod params;

pub use bitfield::{MoveMode, NumberMode, TextMode};
pub use color::Color;
pub use font::FontSize;
pub use link_state::LinkState;
pub use params::{Direction, RectangleMode, Rotation};
