//! Frame builder for the T5UIC1 command protocol.
//!
//! A frame is one command: an opcode followed by big-endian parameters. The builder
//! only accumulates content; the link appends the tail and transmits it:
//!
//! ```text
//! ┌────────┬──────────────────────────────┬─────────────────────┐
//! │ OPCODE │ PARAMETERS (big-endian)      │ TAIL CC 33 C3 3C    │
//! │ 1-2B   │ byte/word/long/double/UTF-8  │ 4B (added by Link)  │
//! └────────┴──────────────────────────────┴─────────────────────┘
//! ```
//!
//! Every integer encoder accepts any integer type and rejects values that are
//! negative or wider than the field instead of truncating them.
//!
//! ```rust
//! use t5uic1::Frame;
//!
//! let mut frame = Frame::new();
//! frame.byte(0x52u8)?.word(0x31E8u16)?;
//! assert_eq!(frame.as_bytes(), &[0x52, 0x31, 0xE8]);
//!
//! assert!(frame.word(-1).is_err());
//! assert!(frame.byte(256).is_err());
//! # Ok::<(), t5uic1::DisplayError>(())
//! ```

use crate::{DisplayError, FieldWidth, Result};

/// Command frame under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    buffer: Vec<u8>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self { buffer: Vec::with_capacity(32) }
    }

    /// Append an unsigned big-endian field of the given width.
    pub fn field(&mut self, width: FieldWidth, value: impl Into<i128>) -> Result<&mut Self> {
        let value = value.into();
        if value < 0 || value > i128::from(width.max_value()) {
            return Err(DisplayError::field_overflow(width, value));
        }
        let bytes = (value as u64).to_be_bytes();
        self.buffer.extend_from_slice(&bytes[bytes.len() - width.size()..]);
        Ok(self)
    }

    /// Append a 1-byte field.
    pub fn byte(&mut self, value: impl Into<i128>) -> Result<&mut Self> {
        self.field(FieldWidth::Byte, value)
    }

    /// Append a 2-byte big-endian field.
    pub fn word(&mut self, value: impl Into<i128>) -> Result<&mut Self> {
        self.field(FieldWidth::Word, value)
    }

    /// Append a 4-byte big-endian field.
    pub fn long(&mut self, value: impl Into<i128>) -> Result<&mut Self> {
        self.field(FieldWidth::Long, value)
    }

    /// Append an 8-byte big-endian field.
    pub fn double64(&mut self, value: impl Into<i128>) -> Result<&mut Self> {
        self.field(FieldWidth::Double, value)
    }

    /// Append the UTF-8 bytes of a string (no length prefix, no terminator).
    pub fn string(&mut self, text: &str) -> &mut Self {
        self.buffer.extend_from_slice(text.as_bytes());
        self
    }

    /// Frame content accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop all content, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_word_round_trip(value in any::<u16>()) {
            let mut frame = Frame::new();
            frame.word(value).unwrap();
            let bytes = frame.as_bytes();
            prop_assert_eq!(bytes.len(), 2);
            prop_assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), value);
        }

        #[test]
        fn prop_long_round_trip(value in any::<u32>()) {
            let mut frame = Frame::new();
            frame.long(value).unwrap();
            let bytes: [u8; 4] = frame.as_bytes().try_into().unwrap();
            prop_assert_eq!(u32::from_be_bytes(bytes), value);
        }

        #[test]
        fn prop_double64_round_trip(value in any::<u64>()) {
            let mut frame = Frame::new();
            frame.double64(value).unwrap();
            let bytes: [u8; 8] = frame.as_bytes().try_into().unwrap();
            prop_assert_eq!(u64::from_be_bytes(bytes), value);
        }

        #[test]
        fn prop_out_of_range_rejected_without_writing(
            value in prop_oneof![i64::MIN..0i64, (u16::MAX as i64 + 1)..i64::MAX]
        ) {
            let mut frame = Frame::new();
            frame.byte(0x51u8).unwrap();
            let result = frame.word(value);
            let is_overflow = matches!(
                result,
                Err(DisplayError::FieldOverflow { width: FieldWidth::Word, .. })
            );
            prop_assert!(is_overflow);
            prop_assert_eq!(frame.as_bytes(), &[0x51]);
        }
    }

    #[test]
    fn fields_are_big_endian() {
        let mut frame = Frame::new();
        frame
            .byte(0x14u8)
            .and_then(|f| f.word(0x0102u16))
            .and_then(|f| f.long(0x0304_0506u32))
            .and_then(|f| f.double64(0x0708_090A_0B0C_0D0Eu64))
            .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[
                0x14, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C,
                0x0D, 0x0E
            ]
        );
    }

    #[test]
    fn field_limits() {
        let mut frame = Frame::new();
        assert!(frame.byte(255).is_ok());
        assert!(frame.byte(256).is_err());
        assert!(frame.long(u32::MAX).is_ok());
        assert!(frame.long(i64::from(u32::MAX) + 1).is_err());
        assert!(frame.double64(u64::MAX).is_ok());
        assert!(frame.double64(-1i64).is_err());
    }

    #[test]
    fn string_appends_utf8() {
        let mut frame = Frame::new();
        frame.string("Z°");
        assert_eq!(frame.as_bytes(), &[b'Z', 0xC2, 0xB0]);
        frame.clear();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
    }
}
