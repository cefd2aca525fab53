//! Error types for the display driver.
//!
//! Every fallible operation in this crate returns [`DisplayError`]. The variants
//! follow the driver's failure taxonomy:
//!
//! - **Encoding errors**: a value does not fit its wire field, or an enum-coded
//!   parameter is outside the set the controller defines. Raised before anything
//!   reaches the transport.
//! - **Handshake failures**: the bounded initialisation variant ran out of attempts.
//! - **Transport errors**: the serial channel refused a write. Fatal for the frame.
//! - **Configuration errors**: a config document could not be parsed or is inconsistent.
//!
//! Silent clamps (backlight floor, icon position) are not errors and never show up here.
//!
//! ```rust
//! use t5uic1::{DisplayError, FieldWidth};
//!
//! let error = DisplayError::field_overflow(FieldWidth::Word, 70_000);
//! assert!(!error.is_retryable());
//! assert!(error.to_string().contains("70000"));
//! ```

use std::fmt;
use thiserror::Error;

/// Result type alias for driver operations.
pub type Result<T, E = DisplayError> = std::result::Result<T, E>;

/// Width of a big-endian wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldWidth {
    /// 1 byte
    Byte,
    /// 2 bytes
    Word,
    /// 4 bytes
    Long,
    /// 8 bytes
    Double,
}

impl FieldWidth {
    /// Number of bytes this field occupies on the wire.
    pub const fn size(self) -> usize {
        match self {
            FieldWidth::Byte => 1,
            FieldWidth::Word => 2,
            FieldWidth::Long => 4,
            FieldWidth::Double => 8,
        }
    }

    /// Largest unsigned value the field can carry.
    pub const fn max_value(self) -> u64 {
        match self {
            FieldWidth::Byte => u8::MAX as u64,
            FieldWidth::Word => u16::MAX as u64,
            FieldWidth::Long => u32::MAX as u64,
            FieldWidth::Double => u64::MAX,
        }
    }
}

impl fmt::Display for FieldWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldWidth::Byte => "byte",
            FieldWidth::Word => "word",
            FieldWidth::Long => "long",
            FieldWidth::Double => "double",
        };
        f.write_str(name)
    }
}

/// Main error type for display operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DisplayError {
    #[error("Value {value} does not fit in a {width} field ({} bytes)", .width.size())]
    FieldOverflow { width: FieldWidth, value: i128 },

    #[error("Invalid {parameter}: {value}")]
    InvalidParameter { parameter: &'static str, value: i64 },

    #[error("Transport {operation} failed")]
    Transport {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Handshake failed after {attempts} attempt(s)")]
    HandshakeFailed { attempts: u32 },

    #[error("Configuration error in {context}: {details}")]
    Config { context: String, details: String },
}

impl DisplayError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            DisplayError::HandshakeFailed { .. } => true,
            DisplayError::Transport { .. } => false,
            DisplayError::FieldOverflow { .. } => false,
            DisplayError::InvalidParameter { .. } => false,
            DisplayError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            DisplayError::FieldOverflow { .. } => vec![
                "Check coordinates stay on screen",
                "Scale fixed-point values to fit the field width",
                "Reduce the circle radius near screen edges",
            ],
            DisplayError::InvalidParameter { .. } => vec![
                "Use one of the enumerated protocol values",
                "Check font size is between 0 and 9",
            ],
            DisplayError::Transport { .. } => vec![
                "Check the serial cable and panel power",
                "Verify the serial device is still open",
                "Re-run the handshake after reconnecting",
            ],
            DisplayError::HandshakeFailed { .. } => vec![
                "Wait for the panel to finish booting",
                "Check baud rate and wiring",
                "Increase the handshake attempt budget",
            ],
            DisplayError::Config { .. } => vec![
                "Check the YAML syntax of the display section",
                "Verify screen dimensions are non-zero",
            ],
        }
    }

    /// Helper constructor for out-of-range field values.
    pub fn field_overflow(width: FieldWidth, value: impl Into<i128>) -> Self {
        DisplayError::FieldOverflow { width, value: value.into() }
    }

    /// Helper constructor for enum-coded parameters outside their defined set.
    pub fn invalid_parameter(parameter: &'static str, value: impl Into<i64>) -> Self {
        DisplayError::InvalidParameter { parameter, value: value.into() }
    }

    /// Helper constructor for transport write failures.
    pub fn transport(operation: impl Into<String>, source: std::io::Error) -> Self {
        DisplayError::Transport { operation: operation.into(), source }
    }

    /// Helper constructor for configuration errors.
    pub fn config(context: impl Into<String>, details: impl Into<String>) -> Self {
        DisplayError::Config { context: context.into(), details: details.into() }
    }
}

impl From<std::io::Error> for DisplayError {
    fn from(err: std::io::Error) -> Self {
        DisplayError::Transport { operation: "write".to_string(), source: err }
    }
}

impl From<serde_yaml_ng::Error> for DisplayError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DisplayError::Config { context: "YAML".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn overflow_messages_carry_value_and_width(
                value in any::<i64>(),
                width in prop::sample::select(vec![
                    FieldWidth::Byte, FieldWidth::Word, FieldWidth::Long, FieldWidth::Double
                ])
            ) {
                let message = DisplayError::field_overflow(width, value).to_string();
                prop_assert!(message.contains(&value.to_string()));
                prop_assert!(message.contains(&width.to_string()));
            }

            #[test]
            fn transport_errors_preserve_source(reason in ".*") {
                let err = DisplayError::transport(
                    "write frame",
                    std::io::Error::new(std::io::ErrorKind::BrokenPipe, reason.clone()),
                );
                let source = std::error::Error::source(&err).map(|s| s.to_string());
                prop_assert_eq!(source, Some(reason));
            }
        }
    }

    #[test]
    fn field_width_sizes() {
        assert_eq!(FieldWidth::Byte.size(), 1);
        assert_eq!(FieldWidth::Word.size(), 2);
        assert_eq!(FieldWidth::Long.size(), 4);
        assert_eq!(FieldWidth::Double.size(), 8);
        assert_eq!(FieldWidth::Word.max_value(), 0xFFFF);
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<DisplayError>();

        let error = DisplayError::HandshakeFailed { attempts: 3 };
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn recovery_methods_work() {
        let handshake = DisplayError::HandshakeFailed { attempts: 1 };
        let overflow = DisplayError::field_overflow(FieldWidth::Byte, 256);

        assert!(handshake.is_retryable());
        assert!(!overflow.is_retryable());

        for suggestion in handshake.recovery_suggestions() {
            assert!(suggestion.len() > 5);
        }
        assert!(!overflow.recovery_suggestions().is_empty());
    }

    #[test]
    fn io_errors_become_transport_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotConnected, "port closed");
        let err: DisplayError = io_err.into();
        match err {
            DisplayError::Transport { source, .. } => assert_eq!(source.to_string(), "port closed"),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_errors_become_config_errors() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: DisplayError = yaml_err.into();
        assert!(matches!(err, DisplayError::Config { .. }));
    }
}
