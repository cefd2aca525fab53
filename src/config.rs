//! Driver configuration.
//!
//! Settings are plain serde records with defaults matching the stock T5UIC1 panel
//! (272x480, portrait UI rotated 90 degrees). They can be built in code or parsed from
//! the YAML display section of a printer config:
//!
//! ```rust
//! use t5uic1::DisplayConfig;
//!
//! let config = DisplayConfig::from_yaml(
//!     "screen_width: 272\nlink:\n  handshake_max_polls: 40\n",
//! ).unwrap();
//! assert_eq!(config.link.handshake_max_polls, 40);
//! assert_eq!(config.screen_height, 480);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::Rotation;
use crate::{DisplayError, Result};

/// Timing and framing settings of the serial link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Wait after sending the handshake before the first poll
    pub handshake_settle_ms: u64,
    /// Wait before each drain of the receive buffer
    pub handshake_poll_interval_ms: u64,
    /// Polls per handshake attempt
    pub handshake_max_polls: u32,
    /// Garbage discards tolerated within one attempt
    pub handshake_max_resyncs: u32,
    /// Settle delay after every frame
    pub inter_frame_delay_ms: u64,
    /// Optional preamble byte written before every frame's content, normally
    /// [`FRAME_HEAD`](crate::types::opcodes::FRAME_HEAD)
    pub frame_head: Option<u8>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            handshake_settle_ms: 100,
            handshake_poll_interval_ms: 20,
            handshake_max_polls: 26,
            handshake_max_resyncs: 26,
            inter_frame_delay_ms: 1,
            frame_head: None,
        }
    }
}

impl LinkConfig {
    /// Settings with every delay set to zero, for in-memory transports.
    pub fn immediate() -> Self {
        Self {
            handshake_settle_ms: 0,
            handshake_poll_interval_ms: 0,
            inter_frame_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn handshake_settle(&self) -> Duration {
        Duration::from_millis(self.handshake_settle_ms)
    }

    pub fn handshake_poll_interval(&self) -> Duration {
        Duration::from_millis(self.handshake_poll_interval_ms)
    }

    pub fn inter_frame_delay(&self) -> Duration {
        Duration::from_millis(self.inter_frame_delay_ms)
    }

    /// Upper bound on how long one handshake attempt blocks when no garbage arrives.
    pub fn handshake_budget(&self) -> Duration {
        self.handshake_settle()
            + self.handshake_poll_interval() * self.handshake_max_polls
            + self.inter_frame_delay()
    }
}

/// Panel geometry and start-up settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Orientation applied right after the handshake
    pub rotation: Rotation,
    /// Image shown and cached right after the handshake
    pub startup_image: u8,
    pub link: LinkConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 272,
            screen_height: 480,
            rotation: Rotation::Deg90,
            startup_image: 0,
            link: LinkConfig::default(),
        }
    }
}

impl DisplayConfig {
    /// Parse a YAML display section and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: DisplayConfig = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the driver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(DisplayError::config(
                "screen size",
                format!("{}x{} has no pixels", self.screen_width, self.screen_height),
            ));
        }
        if self.link.handshake_max_polls == 0 {
            return Err(DisplayError::config(
                "link",
                "handshake_max_polls must be at least 1",
            ));
        }
        Ok(())
    }
}
