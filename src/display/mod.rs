//! Drawing command set for the T5UIC1 panel.
//!
//! [`Display`] wraps a [`Link`] with the panel geometry and exposes one method per
//! controller command. Every command builds a fresh frame, so a command whose
//! parameters fail to encode transmits nothing.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use t5uic1::transport::StreamTransport;
//! use t5uic1::types::{Color, FontSize};
//! use t5uic1::{Display, DisplayConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Serial device already configured for 115200 8N1
//! let port = File::options().read(true).write(true).open("/dev/ttyS1")?;
//! let transport = StreamTransport::new(port.try_clone()?, port);
//!
//! let mut display = Display::new(transport, DisplayConfig::default())?;
//! display.init_display_with_retries(5)?;
//!
//! display.clear_screen(Color::BG_BLACK)?;
//! display.draw_string(false, FontSize::MENU, Color::WHITE, Color::BG_BLACK, 12, 40, "Prepare")?;
//! display.update_lcd()?;
//! # Ok(())
//! # }
//! ```
//!
//! The handshake must have succeeded before any drawing command is issued; the
//! commands themselves do not check the link state.

mod commands;
mod geometry;

pub use geometry::{CirclePoint, circle_points, filled_circle_points, fixed_point};

use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::link::Link;
use crate::transport::Transport;
use crate::types::LinkState;
use crate::{DisplayError, Result};

/// Driver for one panel.
pub struct Display<T> {
    link: Link<T>,
    config: DisplayConfig,
}

impl<T: Transport> Display<T> {
    /// Validate the configuration and attach to an open transport.
    pub fn new(transport: T, config: DisplayConfig) -> Result<Self> {
        config.validate()?;
        let link = Link::new(transport, config.link.clone());
        Ok(Self { link, config })
    }

    /// Handshake until the panel answers, then show the start-up screen.
    ///
    /// Retries forever: a panel that never answers blocks here indefinitely. Use
    /// [`Display::init_display_with_retries`] for a bounded wait.
    pub fn init_display(&mut self) -> Result<()> {
        let mut attempts = 1u32;
        while !self.link.handshake()? {
            attempts = attempts.saturating_add(1);
            debug!("Retrying handshake (attempt {})", attempts);
        }
        self.finish_init(attempts)
    }

    /// Handshake at most `max_attempts` times, failing with [`DisplayError::HandshakeFailed`].
    pub fn init_display_with_retries(&mut self, max_attempts: u32) -> Result<()> {
        for attempt in 1..=max_attempts {
            if self.link.handshake()? {
                return self.finish_init(attempt);
            }
            debug!("Handshake attempt {}/{} failed", attempt, max_attempts);
        }
        Err(DisplayError::HandshakeFailed { attempts: max_attempts })
    }

    fn finish_init(&mut self, attempts: u32) -> Result<()> {
        info!("Panel answered after {} handshake attempt(s)", attempts);
        self.jpeg_show_and_cache(self.config.startup_image)?;
        self.frame_set_dir(self.config.rotation)?;
        self.update_lcd()
    }

    pub fn state(&self) -> LinkState {
        self.link.state()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn link(&self) -> &Link<T> {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.link
    }
}
