//! Serial protocol driver for DWIN T5UIC1 display panels.
//!
//! The T5UIC1 is the controller behind the 272x480 TFT used on Creality printers. It
//! speaks a binary command protocol over a serial line: every frame is an opcode with
//! big-endian parameters followed by the tail `CC 33 C3 3C`.
//!
//! # Features
//!
//! - **Frame encoding**: range-checked byte/word/long/double fields, never truncated
//! - **Link handshake**: blocking `AA 00 'O' 'K'` exchange with resynchronisation on noise
//! - **Drawing commands**: points, lines, rectangles, circles, text, numbers, icons, images
//! - **Any transport**: a small trait, with a std::io adapter for serial ports
//!
//! # Architecture
//!
//! ```text
//! Display ──► Link ──► Transport ──► serial line
//!    │          ▲           │
//!  Frame   ReceiveBuffer ◄──┘ (callback on the reader thread)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use t5uic1::types::{Color, RectangleMode};
//! use t5uic1::{Display, DisplayConfig, StreamTransport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let port = File::options().read(true).write(true).open("/dev/ttyS1")?;
//! let transport = StreamTransport::new(port.try_clone()?, port);
//! let mut display = Display::new(transport, DisplayConfig::default())?;
//!
//! // Blocks until the panel answers
//! display.init_display()?;
//!
//! display.clear_screen(Color::BG_BLACK)?;
//! display.draw_rectangle(RectangleMode::Filled, Color::BG_BLUE, 0, 0, 271, 24)?;
//! display.draw_circle(Color::WHITE, 136, 240, 40)?;
//! display.update_lcd()?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod display;
mod error;
mod frame;
mod link;
mod receive;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod transport;
pub mod types;

pub use config::{DisplayConfig, LinkConfig};
pub use display::Display;
pub use error::*;
pub use frame::Frame;
pub use link::{HandshakeCollector, HandshakeProgress, Link, is_handshake_ack};
pub use receive::ReceiveBuffer;
pub use transport::{ReceiveCallback, StreamTransport, Transport};
