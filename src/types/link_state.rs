//! Link establishment state

use serde::{Deserialize, Serialize};

/// State of the serial link to the panel.
///
/// `Uninitialized -> HandshakePending -> Ready`. A failed handshake leaves the link
/// in `HandshakePending`; nothing moves it out of `Ready` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkState {
    /// Driver constructed, no handshake attempted yet
    #[default]
    Uninitialized,
    /// At least one handshake attempt started, none succeeded
    HandshakePending,
    /// Panel acknowledged the handshake
    Ready,
}

impl LinkState {
    /// Check if the panel has acknowledged a handshake.
    pub fn is_ready(self) -> bool {
        matches!(self, LinkState::Ready)
    }
}
