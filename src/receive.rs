//! Receive buffer shared between the transport's callback and the handshake poller
//!
//! The transport appends from its own thread; the link drains from the command
//! thread. Both sides hold the lock only for the append or the swap, and a drain
//! always takes everything received since the previous drain.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

use crate::transport::ReceiveCallback;

/// Thread-safe append-only byte queue with an atomic drain.
#[derive(Debug, Clone, Default)]
pub struct ReceiveBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl ReceiveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes delivered by the transport.
    pub fn append(&self, data: &[u8]) {
        self.lock().extend_from_slice(data);
    }

    /// Take everything received since the previous drain, leaving the buffer empty.
    pub fn drain(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of bytes waiting to be drained.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Callback suitable for `Transport::register_callback` that feeds this buffer.
    pub fn callback(&self) -> ReceiveCallback {
        let buffer = self.clone();
        Box::new(move |data: &[u8]| {
            trace!("Received {} byte(s): {}", data.len(), hex(data));
            buffer.append(data);
        })
    }

    // A panicking producer cannot leave the Vec half-written, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Format bytes as `0x.. 0x..` for logging.
pub(crate) fn hex(data: &[u8]) -> String {
    data.iter().map(|byte| format!("0x{byte:02x}")).collect::<Vec<_>>().join(" ")
}
