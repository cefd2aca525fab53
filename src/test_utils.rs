//! In-memory transport for tests and benchmarks
//!
//! [`RecordingTransport`] records every write and plays a scripted panel: when it sees
//! a handshake frame it delivers the next queued reply through the registered
//! receive callback, or the acknowledgement when auto-acknowledge is on.

#![cfg(any(test, feature = "benchmark"))]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::{ReceiveCallback, Transport};
use crate::types::opcodes::{FRAME_HEAD, FRAME_TAIL, HANDSHAKE_ACK, cmd};

#[derive(Default)]
struct Recording {
    writes: Vec<Vec<u8>>,
    replies: VecDeque<Vec<u8>>,
    acknowledge: bool,
    fail_writes: bool,
}

/// Transport that records writes; clones share the same recording.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    recording: Arc<Mutex<Recording>>,
    callback: Arc<Mutex<Option<ReceiveCallback>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.recording().writes.clone()
    }

    /// All written bytes concatenated.
    pub fn wire_bytes(&self) -> Vec<u8> {
        self.recording().writes.concat()
    }

    /// Frame contents, one entry per tail write.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut content = Vec::new();
        for write in &self.recording().writes {
            if write.as_slice() == FRAME_TAIL {
                frames.push(std::mem::take(&mut content));
            } else {
                content.extend_from_slice(write);
            }
        }
        frames
    }

    /// Forget recorded writes.
    pub fn clear(&self) {
        self.recording().writes.clear();
    }

    /// Reply to the next handshake frame with `reply` (may be empty for silence).
    pub fn queue_handshake_reply(&self, reply: &[u8]) {
        self.recording().replies.push_back(reply.to_vec());
    }

    /// Acknowledge every handshake that has no queued reply.
    pub fn acknowledge_handshakes(&self) {
        self.recording().acknowledge = true;
    }

    /// Make subsequent writes fail with `BrokenPipe`.
    pub fn fail_writes(&self, fail: bool) {
        self.recording().fail_writes = fail;
    }

    /// Deliver bytes as if the panel had sent them.
    pub fn inject(&self, data: &[u8]) {
        let callback = self.callback.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(callback) = callback.as_ref() {
            callback(data);
        }
    }

    fn recording(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// Handshake content is the opcode alone, optionally behind `FRAME_HEAD`.
fn is_handshake_frame(bytes: &[u8]) -> bool {
    matches!(bytes, [cmd::HANDSHAKE] | [FRAME_HEAD, cmd::HANDSHAKE])
}

impl Transport for RecordingTransport {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let reply = {
            let mut recording = self.recording();
            if recording.fail_writes {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "panel disconnected"));
            }
            recording.writes.push(bytes.to_vec());

            if is_handshake_frame(bytes) {
                match recording.replies.pop_front() {
                    Some(reply) => Some(reply),
                    None if recording.acknowledge => Some(HANDSHAKE_ACK.to_vec()),
                    None => None,
                }
            } else {
                None
            }
        };

        if let Some(reply) = reply.filter(|reply| !reply.is_empty()) {
            self.inject(&reply);
        }
        Ok(())
    }

    fn register_callback(&mut self, callback: ReceiveCallback) {
        *self.callback.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(callback);
    }
}
