//! Link driver: frame transmission and the handshake state machine.
//!
//! [`Link`] owns the transport and the receive buffer the transport feeds. It
//! transmits frames (content, then the fixed tail, then a settle delay) and runs
//! the blocking handshake exchange that moves the link to [`LinkState::Ready`].
//!
//! ## Handshake
//!
//! One attempt sends the single-byte handshake frame, waits for the panel to start
//! answering, then polls the receive buffer up to `handshake_max_polls` times. The
//! bytes are accumulated by a [`HandshakeCollector`], which discards everything and
//! restarts the poll count whenever the collected data does not start with `0xAA`,
//! and reports success once the first four bytes read `AA 00 'O' 'K'`.
//!
//! A failed attempt is not an error: [`Link::handshake`] returns `Ok(false)` and
//! the caller decides whether to retry.

use std::thread;
use tracing::{debug, info, trace, warn};

use crate::config::LinkConfig;
use crate::receive::{ReceiveBuffer, hex};
use crate::transport::Transport;
use crate::types::LinkState;
use crate::types::opcodes::{FRAME_TAIL, HANDSHAKE_ACK, cmd};
use crate::{DisplayError, Frame, Result};

/// Check whether collected bytes start with the handshake acknowledgement.
pub fn is_handshake_ack(bytes: &[u8]) -> bool {
    bytes.len() >= HANDSHAKE_ACK.len() && bytes[..HANDSHAKE_ACK.len()] == HANDSHAKE_ACK
}

/// Outcome of feeding one poll into a [`HandshakeCollector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeProgress {
    /// Keep polling
    Pending,
    /// Acknowledgement received
    Acknowledged,
    /// Poll or resync budget used up without an acknowledgement
    Exhausted,
}

/// Accumulates handshake reply bytes across polls of one attempt.
#[derive(Debug, Clone)]
pub struct HandshakeCollector {
    bytes: Vec<u8>,
    polls: u32,
    resyncs: u32,
    max_polls: u32,
    max_resyncs: u32,
}

impl HandshakeCollector {
    pub fn new(max_polls: u32, max_resyncs: u32) -> Self {
        Self {
            bytes: Vec::with_capacity(HANDSHAKE_ACK.len()),
            polls: 0,
            resyncs: 0,
            max_polls,
            max_resyncs,
        }
    }

    /// Feed the bytes drained by one poll (possibly none).
    pub fn record_poll(&mut self, data: &[u8]) -> HandshakeProgress {
        if !data.is_empty() {
            self.bytes.extend_from_slice(data);

            if self.bytes[0] != HANDSHAKE_ACK[0] {
                debug!("Discarding {} byte(s) ahead of handshake reply: {}", self.bytes.len(), hex(&self.bytes));
                self.bytes.clear();
                self.polls = 0;
                self.resyncs += 1;
                if self.resyncs > self.max_resyncs {
                    return HandshakeProgress::Exhausted;
                }
                return HandshakeProgress::Pending;
            }

            if is_handshake_ack(&self.bytes) {
                return HandshakeProgress::Acknowledged;
            }
        }

        self.polls += 1;
        if self.polls >= self.max_polls {
            HandshakeProgress::Exhausted
        } else {
            HandshakeProgress::Pending
        }
    }

    /// Bytes collected since the last resync.
    pub fn collected(&self) -> &[u8] {
        &self.bytes
    }

    /// Polls counted since the last resync.
    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn resyncs(&self) -> u32 {
        self.resyncs
    }
}

/// Serial link to one panel.
pub struct Link<T> {
    transport: T,
    receive: ReceiveBuffer,
    state: LinkState,
    config: LinkConfig,
    frames_sent: u64,
}

impl<T: Transport> Link<T> {
    /// Wrap an open transport and start collecting its incoming bytes.
    pub fn new(mut transport: T, config: LinkConfig) -> Self {
        let receive = ReceiveBuffer::new();
        transport.register_callback(receive.callback());
        debug!("Link created (frame head: {:?})", config.frame_head);

        Self { transport, receive, state: LinkState::Uninitialized, config, frames_sent: 0 }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Buffer fed by the transport's receive callback.
    pub fn receive_buffer(&self) -> &ReceiveBuffer {
        &self.receive
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Number of frames successfully transmitted.
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    /// Transmit a frame followed by the tail, then reset it and wait the settle delay.
    ///
    /// The frame is empty when this returns, whether or not the transport accepted it.
    pub fn send(&mut self, frame: &mut Frame) -> Result<()> {
        let result = self.write_frame(frame.as_bytes());
        frame.clear();
        result?;

        self.frames_sent += 1;
        let delay = self.config.inter_frame_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }

    fn write_frame(&mut self, content: &[u8]) -> Result<()> {
        trace!("Sending frame: {}", hex(content));

        match self.config.frame_head {
            Some(head) => {
                let mut bytes = Vec::with_capacity(content.len() + 1);
                bytes.push(head);
                bytes.extend_from_slice(content);
                self.transport.write(&bytes)
            }
            None => self.transport.write(content),
        }
        .map_err(|e| DisplayError::transport("frame write", e))?;

        self.transport.write(&FRAME_TAIL).map_err(|e| DisplayError::transport("frame tail write", e))
    }

    /// Run one handshake attempt.
    ///
    /// Returns `Ok(true)` once the panel acknowledged, `Ok(false)` if the attempt
    /// timed out. Only transport failures are errors.
    pub fn handshake(&mut self) -> Result<bool> {
        if self.state != LinkState::Ready {
            self.state = LinkState::HandshakePending;
        }

        debug!("Sending handshake");
        let mut frame = Frame::new();
        frame.byte(cmd::HANDSHAKE)?;
        self.send(&mut frame)?;

        let settle = self.config.handshake_settle();
        if !settle.is_zero() {
            thread::sleep(settle);
        }

        let poll_interval = self.config.handshake_poll_interval();
        let mut collector =
            HandshakeCollector::new(self.config.handshake_max_polls, self.config.handshake_max_resyncs);

        loop {
            if !poll_interval.is_zero() {
                thread::sleep(poll_interval);
            }
            let data = self.receive.drain();

            match collector.record_poll(&data) {
                HandshakeProgress::Pending => {
                    trace!(polls = collector.polls(), collected = collector.collected().len(), "Handshake poll");
                }
                HandshakeProgress::Acknowledged => {
                    self.state = LinkState::Ready;
                    info!("Handshake acknowledged, link ready");
                    return Ok(true);
                }
                HandshakeProgress::Exhausted => {
                    warn!(
                        "Handshake attempt failed ({} byte(s) collected, {} resync(s))",
                        collector.collected().len(),
                        collector.resyncs()
                    );
                    return Ok(false);
                }
            }
        }
    }
}
