//! Transport over a pair of std::io halves (e.g. a cloned serial port handle)

use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::{ReceiveCallback, Transport};

const MAX_READ_ERRORS: u32 = 10;
const READ_CHUNK: usize = 64;

type CallbackSlot = Arc<Mutex<Option<ReceiveCallback>>>;

/// Transport that writes to `W` and reads from a background thread.
///
/// The reader thread is spawned on the first `register_callback` and forwards every
/// non-empty read to the current callback. It ends on EOF, after repeated read
/// errors, or once the transport is stopped and the next read returns.
///
/// Readers with a read timeout (the usual serial-port setup) notice a stop within one
/// timeout; use [`StreamTransport::close`] to wait for that. Dropping the transport
/// does not wait: with a blocking reader that never returns, the reader thread and
/// the callback it holds (typically a receive buffer) stay alive until the next
/// byte, EOF or error arrives.
pub struct StreamTransport<W> {
    writer: W,
    reader: Option<Box<dyn Read + Send>>,
    callback: CallbackSlot,
    stop: Arc<AtomicBool>,
    reader_thread: Option<JoinHandle<()>>,
}

impl<W: Write + Send> StreamTransport<W> {
    /// Create a transport from a write half and a read half.
    pub fn new<R>(writer: W, reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            writer,
            reader: Some(Box::new(reader)),
            callback: Arc::new(Mutex::new(None)),
            stop: Arc::new(AtomicBool::new(false)),
            reader_thread: None,
        }
    }

    /// Check if the background reader is still running.
    pub fn is_reading(&self) -> bool {
        self.reader_thread.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the reader and wait for its thread to exit.
    ///
    /// Blocks until the reader's pending `read` returns.
    pub fn close(mut self) {
        self.stop_reader(true);
    }

    fn spawn_reader(&mut self) {
        let Some(reader) = self.reader.take() else {
            return;
        };
        let callback = Arc::clone(&self.callback);
        let stop = Arc::clone(&self.stop);

        let spawned = thread::Builder::new()
            .name("t5uic1-rx".to_string())
            .spawn(move || read_loop(reader, callback, stop));

        match spawned {
            Ok(handle) => self.reader_thread = Some(handle),
            Err(e) => error!("Failed to spawn serial reader thread: {}", e),
        }
    }
}

fn read_loop(mut reader: Box<dyn Read + Send>, callback: CallbackSlot, stop: Arc<AtomicBool>) {
    info!("Serial reader started");
    let mut buf = [0u8; READ_CHUNK];
    let mut error_count = 0u32;
    let mut total = 0usize;

    while !stop.load(Ordering::Acquire) {
        match reader.read(&mut buf) {
            Ok(0) => {
                info!("Serial reader reached end of stream");
                break;
            }
            Ok(n) => {
                error_count = 0;
                total += n;
                let slot = callback.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                if let Some(callback) = slot.as_ref() {
                    callback(&buf[..n]);
                }
            }
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                // Idle line
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                error_count += 1;
                warn!("Serial read error ({}/{}): {}", error_count, MAX_READ_ERRORS, e);

                if error_count >= MAX_READ_ERRORS {
                    error!("Too many serial read errors, stopping reader");
                    break;
                }

                // Exponential backoff: 20ms, 40ms, 80ms, ... capped at 320ms
                let backoff = Duration::from_millis(10 * (1 << error_count.min(5)));
                thread::sleep(backoff);
            }
        }
    }

    debug!("Serial reader ended ({} bytes received)", total);
}

impl<W: Write + Send> Transport for StreamTransport<W> {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }

    fn register_callback(&mut self, callback: ReceiveCallback) {
        *self.callback.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(callback);
        self.spawn_reader();
    }
}

impl<W> StreamTransport<W> {
    fn stop_reader(&mut self, wait: bool) {
        self.stop.store(true, Ordering::Release);
        let Some(handle) = self.reader_thread.take() else {
            return;
        };
        if !wait && !handle.is_finished() {
            debug!("Serial reader exits after its pending read");
            return;
        }
        if handle.join().is_err() {
            warn!("Serial reader thread panicked");
        }
    }
}

impl<W> Drop for StreamTransport<W> {
    fn drop(&mut self) {
        debug!("Dropping stream transport");
        self.stop_reader(false);
    }
}
