//! Transport abstraction for the serial channel to the panel
//!
//! The driver needs two things from the channel: a blocking `write`, and a way to
//! be told about incoming bytes from whatever thread the channel reads on.

pub mod stream;

pub use stream::StreamTransport;

/// Callback invoked with each chunk of bytes received from the panel.
///
/// May be called from a thread other than the one issuing commands.
pub type ReceiveCallback = Box<dyn Fn(&[u8]) + Send + Sync + 'static>;

/// An already-open serial channel.
pub trait Transport: Send {
    /// Write all bytes to the channel.
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<()>;

    /// Register the callback that receives incoming bytes.
    ///
    /// Registering again replaces the previous callback.
    fn register_callback(&mut self, callback: ReceiveCallback);
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        (**self).write(bytes)
    }

    fn register_callback(&mut self, callback: ReceiveCallback) {
        (**self).register_callback(callback)
    }
}
