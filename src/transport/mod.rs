//! Byte transport seam
//!
//! The receive direction is interrupt driven: the platform's receive handler
//! passes each incoming byte to [`LineAssembler::on_byte`](crate::line::LineAssembler::on_byte).
//! Only the transmit direction is modelled as a trait here. It is shared by the
//! echo path and the response emitter.

#![deny(unsafe_code)]

/// Common error types for transport operations
pub mod error;

pub use error::Error;

/// A blocking, byte-oriented transmitter (a UART TX register, a socket, a test buffer).
pub trait Transmit {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Send one byte, blocking until the link accepts it.
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send every byte of `bytes` in order.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.send_byte(byte)?;
        }
        Ok(())
    }
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    type Error = T::Error;

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).send_byte(byte)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(bytes)
    }
}

/// Capture buffer: everything sent is appended until the vector is full.
impl<const N: usize> Transmit for heapless::Vec<u8, N> {
    type Error = Error;

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte).map_err(|_| Error::BufferFull)
    }
}
