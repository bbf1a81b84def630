//! Common error types for transport operations

/// A common error type for byte transports.
///
/// Platform transmitters with richer failure modes define their own
/// `Transmit::Error`; this one covers the transports shipped with the crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The destination has no room for another byte.
    BufferFull,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::BufferFull => defmt::write!(f, "BufferFull"),
        }
    }
}
