//! Line assembly on the receive interrupt.
//!
//! The [`LineAssembler`] runs in the receive interrupt, once per arriving byte.
//! It filters the byte against the protocol alphabet, appends it to a bounded
//! in-progress buffer, echoes it, and on a terminator hands the finished
//! [`Line`] to the main loop through a single-producer/single-consumer queue.
//!
//! # Ownership
//!
//! ```text
//!   RX interrupt                         main loop
//! ┌──────────────────┐   Line (moved)  ┌──────────────────┐
//! │  LineAssembler   │───────────────▶│    Calculator    │
//! │  owns `buffer`   │  spsc::Queue    │  owns the Line   │
//! │  + Producer      │                 │  + Consumer      │
//! └──────────────────┘                 └──────────────────┘
//! ```
//!
//! The assembler never touches a line after it has been enqueued, so the main
//! loop can read it while new bytes keep arriving. A non-empty queue is the
//! "line ready" signal.
//!
//! # Example
//!
//! ```rust
//! use serialcalc::line::{LineAssembler, LineQueue};
//!
//! let mut queue: LineQueue = LineQueue::new();
//! let (producer, mut consumer) = queue.split();
//! let mut assembler = LineAssembler::new(producer);
//! let mut echo = heapless::Vec::<u8, 16>::new();
//!
//! for &byte in b"12+x7=" {
//!     assembler.on_byte(byte, &mut echo).unwrap();
//! }
//!
//! assert_eq!(&echo[..], b"12+7=");
//! assert_eq!(consumer.dequeue().as_deref(), Some(&b"12+7="[..]));
//! ```

use heapless::spsc::{Producer, Queue};

use crate::config::Config;
use crate::transport::Transmit;

/// Total capacity of a line buffer, terminator included.
pub const LINE_CAPACITY: usize = 32;

/// Maximum number of non-terminator characters kept per line.
///
/// One slot of [`LINE_CAPACITY`] is reserved for the terminator.
pub const MAX_LINE_CONTENT: usize = LINE_CAPACITY - 1;

/// `=` ends a line.
pub const TERMINATOR_EQUALS: u8 = b'=';

/// Carriage return ends a line.
pub const TERMINATOR_CR: u8 = b'\r';

/// Queue depth that holds exactly one pending line.
///
/// `heapless::spsc::Queue<T, N>` stores at most `N - 1` items.
pub const DEFAULT_QUEUE_DEPTH: usize = 2;

/// One completed line, terminator included.
pub type Line = heapless::Vec<u8, LINE_CAPACITY>;

/// Hand-off queue between the assembler and the main loop.
pub type LineQueue<const N: usize = DEFAULT_QUEUE_DEPTH> = Queue<Line, N>;

/// Returns `true` for ASCII decimal digits.
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns `true` for `+`, `-`, `*` and `/`.
#[inline]
pub const fn is_operator(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'*' | b'/')
}

/// Returns `true` for `=` and carriage return.
#[inline]
pub const fn is_terminator(byte: u8) -> bool {
    byte == TERMINATOR_EQUALS || byte == TERMINATOR_CR
}

/// Returns `true` for every byte the protocol can see.
///
/// Anything else is dropped on arrival: not stored, not echoed, not counted.
#[inline]
pub const fn is_accepted(byte: u8) -> bool {
    is_digit(byte) || is_operator(byte) || is_terminator(byte)
}

/// Receive-side line builder.
///
/// Owns the producer half of a [`LineQueue`] plus the buffer of the line
/// currently being typed. See the [module documentation](self).
pub struct LineAssembler<'q, const N: usize = DEFAULT_QUEUE_DEPTH> {
    producer: Producer<'q, Line, N>,
    buffer: Line,
    echo_enabled: bool,
    overruns: u32,
    dropped_bytes: u32,
}

impl<'q, const N: usize> LineAssembler<'q, N> {
    /// Create an assembler with echo enabled.
    pub fn new(producer: Producer<'q, Line, N>) -> Self {
        Self::with_config(producer, &Config::default())
    }

    /// Create an assembler using the echo setting from `config`.
    pub fn with_config(producer: Producer<'q, Line, N>, config: &Config) -> Self {
        Self {
            producer,
            buffer: Line::new(),
            echo_enabled: config.echo,
            overruns: 0,
            dropped_bytes: 0,
        }
    }

    /// Enable or disable echoing of accepted bytes.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Handle one received byte. Call this from the receive interrupt.
    ///
    /// - Bytes outside `0-9 + - * / = CR` are ignored.
    /// - Non-terminator bytes past [`MAX_LINE_CONTENT`] are dropped without echo.
    /// - Stored bytes are echoed to `tx` when echo is enabled.
    /// - A terminator is stored, then the whole line is moved into the queue.
    ///
    /// If the previous line has not been taken by the main loop yet and the
    /// queue is full, the finished line is discarded and counted in
    /// [`overruns`](Self::overruns). Bytes of a line already handed off are
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns the transmitter's error if the echo could not be sent. The byte
    /// has already been processed when this happens.
    pub fn on_byte<Tx: Transmit>(&mut self, byte: u8, tx: &mut Tx) -> Result<(), Tx::Error> {
        if !is_accepted(byte) {
            return Ok(());
        }

        let terminator = is_terminator(byte);
        if !terminator && self.buffer.len() >= MAX_LINE_CONTENT {
            self.dropped_bytes = self.dropped_bytes.saturating_add(1);
            trace!("line full, dropped byte {=u8}", byte);
            return Ok(());
        }

        // Content is capped one below capacity, so the terminator always fits.
        if self.buffer.push(byte).is_err() {
            self.dropped_bytes = self.dropped_bytes.saturating_add(1);
            return Ok(());
        }

        if terminator {
            self.complete_line();
        }

        if self.echo_enabled {
            tx.send_byte(byte)?;
        }

        Ok(())
    }

    /// Feed a run of bytes through [`on_byte`](Self::on_byte).
    pub fn on_bytes<Tx: Transmit>(&mut self, bytes: &[u8], tx: &mut Tx) -> Result<(), Tx::Error> {
        for &byte in bytes {
            self.on_byte(byte, tx)?;
        }
        Ok(())
    }

    fn complete_line(&mut self) {
        let line = core::mem::take(&mut self.buffer);
        let len = line.len();
        match self.producer.enqueue(line) {
            Ok(()) => debug!("line ready ({=usize} bytes)", len),
            Err(_) => {
                self.overruns = self.overruns.saturating_add(1);
                warn!("previous line still pending, discarded {=usize} bytes", len);
            }
        }
    }

    /// Number of characters in the line currently being assembled.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Characters of the line currently being assembled.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Completed lines discarded because the queue was full.
    pub fn overruns(&self) -> u32 {
        self.overruns
    }

    /// Accepted bytes dropped because the line was already full.
    pub fn dropped_bytes(&self) -> u32 {
        self.dropped_bytes
    }

    /// Discard the partially assembled line.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl<const N: usize> core::fmt::Debug for LineAssembler<'_, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineAssembler")
            .field("buffer", &self.buffer)
            .field("echo_enabled", &self.echo_enabled)
            .field("overruns", &self.overruns)
            .field("dropped_bytes", &self.dropped_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
