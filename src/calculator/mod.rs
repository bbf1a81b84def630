//! Main-loop side: evaluate completed lines and write the responses.
//!
//! The [`Calculator`] owns the consumer half of the [`LineQueue`](crate::line::LineQueue).
//! Each completed line is taken off the queue, validated, evaluated and
//! answered with either the decimal result or a fault token, both followed by
//! CR LF. The line is dropped once answered, whatever the outcome, so the next
//! one always starts from an empty buffer.
//!
//! # Wire format
//!
//! ```text
//! > 12+7=        < 19\r\n
//! > 9/0=         < ERROR\r\n
//! > 5-10=        < OVERFLOW\r\n
//! ```
//!
//! # Example
//!
//! ```rust
//! use serialcalc::calculator::Calculator;
//! use serialcalc::line::{LineAssembler, LineQueue};
//!
//! let mut queue: LineQueue = LineQueue::new();
//! let (producer, consumer) = queue.split();
//! let mut assembler = LineAssembler::new(producer);
//! let mut calculator = Calculator::new(heapless::Vec::<u8, 64>::new(), consumer);
//!
//! calculator.start().unwrap();
//! let mut echo = heapless::Vec::<u8, 64>::new();
//! assembler.on_bytes(b"12+7=", &mut echo).unwrap();
//! assert!(calculator.poll().unwrap());
//!
//! assert_eq!(&calculator.transmitter()[..], b"Ready\r\n19\r\n");
//! ```

use core::convert::Infallible;

use heapless::spsc::Consumer;

use crate::codec::encode;
use crate::config::{Config, Stats};
use crate::error::Fault;
use crate::eval::evaluate_line;
use crate::line::{DEFAULT_QUEUE_DEPTH, Line};
use crate::transport::Transmit;

/// Sent once by [`Calculator::start`].
pub const BANNER: &[u8] = b"Ready\r\n";

/// Ends every response line.
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Write a numeric result followed by CR LF.
pub fn emit_value<Tx: Transmit + ?Sized>(tx: &mut Tx, value: u32) -> Result<(), Tx::Error> {
    tx.send(encode(value).as_bytes())?;
    tx.send(LINE_ENDING)
}

/// Write the token for `fault` followed by CR LF.
pub fn emit_fault<Tx: Transmit + ?Sized>(tx: &mut Tx, fault: Fault) -> Result<(), Tx::Error> {
    tx.send(fault.token().as_bytes())?;
    tx.send(LINE_ENDING)
}

/// Write whichever response `outcome` calls for.
pub fn emit_outcome<Tx: Transmit + ?Sized>(
    tx: &mut Tx,
    outcome: &Result<u32, Fault>,
) -> Result<(), Tx::Error> {
    match *outcome {
        Ok(value) => emit_value(tx, value),
        Err(fault) => emit_fault(tx, fault),
    }
}

/// Consumer of completed lines and producer of responses.
pub struct Calculator<'q, Tx, const N: usize = DEFAULT_QUEUE_DEPTH> {
    tx: Tx,
    consumer: Consumer<'q, Line, N>,
    banner_enabled: bool,
    stats: Stats,
}

impl<'q, Tx: Transmit, const N: usize> Calculator<'q, Tx, N> {
    /// Create a calculator with the default [`Config`].
    pub fn new(tx: Tx, consumer: Consumer<'q, Line, N>) -> Self {
        Self::with_config(tx, consumer, &Config::default())
    }

    /// Create a calculator using the banner setting from `config`.
    pub fn with_config(tx: Tx, consumer: Consumer<'q, Line, N>, config: &Config) -> Self {
        Self {
            tx,
            consumer,
            banner_enabled: config.banner,
            stats: Stats::default(),
        }
    }

    /// Announce readiness. Call once after the platform is initialised.
    pub fn start(&mut self) -> Result<(), Tx::Error> {
        if self.banner_enabled {
            self.tx.send(BANNER)?;
            debug!("banner sent");
        }
        Ok(())
    }

    /// Answer the next pending line, if there is one.
    ///
    /// Returns `Ok(true)` when a line was taken off the queue and answered.
    pub fn poll(&mut self) -> Result<bool, Tx::Error> {
        let Some(line) = self.consumer.dequeue() else {
            return Ok(false);
        };
        self.process(&line)?;
        Ok(true)
    }

    /// Evaluate one completed line (terminator included) and send the response.
    ///
    /// The evaluation outcome is returned alongside so callers can observe
    /// what was sent. Only a transport failure is an `Err`.
    pub fn process(&mut self, line: &[u8]) -> Result<Result<u32, Fault>, Tx::Error> {
        let outcome = evaluate_line(line);
        self.record(&outcome);
        emit_outcome(&mut self.tx, &outcome)?;
        Ok(outcome)
    }

    /// Send the banner, then answer lines forever.
    ///
    /// Busy-waits on the queue between lines. Only returns if the transport fails.
    pub fn run(&mut self) -> Result<Infallible, Tx::Error> {
        self.start()?;
        loop {
            if !self.poll()? {
                core::hint::spin_loop();
            }
        }
    }

    fn record(&mut self, outcome: &Result<u32, Fault>) {
        self.stats.lines = self.stats.lines.wrapping_add(1);
        match outcome {
            Ok(value) => {
                self.stats.results = self.stats.results.wrapping_add(1);
                trace!("result {=u32}", *value);
            }
            Err(fault) => {
                self.stats.faults = self.stats.faults.wrapping_add(1);
                if *fault == Fault::Overflow {
                    self.stats.overflows = self.stats.overflows.wrapping_add(1);
                }
                debug!("line rejected: {}", fault);
            }
        }
    }

    /// Whether a completed line is waiting.
    pub fn line_ready(&self) -> bool {
        self.consumer.ready()
    }

    /// Counters since creation.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Borrow the transmitter.
    pub fn transmitter(&self) -> &Tx {
        &self.tx
    }

    /// Mutably borrow the transmitter.
    pub fn transmitter_mut(&mut self) -> &mut Tx {
        &mut self.tx
    }

    /// Take the calculator apart.
    pub fn release(self) -> (Tx, Consumer<'q, Line, N>) {
        (self.tx, self.consumer)
    }
}

impl<Tx, const N: usize> core::fmt::Debug for Calculator<'_, Tx, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Calculator")
            .field("banner_enabled", &self.banner_enabled)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
