//! # serialcalc - interrupt-driven serial calculator
//!
//! A `no_std` building block for a microcontroller that answers simple
//! arithmetic over a serial link. The host types `NUM OP NUM` followed by `=`
//! or carriage return; the device echoes each key and replies with the result
//! or an error token.
//!
//! ```text
//! Ready
//! 12+7=19
//! 9/0=ERROR
//! 4294967295+1=OVERFLOW
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! RX byte ─▶ LineAssembler ─▶ spsc queue ─▶ Calculator ─▶ parse ─▶ decode ─▶ evaluate ─▶ encode ─▶ TX
//!            (interrupt)                     (main loop)
//! ```
//!
//! - [`line`]: byte filtering, bounded line buffer, echo, hand-off to the main loop
//! - [`expr`]: strict `digits op digits terminator` grammar check
//! - [`codec`]: decimal text to `u32` and back
//! - [`eval`]: overflow-checked unsigned arithmetic
//! - [`calculator`]: main loop, response emitter
//! - [`transport`]: the transmit seam the platform implements
//!
//! ## Wiring it up
//!
//! ```rust,no_run
//! use serialcalc::calculator::Calculator;
//! use serialcalc::line::{LineAssembler, LineQueue};
//! use serialcalc::transport::Transmit;
//!
//! struct Uart;
//!
//! impl Transmit for Uart {
//!     type Error = ();
//!     fn send_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
//!         // wait for TX empty, write the data register
//!         Ok(())
//!     }
//! }
//!
//! let mut queue: LineQueue = LineQueue::new();
//! let (producer, consumer) = queue.split();
//!
//! // Move `assembler` into the receive interrupt and call
//! // `assembler.on_byte(byte, &mut uart)` for every received byte.
//! let _assembler = LineAssembler::new(producer);
//!
//! let mut calculator = Calculator::new(Uart, consumer);
//! calculator.run().unwrap();
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Fault classification and response tokens.
pub mod error;

/// Transmit-side byte transport abstraction.
pub mod transport;

/// Runtime configuration and statistics, with JSON support.
pub mod config;

/// Receive-interrupt line assembly and the line hand-off queue.
pub mod line;

/// Grammar validation of completed lines.
pub mod expr;

/// Decimal encoding and decoding of `u32` values.
pub mod codec;

/// Overflow-checked evaluation.
pub mod eval;

/// The main-loop consumer and response emitter.
pub mod calculator;

pub use calculator::Calculator;
pub use config::Config;
pub use error::Fault;
pub use line::{LineAssembler, LineQueue};
