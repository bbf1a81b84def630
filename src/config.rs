//! Device configuration and runtime statistics.
//!
//! [`Config`] can be built in code or loaded from a JSON blob, for example
//! one provisioned into flash:
//!
//! ```rust
//! use serialcalc::config::Config;
//!
//! let config = Config::from_json(br#"{"echo":false}"#).unwrap();
//! assert!(!config.echo);
//! assert!(config.banner);
//! ```

use serde::{Deserialize, Serialize};

/// Errors raised while reading or writing configuration and status JSON.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The input was not a valid configuration document.
    Parse,
    /// The output buffer was too small.
    BufferOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Parse => defmt::write!(f, "Parse"),
            ConfigError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}

/// Runtime options for the assembler and the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Echo every accepted input byte back as it arrives.
    pub echo: bool,
    /// Send the `Ready` banner from [`Calculator::start`](crate::calculator::Calculator::start).
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo: true,
            banner: true,
        }
    }
}

impl Config {
    /// Parse a JSON configuration document. Missing fields keep their defaults.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json_core::from_slice::<Config>(json)
            .map(|(config, _)| config)
            .map_err(|_| ConfigError::Parse)
    }

    /// Serialize into `buf`, returning the number of bytes written.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        serde_json_core::to_slice(self, buf).map_err(|_| ConfigError::BufferOverflow)
    }
}

/// Counters maintained by the [`Calculator`](crate::calculator::Calculator).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Lines taken from the queue and answered.
    pub lines: u32,
    /// Lines answered with a number.
    pub results: u32,
    /// Lines answered with any fault token.
    pub faults: u32,
    /// The subset of `faults` that were arithmetic overflow.
    pub overflows: u32,
}

impl Stats {
    /// Serialize as a JSON status report into `buf`.
    ///
    /// ```rust
    /// use serialcalc::config::Stats;
    ///
    /// let mut buf = [0u8; 64];
    /// let len = Stats::default().to_json(&mut buf).unwrap();
    /// assert_eq!(&buf[..len], br#"{"lines":0,"results":0,"faults":0,"overflows":0}"#);
    /// ```
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        serde_json_core::to_slice(self, buf).map_err(|_| ConfigError::BufferOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.echo);
        assert!(config.banner);
    }

    #[test]
    fn test_config_from_json() {
        let config = Config::from_json(br#"{"echo":false,"banner":false}"#).unwrap();
        assert_eq!(
            config,
            Config {
                echo: false,
                banner: false
            }
        );
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config = Config::from_json(b"{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_rejects_garbage() {
        assert_eq!(Config::from_json(b"echo=1"), Err(ConfigError::Parse));
        assert_eq!(Config::from_json(br#"{"echo":"yes"}"#), Err(ConfigError::Parse));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = Config {
            echo: false,
            banner: true,
        };
        let mut buf = [0u8; 64];
        let len = config.to_json(&mut buf).unwrap();
        assert_eq!(Config::from_json(&buf[..len]).unwrap(), config);
    }

    #[test]
    fn test_stats_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(
            Stats::default().to_json(&mut buf),
            Err(ConfigError::BufferOverflow)
        );
    }
}
