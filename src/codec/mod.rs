//! Decimal text ⇄ `u32` conversion.

/// Digits needed for `u32::MAX` (4294967295).
pub const MAX_DIGITS: usize = 10;

/// The decimal form of one `u32`, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(heapless::Vec<u8, MAX_DIGITS>);

impl Digits {
    /// The digit characters.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The digits as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever pushed.
        core::str::from_utf8(&self.0).unwrap_or("")
    }

    /// Number of digits, at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: zero encodes as `"0"`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Display for Digits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a run of ASCII digits to a number, most significant digit first.
///
/// There is no overflow check: values past `u32::MAX` wrap modulo 2^32.
/// Callers pass digit runs that have already been validated.
///
/// ```rust
/// use serialcalc::codec::decode;
///
/// assert_eq!(decode(b"0042"), 42);
/// assert_eq!(decode(b"4294967296"), 0);
/// ```
pub fn decode(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &d| {
        acc.wrapping_mul(10).wrapping_add(u32::from(d.wrapping_sub(b'0')))
    })
}

/// Convert a number to its shortest decimal form.
///
/// Digits are extracted least significant first and then reversed in place.
///
/// ```rust
/// use serialcalc::codec::encode;
///
/// assert_eq!(encode(0).as_str(), "0");
/// assert_eq!(encode(4294967295).as_str(), "4294967295");
/// ```
pub fn encode(value: u32) -> Digits {
    let mut out = heapless::Vec::<u8, MAX_DIGITS>::new();
    let mut rest = value;
    loop {
        // At most ten iterations for a u32, so the push never fails.
        let _ = out.push(b'0' + (rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out.reverse();
    Digits(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_has_no_leading_zeros() {
        assert_eq!(encode(10).as_bytes(), b"10");
        assert_eq!(encode(1_000_000).as_bytes(), b"1000000");
    }

    #[test]
    fn test_decode_wraps() {
        // 2^32 + 5
        assert_eq!(decode(b"4294967301"), 5);
    }

    #[test]
    fn test_boundaries_roundtrip() {
        for value in [0, 1, 9, 10, 99, 100, u32::MAX - 1, u32::MAX] {
            let digits = encode(value);
            assert_eq!(decode(digits.as_bytes()), value);
        }
    }
}
