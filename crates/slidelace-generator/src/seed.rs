//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Displays as 64 lowercase hex characters and parses back from the same
/// format, so seeds survive logs, URLs, and bug reports. The RNG stream is
/// keyed by the SHA-256 digest of the seed bytes, which whitens
/// hand-picked seeds into well-distributed generator state.
///
/// # Examples
///
/// ```
/// use slidelace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), slidelace_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic RNG stream for this seed.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(Sha256::digest(self.0).into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(ParseSeedError::InvalidDigit { offset: 2 * i })?;
            let lo =
                hex_value(pair[1]).ok_or(ParseSeedError::InvalidDigit { offset: 2 * i + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// A seed string is not 64 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string length is not 64.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("seed contains a non-hex character at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the rejected character.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn parse_accepts_uppercase() {
        let seed = "AB".repeat(32).parse::<PuzzleSeed>().unwrap();
        assert_eq!(seed, PuzzleSeed::from_bytes([0xab; 32]));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn parse_rejects_non_hex_character() {
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit { offset: 10 })
        );
    }

    #[test]
    fn random_seeds_differ() {
        // Collisions are astronomically unlikely; a repeat here means the
        // entropy source is broken.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn round_trips_any_bytes(bytes in proptest::array::uniform32(any::<u8>())) {
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
        }
    }
}
