//! Town name types.

use std::fmt;

/// Error returned when parsing an invalid town name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid town name: {reason}")]
pub struct InvalidTown {
    reason: &'static str,
}

/// A valid single-letter town name.
///
/// Town names are always one uppercase ASCII letter. This type guarantees
/// that any `Town` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::Town;
///
/// let a = Town::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Lowercase is rejected
/// assert!(Town::parse("a").is_err());
///
/// // Wrong length is rejected
/// assert!(Town::parse("").is_err());
/// assert!(Town::parse("AB").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Town(u8);

impl Town {
    /// Parse a town name from a string.
    ///
    /// The input must be exactly one uppercase ASCII letter (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidTown> {
        match s.as_bytes() {
            [b] => Self::from_byte(*b),
            _ => Err(InvalidTown {
                reason: "must be exactly 1 character",
            }),
        }
    }

    /// Build a town from a single byte of an edge token.
    pub(crate) fn from_byte(b: u8) -> Result<Self, InvalidTown> {
        if b.is_ascii_uppercase() {
            Ok(Town(b))
        } else {
            Err(InvalidTown {
                reason: "must be an uppercase ASCII letter A-Z",
            })
        }
    }

    /// Returns the town name as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(std::slice::from_ref(&self.0)).unwrap_or("?")
    }
}

impl fmt::Debug for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Town({})", self.as_str())
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
