//! Edge tokens such as `AB5`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Town;

/// Candidate pattern used when scanning free-form text for edges.
static EDGE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}[0-9]+").expect("Invalid edge token regex pattern"));

/// Error returned when a string is not a valid edge token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid edge token {token:?}: {reason}")]
pub struct InvalidEdgeToken {
    token: String,
    reason: &'static str,
}

impl InvalidEdgeToken {
    fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }

    /// The offending token text.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Why the token was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A directed, weighted edge between two towns.
///
/// The textual form is two distinct uppercase letters followed by a positive
/// decimal weight, e.g. `CE2` for an edge C→E of weight 2.
///
/// # Examples
///
/// ```
/// use route_server::domain::EdgeToken;
///
/// let edge = EdgeToken::parse("CE2").unwrap();
/// assert_eq!(edge.from.as_str(), "C");
/// assert_eq!(edge.to.as_str(), "E");
/// assert_eq!(edge.weight, 2);
///
/// // A town cannot connect to itself
/// assert!(EdgeToken::parse("AA5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeToken {
    pub from: Town,
    pub to: Town,
    pub weight: u32,
}

impl EdgeToken {
    /// Parse a single token strictly. Surrounding whitespace is not allowed.
    pub fn parse(s: &str) -> Result<Self, InvalidEdgeToken> {
        let bytes = s.as_bytes();

        if bytes.len() < 3 {
            return Err(InvalidEdgeToken::new(
                s,
                "must be two letters followed by a weight",
            ));
        }

        let from = Town::from_byte(bytes[0])
            .map_err(|_| InvalidEdgeToken::new(s, "source must be an uppercase letter"))?;
        let to = Town::from_byte(bytes[1])
            .map_err(|_| InvalidEdgeToken::new(s, "destination must be an uppercase letter"))?;

        if from == to {
            return Err(InvalidEdgeToken::new(
                s,
                "source and destination must differ",
            ));
        }

        let digits = &s[2..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidEdgeToken::new(s, "weight must be decimal digits"));
        }

        let weight: u32 = digits
            .parse()
            .map_err(|_| InvalidEdgeToken::new(s, "weight is too large"))?;

        if weight == 0 {
            return Err(InvalidEdgeToken::new(s, "weight must be positive"));
        }

        Ok(EdgeToken { from, to, weight })
    }
}

impl fmt::Display for EdgeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.to, self.weight)
    }
}

/// Scan free-form text for edge tokens.
///
/// Anything that does not look like an edge is ignored. A candidate that
/// looks like an edge but breaks the token rules (`AA5`, `AB0`) is dropped
/// and scanning resumes after it.
pub fn extract_edge_tokens(text: &str) -> Vec<EdgeToken> {
    EDGE_CANDIDATE
        .find_iter(text)
        .filter_map(|m| match EdgeToken::parse(m.as_str()) {
            Ok(edge) => Some(edge),
            Err(e) => {
                debug!(token = m.as_str(), reason = e.reason(), "Skipping edge candidate");
                None
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_token() -> impl Strategy<Value = String> {
        ("[A-Z]", "[A-Z]", 1u32..10_000)
            .prop_filter("towns must differ", |(a, b, _)| a != b)
            .prop_map(|(a, b, w)| format!("{a}{b}{w}"))
    }

    proptest! {
        /// Any well-formed token parses and displays back unchanged
        #[test]
        fn roundtrip(s in valid_token()) {
            let edge = EdgeToken::parse(&s).unwrap();
            prop_assert_eq!(edge.to_string(), s);
        }

        /// Joining valid tokens with arbitrary separators extracts them all
        #[test]
        fn extract_all_separated(
            tokens in prop::collection::vec(valid_token(), 0..12),
            sep in "[ ,;]{1,3}",
        ) {
            let text = tokens.join(&sep);
            let extracted: Vec<String> = extract_edge_tokens(&text)
                .iter()
                .map(|e| e.to_string())
                .collect();
            prop_assert_eq!(extracted, tokens);
        }
    }
}
