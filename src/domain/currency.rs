use serde::{Deserialize, Serialize};
use std::fmt;

/// Short uppercase currency identifier (e.g. "USD").
///
/// Only non-emptiness is enforced here; whether a code is actually quotable
/// is the rate provider's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s = value.into().trim().to_uppercase();
        if s.is_empty() {
            return Err("Currency code cannot be empty");
        }
        Ok(CurrencyCode(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CurrencyCode::new(value)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        CurrencyCode::new(value)
    }
}

/// Ordered (base, target) pair. Equality is by exact pair, never symmetric:
/// USD-MXN and MXN-USD are distinct quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        CurrencyPair { base, target }
    }

    /// Parse a single "FROM-TO" token.
    pub fn parse(token: &str) -> Result<Self, &'static str> {
        let (from, to) = token
            .trim()
            .split_once('-')
            .ok_or("Pair must be formatted as FROM-TO")?;
        Ok(CurrencyPair {
            base: CurrencyCode::new(from)?,
            target: CurrencyCode::new(to)?,
        })
    }

    /// Parse a comma-separated list of "FROM-TO" tokens, preserving order.
    pub fn parse_list(csv: &str) -> Result<Vec<Self>, &'static str> {
        csv.split(',').map(CurrencyPair::parse).collect()
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_normalizes_to_uppercase() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn code_rejects_empty() {
        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("   ").is_err());
    }

    #[test]
    fn pair_parses_from_to_token() {
        let pair = CurrencyPair::parse("usd-mxn").unwrap();
        assert_eq!(pair.base.as_str(), "USD");
        assert_eq!(pair.target.as_str(), "MXN");
        assert_eq!(pair.to_string(), "USD-MXN");
    }

    #[test]
    fn pair_rejects_malformed_tokens() {
        assert!(CurrencyPair::parse("USDMXN").is_err());
        assert!(CurrencyPair::parse("-MXN").is_err());
        assert!(CurrencyPair::parse("USD-").is_err());
        assert!(CurrencyPair::parse("").is_err());
    }

    #[test]
    fn pair_equality_is_directional() {
        let ab = CurrencyPair::parse("USD-MXN").unwrap();
        let ba = CurrencyPair::parse("MXN-USD").unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn list_preserves_request_order() {
        let pairs = CurrencyPair::parse_list("USD-MXN,USD-COP,EUR-USD").unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].to_string(), "USD-MXN");
        assert_eq!(pairs[1].to_string(), "USD-COP");
        assert_eq!(pairs[2].to_string(), "EUR-USD");
    }

    #[test]
    fn list_rejects_any_malformed_entry() {
        assert!(CurrencyPair::parse_list("USD-MXN,bogus").is_err());
        assert!(CurrencyPair::parse_list("USD-MXN,").is_err());
        assert!(CurrencyPair::parse_list("").is_err());
    }
}
