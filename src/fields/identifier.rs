use regex::Regex;
use std::fmt;

use crate::error::IdentifierError;

/// A field row identifier split into its literal prefix and numeric suffix.
///
/// `food-7` parses to prefix `food-` and number `7`. The prefix may be empty
/// (`7` alone is valid). Leading zeros in the suffix are not kept, so the
/// successor of `food-007` is `food-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
    pub prefix: String,
    pub number: u64,
}

impl FieldIdentifier {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let re = Regex::new(r"^([^0-9]*)([0-9]+)$").expect("static identifier pattern");
        let Some(caps) = re.captures(raw) else {
            // Digits somewhere, just not as one trailing run ("a1b2"), vs none at all ("field").
            return if raw.chars().any(|c| c.is_ascii_digit()) {
                Err(IdentifierError::DigitsNotTrailing(raw.to_string()))
            } else {
                Err(IdentifierError::NoTrailingDigits(raw.to_string()))
            };
        };
        let number = caps[2]
            .parse::<u64>()
            .map_err(|_| IdentifierError::Overflow(raw.to_string()))?;
        Ok(Self { prefix: caps[1].to_string(), number })
    }

    pub fn next(&self) -> Result<Self, IdentifierError> {
        let number = self
            .number
            .checked_add(1)
            .ok_or_else(|| IdentifierError::Overflow(self.to_string()))?;
        Ok(Self { prefix: self.prefix.clone(), number })
    }
}

impl fmt::Display for FieldIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}
