//! VersionLabel value object for the informal quotation revision scheme.
//!
//! Labels take the form `v1`, `v2`, ... or a suffixed variant `v1-A`, `v1-B`.
//! Incrementing a plain label bumps the number; incrementing a suffixed label
//! bumps the single uppercase letter. Incrementing past `Z` is a domain error
//! rather than an unguarded character overflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode, ValidationError};

/// Version label for a quotation, e.g. `v1`, `v3`, `v2-B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// The label every new or cloned quotation starts at.
    pub fn initial() -> Self {
        Self("v1".to_string())
    }

    /// Parses a label, validating the `vN` or `vN-X` shape.
    pub fn parse(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        let (base, suffix) = match label.split_once('-') {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (label.as_str(), None),
        };

        let digits = base.strip_prefix('v').unwrap_or(base);
        if digits.is_empty() || digits.parse::<u32>().is_err() {
            return Err(ValidationError::invalid_format(
                "version",
                format!("expected vN or vN-X, got '{}'", label),
            ));
        }

        if let Some(suffix) = suffix {
            let mut chars = suffix.chars();
            let valid = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase());
            if !valid {
                return Err(ValidationError::invalid_format(
                    "version",
                    format!("suffix must be a single uppercase letter, got '{}'", label),
                ));
            }
        }

        Ok(Self(label))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the next label without mutating this one.
    ///
    /// # Errors
    ///
    /// - `VersionOverflow` if the letter suffix is already `Z`
    pub fn next(&self) -> Result<Self, DomainError> {
        if let Some((base, suffix)) = self.0.split_once('-') {
            // Single uppercase letter, guaranteed by parse()
            let letter = suffix.chars().next().unwrap_or('A');
            if letter >= 'Z' {
                return Err(DomainError::new(
                    ErrorCode::VersionOverflow,
                    format!("Cannot increment version suffix past Z: {}", self.0),
                ));
            }
            let bumped = (letter as u8 + 1) as char;
            return Ok(Self(format!("{}-{}", base, bumped)));
        }

        let digits = self.0.strip_prefix('v').unwrap_or(&self.0);
        let number: u32 = digits.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Unparseable version label: {}", self.0),
            )
        })?;
        Ok(Self(format!("v{}", number + 1)))
    }
}

impl Default for VersionLabel {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VersionLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_label_is_v1() {
        assert_eq!(VersionLabel::initial().as_str(), "v1");
    }

    #[test]
    fn next_increments_numeric_label() {
        let v1 = VersionLabel::parse("v1").unwrap();
        assert_eq!(v1.next().unwrap().as_str(), "v2");
    }

    #[test]
    fn next_handles_multi_digit_numbers() {
        let v9 = VersionLabel::parse("v9").unwrap();
        assert_eq!(v9.next().unwrap().as_str(), "v10");
    }

    #[test]
    fn next_increments_letter_suffix() {
        let label = VersionLabel::parse("v1-A").unwrap();
        assert_eq!(label.next().unwrap().as_str(), "v1-B");
    }

    #[test]
    fn next_does_not_mutate_original() {
        let label = VersionLabel::parse("v3").unwrap();
        let _ = label.next().unwrap();
        assert_eq!(label.as_str(), "v3");
    }

    #[test]
    fn next_past_z_is_overflow_error() {
        let label = VersionLabel::parse("v1-Z").unwrap();
        let err = label.next().unwrap_err();
        assert_eq!(err.code, ErrorCode::VersionOverflow);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(VersionLabel::parse("version-one").is_err());
        assert!(VersionLabel::parse("v").is_err());
        assert!(VersionLabel::parse("v1-AB").is_err());
        assert!(VersionLabel::parse("v1-a").is_err());
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let label = VersionLabel::parse("v2-C").unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"v2-C\"");
    }
}
