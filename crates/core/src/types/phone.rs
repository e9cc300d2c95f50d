//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is shorter than the minimum length.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input string is longer than the maximum length.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("phone number contains invalid character '{ch}'")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A phone number in permissive display form.
///
/// Accepts digits with common punctuation rather than enforcing a strict
/// numbering plan, so international prefixes and grouped numbers pass
/// unchanged.
///
/// ## Constraints
///
/// - Length: 7-20 characters
/// - Characters drawn from digits, `+`, `-`, `(`, `)`, and spaces
///
/// ## Examples
///
/// ```
/// use leaddesk_core::Phone;
///
/// assert!(Phone::parse("9999999999").is_ok());
/// assert!(Phone::parse("+91 98765 43210").is_ok());
/// assert!(Phone::parse("(020) 1234-5678").is_ok());
///
/// assert!(Phone::parse("12345").is_err());        // too short
/// assert!(Phone::parse("98765-43210x").is_err()); // invalid character
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum length of a phone number.
    pub const MIN_LENGTH: usize = 7;

    /// Maximum length of a phone number.
    pub const MAX_LENGTH: usize = 20;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is outside the 7-20 character range or
    /// contains a character other than digits, `+`, `-`, `(`, `)`, or spaces.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let len = s.chars().count();
        if len < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if len > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(ch) = s.chars().find(|c| !Self::is_allowed(*c)) {
            return Err(PhoneError::InvalidCharacter { ch });
        }

        Ok(Self(s.to_owned()))
    }

    /// Whether a character is allowed in a phone number.
    const fn is_allowed(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_phones() {
        assert!(Phone::parse("9999999999").is_ok());
        assert!(Phone::parse("+91 98765 43210").is_ok());
        assert!(Phone::parse("(020) 1234-5678").is_ok());
        assert!(Phone::parse("1234567").is_ok()); // exactly min length
        assert!(Phone::parse("12345678901234567890").is_ok()); // exactly max length
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            Phone::parse("123456"),
            Err(PhoneError::TooShort { .. })
        ));
        assert!(matches!(Phone::parse(""), Err(PhoneError::TooShort { .. })));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Phone::parse("123456789012345678901"),
            Err(PhoneError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = Phone::parse("98765-43210x").unwrap_err();
        assert!(matches!(err, PhoneError::InvalidCharacter { ch: 'x' }));

        assert!(matches!(
            Phone::parse("987.654.3210"),
            Err(PhoneError::InvalidCharacter { ch: '.' })
        ));
    }

    #[test]
    fn test_display() {
        let phone = Phone::parse("+91 98765 43210").unwrap();
        assert_eq!(format!("{phone}"), "+91 98765 43210");
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("9999999999").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"9999999999\"");

        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
