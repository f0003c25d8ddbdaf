//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty or whitespace.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not contain exactly one @ symbol with text on both sides.
    #[error("email must have a local part and a domain separated by @")]
    MissingAtSymbol,
    /// The input contains a character outside the accepted set.
    #[error("email contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A validated email address.
///
/// Accepts the same shape as the RFC 5322 "practical" pattern: a local part of
/// alphanumerics and the special characters ``_!#$%&'*+/=?`{|}~^.-`` followed
/// by `@` and a domain of alphanumerics, dots and dashes.
///
/// ## Examples
///
/// ```
/// use waypoint_core::Email;
///
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("user name@x.com").is_err()); // space
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

const LOCAL_SPECIALS: &str = "_!#$%&'*+/=?`{|}~^.-";

fn valid_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c)
}

fn valid_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank, lacks an @ with non-empty
    /// parts on both sides, or contains a character outside the accepted set.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailError::MissingAtSymbol);
        }

        if let Some(c) = local.chars().find(|&c| !valid_local_char(c)) {
            return Err(EmailError::InvalidCharacter(c));
        }

        if let Some(c) = domain.chars().find(|&c| !valid_domain_char(c)) {
            return Err(EmailError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_emails() {
        assert!(Email::parse("user@example.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("user+tag@example.com").is_ok());
        assert!(Email::parse("we`ird{one}@sub.example-host.co.uk").is_ok());
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
    }

    #[test]
    fn rejects_missing_or_dangling_at() {
        assert_eq!(Email::parse("no-at-symbol"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("@domain.com"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("user@"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("a@b@c"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            Email::parse("user name@x.com"),
            Err(EmailError::InvalidCharacter(' '))
        );
        assert_eq!(
            Email::parse("user@do_main.com"),
            Err(EmailError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn serde_is_transparent() {
        let email = Email::parse("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, r#""user@example.com""#);

        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);
    }
}
