use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Exact length of a Torn API key.
pub const API_KEY_LEN: usize = 16;

/// Number of leading characters left visible by [`ApiKey::masked`].
const VISIBLE_PREFIX: usize = 4;

/// A validated Torn API key.
///
/// Construction is the only place the key is checked: a value of this type
/// is always exactly 16 characters and never blank, so every client method
/// that takes `&ApiKey` can issue its request without re-validating.
/// The secret is held in a [`SecretString`] and never shows up in `Debug`.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Validate and wrap a raw key.
    ///
    /// Fails with [`Error::InvalidApiKey`] when the key is blank or its
    /// length is not [`API_KEY_LEN`].
    pub fn new(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        let length = raw.chars().count();
        if raw.trim().is_empty() || length != API_KEY_LEN {
            return Err(Error::InvalidApiKey { length });
        }
        Ok(Self(SecretString::from(raw)))
    }

    /// The raw key, for the `key=` query parameter only.
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// The key with everything but the first few characters starred out.
    pub fn masked(&self) -> String {
        self.expose()
            .chars()
            .enumerate()
            .map(|(i, c)| if i < VISIBLE_PREFIX { c } else { '*' })
            .collect()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl FromStr for ApiKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sixteen_characters() {
        let key = ApiKey::new("abcdEFGH12345678");
        assert!(key.is_ok());
    }

    #[test]
    fn rejects_wrong_lengths() {
        for raw in ["", "short", "abcdEFGH1234567", "abcdEFGH123456789"] {
            assert!(
                matches!(ApiKey::new(raw), Err(Error::InvalidApiKey { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_blank_key_of_correct_length() {
        let blank = " ".repeat(API_KEY_LEN);
        assert!(matches!(
            ApiKey::new(blank),
            Err(Error::InvalidApiKey { length: 16 })
        ));
    }

    #[test]
    fn debug_and_masked_hide_the_secret() {
        let key: ApiKey = "abcdEFGH12345678".parse().expect("valid key");
        assert_eq!(key.masked(), "abcd************");
        let debug = format!("{key:?}");
        assert!(!debug.contains("EFGH"), "leaked key in {debug}");
    }
}
