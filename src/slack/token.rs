//! Bot token handling.

use std::fmt;

use http::HeaderValue;

/// A Slack bot token.
///
/// The value is never printed: `Debug` is redacted and there is no
/// `Display` implementation. The only way out is the `Authorization`
/// header built by [`ApiToken::bearer_header`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns true if the token is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Builds the `Authorization: Bearer <token>` header value.
    ///
    /// The returned value is marked sensitive so `http` redacts it in
    /// debug output.
    ///
    /// # Errors
    ///
    /// Returns the `http` error if the token contains characters that are
    /// not allowed in a header value.
    pub fn bearer_header(&self) -> Result<HeaderValue, http::header::InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}
