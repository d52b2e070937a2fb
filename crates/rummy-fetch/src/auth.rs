//! Bearer credentials.

use async_trait::async_trait;
use rummy_types::{Result, RummyError};

/// An OAuth access token presented as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Yields an access token for an account.
///
/// Interactive OAuth flows live outside this crate; they plug in here.
#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Obtains a token for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`RummyError::Auth`] if no token can be produced.
    async fn token(&self, account: &str) -> Result<AccessToken>;
}

/// A token known up front, e.g. from a flag or environment variable.
#[derive(Debug, Clone)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    /// Creates a provider that always returns `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(AccessToken::new(token))
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self, account: &str) -> Result<AccessToken> {
        if self.0.secret().is_empty() {
            return Err(RummyError::Auth {
                account: account.to_string(),
                reason: "empty access token".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}
