use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::json;

use crate::{ApiError, ObjectsClient, RequestOptions, Result, TokenResponse};

/// Tokens within this window of their expiry are reported as expiring soon.
const EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Lifecycle of the stored access token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenState {
    /// No token has been set.
    Unset,
    /// Token is usable and not near expiry.
    Valid,
    /// Token is usable but inside the expiry buffer; refresh now.
    ExpiringSoon,
    /// Token expiry has passed.
    Expired,
}

/// Snapshot of the token bookkeeping, for reporting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenStatus {
    pub has_token: bool,
    pub state: TokenState,
    /// Whole seconds until expiry; `None` when no expiry is known.
    pub expires_in_secs: Option<u64>,
}

/// Authentication-token bookkeeping.
///
/// Tokens move through an explicit state machine (unset, valid, expiring soon,
/// expired) driven by [`AuthManager::set_tokens`] and the passage of time.
#[derive(Clone, Debug)]
pub struct AuthManager {
    access_token: Option<String>,
    refresh_token: Option<String>,
    token_type: String,
    expires_at: Option<Instant>,
}

impl Default for AuthManager {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            token_type: "Bearer".to_owned(),
            expires_at: None,
        }
    }
}

impl AuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores tokens from an authentication or refresh response.
    pub fn set_tokens(&mut self, tokens: &TokenResponse) {
        self.access_token = Some(tokens.access_token.clone());
        self.refresh_token = tokens.refresh_token.clone();
        if let Some(token_type) = &tokens.token_type {
            self.token_type = token_type.clone();
        }
        self.expires_at = tokens
            .expires_in
            .map(|secs| Instant::now() + Duration::from_secs(secs));
    }

    /// Renders the `Authorization` header value.
    ///
    /// Fails with [`ApiError::MissingToken`] when no token is set.
    pub fn auth_header(&self) -> Result<String> {
        let token = self.access_token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(format!("{} {token}", self.token_type))
    }

    /// Current token state.
    pub fn state(&self) -> TokenState {
        self.state_at(Instant::now())
    }

    /// Token state as of a given instant. A token without a known expiry never
    /// leaves [`TokenState::Valid`].
    pub fn state_at(&self, now: Instant) -> TokenState {
        if self.access_token.is_none() {
            return TokenState::Unset;
        }
        let Some(expires_at) = self.expires_at else {
            return TokenState::Valid;
        };
        if now >= expires_at {
            TokenState::Expired
        } else if now + EXPIRY_BUFFER >= expires_at {
            TokenState::ExpiringSoon
        } else {
            TokenState::Valid
        }
    }

    /// Whether the token should be refreshed before the next call.
    pub fn needs_refresh(&self) -> bool {
        matches!(self.state(), TokenState::ExpiringSoon | TokenState::Expired)
    }

    /// Exchanges the stored refresh token for fresh tokens.
    ///
    /// Posts `{"refresh_token": ...}` to the given endpoint, validates at 200,
    /// stores the new tokens, and returns the new access token.
    pub async fn refresh(
        &mut self,
        client: &ObjectsClient,
        refresh_endpoint: &str,
    ) -> Result<String> {
        let refresh_token = self
            .refresh_token
            .as_deref()
            .ok_or(ApiError::MissingRefreshToken)?;

        let response = client
            .post(
                refresh_endpoint,
                json!({ "refresh_token": refresh_token }),
                RequestOptions::new(),
            )
            .await?;
        let tokens: TokenResponse = response.validate_as(StatusCode::OK)?;

        self.set_tokens(&tokens);
        Ok(tokens.access_token)
    }

    /// Drops every stored token; the state returns to unset.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.expires_at = None;
    }

    /// Reports whether a token exists, its state, and the seconds remaining.
    pub fn status(&self) -> TokenStatus {
        let now = Instant::now();
        TokenStatus {
            has_token: self.access_token.is_some(),
            state: self.state_at(now),
            expires_in_secs: self
                .expires_at
                .map(|at| at.saturating_duration_since(now).as_secs()),
        }
    }
}
