//! Authentication boundary
//!
//! The identity provider is external; services only see a [`TokenProvider`]
//! that yields the current principal's token or fails with `Unauthenticated`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::utils::errors::{ApiError, ApiResult};

/// Source of the identity token for the current session
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Token placed verbatim in the `Authorization` header
    async fn current_token(&self) -> ApiResult<String>;
}

/// Fixed token, typically from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn unauthenticated() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn current_token(&self) -> ApiResult<String> {
        self.token.clone().ok_or(ApiError::Unauthenticated)
    }
}

/// Token of a signed-in user that can change over the session's lifetime
#[derive(Debug, Default)]
pub struct SessionTokenProvider {
    session: RwLock<Option<SessionUser>>,
}

#[derive(Debug, Clone)]
struct SessionUser {
    user_id: String,
    id_token: String,
}

impl SessionTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signed-in principal, replacing any previous one
    pub async fn sign_in(&self, user_id: impl Into<String>, id_token: impl Into<String>) {
        let user = SessionUser {
            user_id: user_id.into(),
            id_token: id_token.into(),
        };
        info!(user_id = %user.user_id, "User signed in");
        *self.session.write().await = Some(user);
    }

    /// Replace the token of the current principal after a refresh
    pub async fn refresh_token(&self, id_token: impl Into<String>) -> ApiResult<()> {
        let mut session = self.session.write().await;
        let user = session.as_mut().ok_or(ApiError::Unauthenticated)?;
        user.id_token = id_token.into();
        debug!(user_id = %user.user_id, "Identity token refreshed");
        Ok(())
    }

    pub async fn sign_out(&self) {
        if let Some(user) = self.session.write().await.take() {
            info!(user_id = %user.user_id, "User signed out");
        }
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|u| u.user_id.clone())
    }
}

#[async_trait]
impl TokenProvider for SessionTokenProvider {
    async fn current_token(&self) -> ApiResult<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|u| u.id_token.clone())
            .ok_or(ApiError::Unauthenticated)
    }
}
