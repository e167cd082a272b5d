//! Sessione utente - contesto esplicito passato al client HTTP.
//!
//! La sessione viene creata dal chiamante dopo il login e distrutta al logout;
//! il login vero e proprio resta compito del backend di autenticazione.

use crate::core::AppError;
use crate::entities::{User, UserRole};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.role
    }
}

/// Verifica la presenza di una sessione prima di una chiamata autenticata
pub fn require_session(session: Option<&Session>) -> Result<&Session, AppError> {
    session.ok_or_else(|| {
        warn!("Authenticated call attempted without a session");
        AppError::unauthorized("Login required")
    })
}
