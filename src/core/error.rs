use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;

/// Corpo di errore restituito dal backend
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Errore di trasporto, timeout o backend non disponibile
    Network,
    /// Il payload è stato rifiutato (lato client o dal backend)
    Validation,
    /// Sessione assente o scaduta
    Auth,
}

#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    status: Option<StatusCode>,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            status: None,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    // Common error constructors
    pub fn network(message: &'static str) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn validation(message: &'static str) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    /// Traduce una risposta non-2xx del backend nel tipo di errore corrispondente
    pub fn from_status(status: StatusCode, body: Option<ErrorResponse>) -> Self {
        let error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::unauthorized("Session missing or expired")
            }
            StatusCode::BAD_REQUEST
            | StatusCode::NOT_FOUND
            | StatusCode::CONFLICT
            | StatusCode::UNPROCESSABLE_ENTITY => Self::validation("Request rejected by server"),
            _ => Self::network("Server unavailable"),
        }
        .with_status(status);

        match body {
            Some(ErrorResponse {
                error: msg,
                details: Some(details),
            }) => error.with_details(format!("{}: {}", msg, details)),
            Some(ErrorResponse { error: msg, .. }) => error.with_details(msg),
            None => error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out"
        } else if err.is_decode() {
            "Invalid response from server"
        } else {
            "Network error"
        };
        Self::network(message).with_details(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation("Validation error").with_details(err.to_string())
    }
}
