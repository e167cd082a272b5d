//! Core Module - Componenti infrastrutturali del client
//!
//! Questo modulo contiene tutti i componenti "core" del client:
//! - Sessione utente
//! - Client HTTP
//! - Configurazione
//! - Gestione errori
//! - Logging
//! - Stato applicazione

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{Session, require_session};
pub use client::ApiClient;
pub use config::Config;
pub use error::{AppError, ErrorKind};
pub use state::AppState;
