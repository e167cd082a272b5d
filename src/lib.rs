//! Client library - logica lato client dell'applicazione di gestione hackathon

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, ErrorKind, Session};
