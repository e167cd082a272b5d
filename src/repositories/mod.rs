//! Repositories module - Coordinatore per tutte le risorse REST
//!
//! Ogni repository incapsula le chiamate HTTP per una specifica risorsa del
//! backend. Non fanno retry né caching: ogni errore viene propagato al service.

pub mod attendant;
pub mod hackathon;
pub mod invitation;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, List};

pub use attendant::AttendantRepository;
pub use hackathon::HackathonRepository;
pub use invitation::InvitationRepository;
