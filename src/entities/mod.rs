//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità restituite dal backend REST.
//! Tutti i riferimenti opzionali sono modellati esplicitamente con `Option`
//! o con enum che distinguono il semplice id dall'oggetto popolato.

pub mod attendant;
pub mod enums;
pub mod hackathon;
pub mod invitation;
pub mod user;

// Re-exports per facilitare l'import
pub use attendant::{Attendant, HackathonRef, HackathonSummary};
pub use enums::{HackathonStatus, InviteStatus, UserRole};
pub use hackathon::Hackathon;
pub use invitation::{Invite, SenderAttendant, SenderRef};
pub use user::{BadgeCounters, User, UserRef};

use serde::{Deserialize, Deserializer};

/// Tratta un `null` esplicito come il valore di default (es. lista vuota)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
