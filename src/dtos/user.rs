//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use serde::{Deserialize, Serialize};

/// Badge mostrato accanto all'utente: vittorie e partecipazioni.
/// I contatori assenti valgono zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserBadgeDTO {
    pub wins: u32,
    pub participations: u32,
}

impl From<&User> for UserBadgeDTO {
    fn from(user: &User) -> Self {
        let badge = user.badge.clone().unwrap_or_default();
        Self {
            wins: badge.wins.unwrap_or(0),
            participations: badge.participations.unwrap_or(0),
        }
    }
}
