//! Invitation entity - Entità invito

use super::enums::InviteStatus;
use super::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partecipante mittente, quando il backend lo restituisce già popolato
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SenderAttendant {
    #[serde(rename = "_id")]
    pub attendant_id: String,
    pub user: UserRef,
}

/// Riferimento (non proprietario) al partecipante che ha inviato l'invito.
/// A seconda dell'endpoint arriva come semplice id o come oggetto popolato.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SenderRef {
    Id(String),
    Populated(Box<SenderAttendant>),
}

impl SenderRef {
    pub fn attendant_id(&self) -> &str {
        match self {
            SenderRef::Id(id) => id,
            SenderRef::Populated(sender) => &sender.attendant_id,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            SenderRef::Id(_) => None,
            SenderRef::Populated(sender) => sender.user.username(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invite {
    #[serde(rename = "_id")]
    pub invite_id: String,
    pub from: SenderRef, // partecipante che invita
    pub date: DateTime<Utc>,
    pub status: InviteStatus,
}

impl Invite {
    pub fn is_from(&self, attendant_id: &str) -> bool {
        self.from.attendant_id() == attendant_id
    }
}
