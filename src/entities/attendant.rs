//! Attendant entity - Partecipazione di un utente a un hackathon

use super::invitation::Invite;
use super::user::UserRef;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HackathonSummary {
    #[serde(rename = "_id")]
    pub hackathon_id: String,
    pub name: String,
}

/// Riferimento all'hackathon: id oppure oggetto popolato con il nome
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum HackathonRef {
    Id(String),
    Populated(HackathonSummary),
}

impl HackathonRef {
    pub fn hackathon_id(&self) -> &str {
        match self {
            HackathonRef::Id(id) => id,
            HackathonRef::Populated(h) => &h.hackathon_id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            HackathonRef::Id(_) => None,
            HackathonRef::Populated(h) => Some(&h.name),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attendant {
    #[serde(rename = "_id")]
    pub attendant_id: String,
    pub hackathon: HackathonRef,
    pub user: UserRef,
    #[serde(default)]
    pub group: Option<u32>, // None = utente senza gruppo
    #[serde(default, deserialize_with = "crate::entities::null_as_default")]
    pub invites: Vec<Invite>,
}

impl Attendant {
    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    /// Il primo invito (in ordine di lista) inviato da `sender_id`.
    /// Eventuali inviti successivi dallo stesso mittente vengono ignorati.
    pub fn invite_from(&self, sender_id: &str) -> Option<&Invite> {
        self.invites.iter().find(|invite| invite.is_from(sender_id))
    }
}
