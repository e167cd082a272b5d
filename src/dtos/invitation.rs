//! Invitation DTOs - Data Transfer Objects per inviti

use crate::entities::InviteStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DTO per creare un nuovo invito: il mittente è nel path della richiesta
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateInviteDTO {
    pub to: String,
}

/// Notifica di invito mostrata nel drawer dell'header
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InviteNotification {
    pub invite_id: String,
    pub from: String, // username del mittente
    pub hackathon_id: String,
    pub hackathon: String, // nome dell'hackathon
    pub date: DateTime<Utc>,
    pub status: InviteStatus,
}

impl InviteNotification {
    /// Solo gli inviti pending mostrano i pulsanti accetta/rifiuta
    pub fn is_actionable(&self) -> bool {
        self.status == InviteStatus::Pending
    }

    pub fn status_tag(&self) -> Option<&'static str> {
        match self.status {
            InviteStatus::Pending => None,
            InviteStatus::Accepted => Some("ACCETTATO"),
            InviteStatus::Declined => Some("RIFIUTATO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(status: InviteStatus) -> InviteNotification {
        InviteNotification {
            invite_id: "i1".to_string(),
            from: "bob".to_string(),
            hackathon_id: "h1".to_string(),
            hackathon: "Rust Jam".to_string(),
            date: "2024-01-01T00:00:00Z".parse().unwrap(),
            status,
        }
    }

    #[test]
    fn test_status_tag() {
        let pending = notification(InviteStatus::Pending);
        assert_eq!(pending.status_tag(), None);
        assert!(pending.is_actionable());

        let accepted = notification(InviteStatus::Accepted);
        assert_eq!(accepted.status_tag(), Some("ACCETTATO"));
        assert!(!accepted.is_actionable());

        let declined = notification(InviteStatus::Declined);
        assert_eq!(declined.status_tag(), Some("RIFIUTATO"));
        assert!(!declined.is_actionable());
    }
}
