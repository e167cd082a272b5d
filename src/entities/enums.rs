//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Client,
    Organization,
}

/// Stato di un invito. Le transizioni valide sono solo
/// pending -> accepted e pending -> declined.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Declined,
}

impl InviteStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, InviteStatus::Pending)
    }

    /// Verifica che la transizione da `self` a `next` sia ammessa
    pub fn can_transition_to(self, next: InviteStatus) -> bool {
        matches!(
            (self, next),
            (InviteStatus::Pending, InviteStatus::Accepted)
                | (InviteStatus::Pending, InviteStatus::Declined)
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Pending,
    Started,
    Finished,
}
