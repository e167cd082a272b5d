//! Affordance degli inviti - cosa vede l'utente corrente accanto a ogni
//! altro partecipante della lista (badge o pulsante).

use crate::entities::{Attendant, InviteStatus};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    None,
    InvitedBadge,
    DeclinedBadge,
    AcceptedBadge,
    CreateGroupAction,
    InviteToGroupAction,
}

impl Affordance {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Affordance::None => None,
            Affordance::InvitedBadge => Some("INVITATO"),
            Affordance::DeclinedBadge => Some("NON ACCETTATO"),
            Affordance::AcceptedBadge => Some("ACCETTATO"),
            Affordance::CreateGroupAction => Some("Crea gruppo"),
            Affordance::InviteToGroupAction => Some("Invita nel tuo gruppo"),
        }
    }

    /// Solo le azioni diventano pulsanti che inviano un invito
    pub fn is_action(self) -> bool {
        matches!(
            self,
            Affordance::CreateGroupAction | Affordance::InviteToGroupAction
        )
    }
}

/// Calcola l'affordance di `other` vista da `current`.
///
/// `locally_invited` contiene gli id dei partecipanti invitati in questa
/// sessione e non ancora presenti negli inviti scaricati dal backend.
pub fn resolve_affordance(
    current: &Attendant,
    other: &Attendant,
    locally_invited: &HashSet<String>,
) -> Affordance {
    if other.user.user_id() == current.user.user_id() {
        return Affordance::None;
    }

    let invite = other.invite_from(&current.attendant_id);
    let already_invited = invite.is_some() || locally_invited.contains(&other.attendant_id);

    if already_invited {
        match invite.map(|i| i.status) {
            None | Some(InviteStatus::Pending) => return Affordance::InvitedBadge,
            Some(InviteStatus::Declined) => return Affordance::DeclinedBadge,
            Some(InviteStatus::Accepted) => return Affordance::AcceptedBadge,
        }
    }

    match (current.is_grouped(), other.is_grouped()) {
        (false, false) => Affordance::CreateGroupAction,
        (true, false) => Affordance::InviteToGroupAction,
        _ => Affordance::None,
    }
}
