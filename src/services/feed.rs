//! Feed degli inviti - notifiche mostrate nel drawer dell'header

use crate::dtos::InviteNotification;
use crate::entities::Attendant;

/// Appiattisce gli inviti ricevuti in tutte le partecipazioni e li ordina
/// dal più recente. A parità di data resta l'ordine di lettura.
pub fn project(attendants: &[Attendant]) -> Vec<InviteNotification> {
    let mut notifications: Vec<InviteNotification> = attendants
        .iter()
        .flat_map(|attendant| {
            attendant.invites.iter().map(move |invite| InviteNotification {
                invite_id: invite.invite_id.clone(),
                from: invite
                    .from
                    .username()
                    .unwrap_or_else(|| invite.from.attendant_id())
                    .to_string(),
                hackathon_id: attendant.hackathon.hackathon_id().to_string(),
                hackathon: attendant
                    .hackathon
                    .name()
                    .unwrap_or_else(|| attendant.hackathon.hackathon_id())
                    .to_string(),
                date: invite.date,
                status: invite.status,
            })
        })
        .collect();

    // sort_by è stabile
    notifications.sort_by(|a, b| b.date.cmp(&a.date));
    notifications
}

/// Numero di inviti ancora da gestire (badge sulla campanella)
pub fn pending_count(notifications: &[InviteNotification]) -> usize {
    notifications.iter().filter(|n| n.is_actionable()).count()
}
