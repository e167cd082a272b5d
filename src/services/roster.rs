//! Lista partecipanti di un hackathon.
//!
//! Tiene l'elenco ordinato per gruppo, i colori assegnati e l'insieme degli
//! inviti inviati in questa sessione, usato per mostrare subito il badge
//! "invitato" senza attendere un nuovo fetch.

use crate::core::{AppError, AppState};
use crate::entities::Attendant;
use crate::services::affordance::{Affordance, resolve_affordance};
use crate::services::colors::{Color, ColorPicker, assign_colors};
use crate::services::gateway;
use std::collections::HashSet;
use tracing::warn;

pub const EMPTY_ROSTER_MESSAGE: &str = "Ancora nessun iscritto";

pub struct AttendantRoster {
    attendants: Vec<Attendant>,
    current: Option<Attendant>,
    colors: Vec<Color>,
    invited: HashSet<String>,
}

impl AttendantRoster {
    /// Ordina i partecipanti per gruppo crescente (senza gruppo in fondo,
    /// ordinamento stabile) e assegna i colori.
    pub fn new<P: ColorPicker>(
        mut attendants: Vec<Attendant>,
        current: Option<Attendant>,
        picker: &mut P,
    ) -> Self {
        attendants.sort_by_key(|a| (a.group.is_none(), a.group));
        let colors = assign_colors(&attendants, picker);

        Self {
            attendants,
            current,
            colors,
            invited: HashSet::new(),
        }
    }

    pub fn attendants(&self) -> &[Attendant] {
        &self.attendants
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.attendants.is_empty()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_ROSTER_MESSAGE)
    }

    pub fn is_locally_invited(&self, attendant_id: &str) -> bool {
        self.invited.contains(attendant_id)
    }

    /// Senza partecipazione corrente (utente non iscritto) non c'è nessuna azione
    pub fn affordance_for(&self, other: &Attendant) -> Affordance {
        match &self.current {
            Some(current) => resolve_affordance(current, other, &self.invited),
            None => Affordance::None,
        }
    }

    pub fn group_label(attendant: &Attendant) -> String {
        match attendant.group {
            Some(group) => format!("Gruppo #{}", group),
            None => "Utente senza gruppo".to_string(),
        }
    }

    /// Invita `to_attendant_id` nel gruppo della partecipazione corrente.
    /// Parte solo se per quel partecipante la lista mostra un pulsante;
    /// l'id viene registrato localmente solo se il backend accetta il comando.
    pub async fn invite(&mut self, state: &AppState, to_attendant_id: &str) -> Result<(), AppError> {
        let Some(current) = &self.current else {
            warn!("Invite attempted without a current attendant");
            return Err(AppError::unauthorized("Not attending this hackathon"));
        };
        let from_attendant_id = current.attendant_id.clone();

        let Some(target) = self
            .attendants
            .iter()
            .find(|a| a.attendant_id == to_attendant_id)
        else {
            warn!("Invite attempted towards unknown attendant {}", to_attendant_id);
            return Err(AppError::validation("Unknown attendant"));
        };

        let affordance = self.affordance_for(target);
        if !affordance.is_action() {
            warn!(
                "Invite towards {} not allowed ({:?})",
                to_attendant_id, affordance
            );
            return Err(AppError::validation("Invite not allowed"));
        }

        gateway::send_invite(state, &from_attendant_id, to_attendant_id).await?;
        self.invited.insert(to_attendant_id.to_string());
        Ok(())
    }
}
