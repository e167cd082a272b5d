//! Gateway dei comandi sugli inviti - invio, accettazione e rifiuto.
//!
//! Nessuno stato proprio: l'unico effetto collaterale è l'incremento del
//! contatore di refresh in `AppState` dopo un accept/decline riuscito.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateInviteDTO, InviteNotification};
use crate::entities::Attendant;
use crate::services::feed;
use tracing::{debug, info, instrument, warn};

/// Invia un invito. In caso di successo è il chiamante a registrare
/// `to_attendant_id` come invitato (il backend non restituisce lo stato).
#[instrument(skip(state))]
pub async fn send_invite(
    state: &AppState,
    from_attendant_id: &str,
    to_attendant_id: &str,
) -> Result<(), AppError> {
    debug!("Sending group invite");
    state
        .invitation
        .create(
            from_attendant_id,
            &CreateInviteDTO {
                to: to_attendant_id.to_string(),
            },
        )
        .await
        .inspect_err(|e| warn!("Invite failed: {}", e))?;

    info!("Invite sent");
    Ok(())
}

#[instrument(skip(state))]
pub async fn accept_invite(state: &AppState, invite_id: &str) -> Result<(), AppError> {
    debug!("Accepting invite");
    state
        .invitation
        .accept(invite_id)
        .await
        .inspect_err(|e| warn!("Accept failed: {}", e))?;

    bump_refresh(state);
    info!("Invite accepted");
    Ok(())
}

#[instrument(skip(state))]
pub async fn decline_invite(state: &AppState, invite_id: &str) -> Result<(), AppError> {
    debug!("Declining invite");
    state
        .invitation
        .decline(invite_id)
        .await
        .inspect_err(|e| warn!("Decline failed: {}", e))?;

    bump_refresh(state);
    info!("Invite declined");
    Ok(())
}

#[instrument(skip(state))]
pub async fn fetch_user_attendants(
    state: &AppState,
    user_id: &str,
) -> Result<Vec<Attendant>, AppError> {
    let attendants = state.attendant.find_many_by_user_id(user_id).await?;
    debug!("Fetched {} attendants", attendants.len());
    Ok(attendants)
}

/// Scarica le partecipazioni dell'utente e le proietta nel feed degli inviti
pub async fn fetch_invite_feed(
    state: &AppState,
    user_id: &str,
) -> Result<Vec<InviteNotification>, AppError> {
    let attendants = fetch_user_attendants(state, user_id).await?;
    Ok(feed::project(&attendants))
}

fn bump_refresh(state: &AppState) {
    state.refresh.send_modify(|counter| *counter += 1);
}
