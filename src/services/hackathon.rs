//! Hackathon services - lista e creazione, pass-through verso il backend

use crate::core::{AppError, AppState};
use crate::dtos::{HackathonQuery, NewHackathonDTO};
use crate::entities::Hackathon;
use crate::repositories::{Create, List};
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_hackathons(
    state: &AppState,
    filters: &HackathonQuery,
) -> Result<Vec<Hackathon>, AppError> {
    debug!("Listing hackathons");
    let hackathons = state.hackathon.list(filters).await?;
    info!("Found {} hackathons", hackathons.len());
    Ok(hackathons)
}

/// Valida il payload prima di inviarlo: se non è valido nessuna richiesta parte
#[instrument(skip(state, data), fields(name = %data.name))]
pub async fn create_hackathon(
    state: &AppState,
    data: &NewHackathonDTO,
) -> Result<Hackathon, AppError> {
    data.validate()?;

    let hackathon = state.hackathon.create(data).await?;
    info!("Hackathon created with id {}", hackathon.hackathon_id);
    Ok(hackathon)
}
