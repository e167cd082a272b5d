//! Query DTOs - Data Transfer Objects per filtri di ricerca

use crate::entities::HackathonStatus;
use serde::{Deserialize, Serialize};

/// Filtri (tutti opzionali) per la lista degli hackathon.
/// I campi a `None` non vengono inviati come query parameter.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct HackathonQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HackathonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
