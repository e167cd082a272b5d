//! Hackathon entity - Entità hackathon

use super::enums::HackathonStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hackathon {
    #[serde(rename = "_id")]
    pub hackathon_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_group_components: u32,
    pub status: HackathonStatus,
}
