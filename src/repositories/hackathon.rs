//! HackathonRepository - Accesso alla risorsa /hackathons

use super::{Create, List};
use crate::core::{AppError, ApiClient};
use crate::dtos::{HackathonQuery, NewHackathonDTO};
use crate::entities::Hackathon;

pub struct HackathonRepository {
    api: ApiClient,
}

impl HackathonRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl List<Hackathon, HackathonQuery> for HackathonRepository {
    async fn list(&self, query: &HackathonQuery) -> Result<Vec<Hackathon>, AppError> {
        self.api.get("/hackathons", Some(query)).await
    }
}

impl Create<Hackathon, NewHackathonDTO> for HackathonRepository {
    async fn create(&self, data: &NewHackathonDTO) -> Result<Hackathon, AppError> {
        self.api.post("/hackathons", data).await
    }
}
