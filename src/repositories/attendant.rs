//! AttendantRepository - Partecipazioni di un utente

use crate::core::{AppError, ApiClient};
use crate::entities::Attendant;

pub struct AttendantRepository {
    api: ApiClient,
}

impl AttendantRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Tutte le partecipazioni dell'utente, con gli inviti ricevuti
    /// (mittente e hackathon popolati dal backend)
    pub async fn find_many_by_user_id(&self, user_id: &str) -> Result<Vec<Attendant>, AppError> {
        self.api
            .get::<_, ()>(&format!("/users/{}/attendants", user_id), None)
            .await
    }
}
