//! InvitationRepository - Comandi sugli inviti di gruppo
//!
//! Tutte le operazioni richiedono una sessione: senza, falliscono con un
//! errore di autenticazione prima di inviare qualsiasi richiesta.

use crate::core::{AppError, ApiClient};
use crate::dtos::CreateInviteDTO;

pub struct InvitationRepository {
    api: ApiClient,
}

impl InvitationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, from_attendant_id: &str, data: &CreateInviteDTO) -> Result<(), AppError> {
        self.api
            .command(&format!("/attendants/{}/invites", from_attendant_id), Some(data))
            .await
    }

    pub async fn accept(&self, invite_id: &str) -> Result<(), AppError> {
        self.api
            .command::<()>(&format!("/invites/{}/accept", invite_id), None)
            .await
    }

    pub async fn decline(&self, invite_id: &str) -> Result<(), AppError> {
        self.api
            .command::<()>(&format!("/invites/{}/decline", invite_id), None)
            .await
    }
}
