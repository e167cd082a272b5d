//! Application State - Stato del client per la sessione corrente
//!
//! Contiene i repository verso il backend e il segnale di refresh degli inviti.
//! Va creato al login (o in forma anonima); `logout` chiude la sessione.

use crate::core::{AppError, ApiClient, Config, Session};
use crate::repositories::{AttendantRepository, HackathonRepository, InvitationRepository};
use tokio::sync::watch;

pub struct AppState {
    /// Repository per gli hackathon
    pub hackathon: HackathonRepository,

    /// Repository per le partecipazioni
    pub attendant: AttendantRepository,

    /// Repository per i comandi sugli inviti
    pub invitation: InvitationRepository,

    /// Contatore di refresh: incrementato a ogni accept/decline riuscito,
    /// chi mostra il feed degli inviti si sottoscrive e ricarica
    pub refresh: watch::Sender<u64>,

    /// Client condiviso dai repository, porta con sé la sessione
    api: ApiClient,
}

impl AppState {
    /// Crea una nuova istanza di AppState condividendo lo stesso client HTTP
    /// tra tutti i repository.
    ///
    /// # Arguments
    /// * `config` - Configurazione del client
    /// * `session` - Sessione dell'utente loggato, `None` per un client anonimo
    pub fn new(config: &Config, session: Option<Session>) -> Result<Self, AppError> {
        let mut api = ApiClient::new(config)?;
        if let Some(session) = session {
            api = api.with_session(session);
        }
        let (refresh, _) = watch::channel(0);

        Ok(Self {
            hackathon: HackathonRepository::new(api.clone()),
            attendant: AttendantRepository::new(api.clone()),
            invitation: InvitationRepository::new(api.clone()),
            refresh,
            api,
        })
    }

    pub fn session(&self) -> Option<Session> {
        self.api.session()
    }

    /// Chiude la sessione per tutti i repository; le chiamate autenticate
    /// successive falliscono con un errore di autenticazione
    pub fn logout(&self) -> Option<Session> {
        self.api.logout()
    }

    pub fn subscribe_refresh(&self) -> watch::Receiver<u64> {
        self.refresh.subscribe()
    }
}
