//! Client HTTP verso il backend REST.
//!
//! Wrapper sottile attorno a `reqwest::Client`: compone gli URL a partire
//! dalla base configurata, aggiunge l'header di autenticazione quando c'è una
//! sessione e traduce le risposte non-2xx in `AppError`.

use crate::core::auth::{Session, require_session};
use crate::core::config::Config;
use crate::core::error::{AppError, ErrorResponse};
use reqwest::{RequestBuilder, Response, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

/// Slot della sessione condiviso tra tutti i cloni del client
type SharedSession = Arc<Mutex<Option<Session>>>;

/// I cloni condividono lo stesso slot di sessione: un logout vale per tutti.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SharedSession,
}

impl ApiClient {
    /// Client anonimo, senza sessione
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session: Arc::new(Mutex::new(None)),
        })
    }

    /// Stesso client, autenticato con la sessione data
    pub fn with_session(self, session: Session) -> Self {
        *self.session_slot() = Some(session);
        self
    }

    fn session_slot(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session(&self) -> Option<Session> {
        self.session_slot().clone()
    }

    /// Chiude la sessione (per tutti i cloni) restituendola al chiamante
    pub fn logout(&self) -> Option<Session> {
        self.session_slot().take()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.session_slot().as_ref().map(Session::bearer);
        match bearer {
            Some(bearer) => request.header(AUTHORIZATION, bearer),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorResponse>().await.ok();
        warn!("Request failed with status {}", status);
        Err(AppError::from_status(status, body))
    }

    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("GET {}", url);
        let mut request = self.http.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        Ok(self.send(request).await?.json::<T>().await?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let request = self.http.post(url).json(body);
        Ok(self.send(request).await?.json::<T>().await?)
    }

    /// POST autenticata di un comando: la risposta non ha corpo utile
    pub async fn command<B>(&self, path: &str, body: Option<&B>) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        require_session(self.session_slot().as_ref())?;

        let url = self.url(path);
        debug!("POST {}", url);
        let mut request = self.http.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::User;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(&Config::with_base_url("http://localhost:5000/api/")).unwrap();
        assert_eq!(client.url("/hackathons"), "http://localhost:5000/api/hackathons");
        assert_eq!(client.url("invites/1/accept"), "http://localhost:5000/api/invites/1/accept");
    }

    #[test]
    fn test_logout_reaches_every_clone() {
        let user: User = serde_json::from_str(r#"{"_id":"u1","username":"alice"}"#).unwrap();
        let client = ApiClient::new(&Config::default())
            .unwrap()
            .with_session(Session::new(user, "tok"));
        let clone = client.clone();
        assert!(clone.session().is_some());

        let session = client.logout().expect("session should be present");
        assert_eq!(session.bearer(), "Bearer tok");
        assert!(clone.session().is_none());
        assert!(client.logout().is_none());
    }
}
