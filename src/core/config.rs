use dotenv::dotenv;
use std::env;
use tracing::info;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub app_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 10,
            app_env: "development".to_string(),
        }
    }
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err("Invalid API_BASE_URL: must start with http:// or https://".to_string());
        }

        let request_timeout_secs = parse_timeout(
            &env::var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()),
        )?;

        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            api_base_url,
            request_timeout_secs,
            app_env,
        })
    }

    /// Configurazione puntata su un backend specifico (usata dai test)
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Logga la configurazione
    pub fn print_info(&self) {
        info!("Client Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   API Base URL: {}", self.api_base_url);
        info!("   Request Timeout: {}s", self.request_timeout_secs);
    }
}

/// Il timeout deve essere un intero strettamente positivo
fn parse_timeout(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| "Invalid REQUEST_TIMEOUT_SECS: must be a positive number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("10"), Ok(10));
        assert_eq!(parse_timeout(" 3 "), Ok(3));
        assert_eq!(
            parse_timeout("0"),
            Err("Invalid REQUEST_TIMEOUT_SECS: must be a positive number".to_string())
        );
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("dieci").is_err());
    }
}
