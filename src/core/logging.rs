use tracing_subscriber::{EnvFilter, fmt};

/// Inizializza il subscriber di tracing. Il livello si controlla con RUST_LOG
/// (default: info). Chiamate successive alla prima non hanno effetto.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
