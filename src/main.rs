//! Adaptive tutor engine
//!
//! Tracks play sessions from the mini-games and serves:
//! - knowledge gap analysis over recent sessions
//! - personalized hints and celebration messages
//! - next-game suggestions and the caregiver progress report
//! - per-game level progress

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};

use api::{router, AppState};
use storage::{health::check_storage, JsonFileStore, StorageConfig};
use telemetry::init_tracing_from_env;
use tutor_core::{rng_from_seed, SystemClock, TutorEngine};

/// Engine tuning.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TutorConfig {
    /// Fixed seed for hint and celebration picks
    #[serde(default)]
    rng_seed: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    storage: StorageConfig,

    #[serde(default)]
    tutor: TutorConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            storage: StorageConfig::default(),
            tutor: TutorConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting tutor engine v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let store = Arc::new(JsonFileStore::new(&config.storage));
    if !check_storage(&store) {
        warn!("State storage is not writable, progress will not be saved");
    }

    if config.tutor.rng_seed.is_some() {
        info!(seed = ?config.tutor.rng_seed, "Using seeded selection");
    }

    let engine = TutorEngine::load(
        store,
        Arc::new(SystemClock),
        rng_from_seed(config.tutor.rng_seed),
    )
    .with_context(|| format!("Failed to load state from {}", config.storage.path.display()))?;

    let app = router(AppState::new(engine));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Every transition is already on disk.
    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("TUTOR")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Flat names for the settings most often changed by hand
    if let Ok(path) = std::env::var("TUTOR_STORAGE_PATH") {
        config.storage.path = path.into();
    }
    if let Ok(seed) = std::env::var("TUTOR_RNG_SEED") {
        let seed = seed
            .trim()
            .parse()
            .with_context(|| format!("TUTOR_RNG_SEED is not a number: {}", seed))?;
        config.tutor.rng_seed = Some(seed);
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
