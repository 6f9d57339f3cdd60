//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// Placeholder session token handed out by the mock login.
pub const DEFAULT_SESSION_TOKEN: &str = "mock_token_123";

/// Which datastore backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatastoreKind {
    /// Google Cloud Firestore (or its emulator)
    Firestore,
    /// Process-local store; contents are lost on restart
    Memory,
}

impl FromStr for DatastoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(DatastoreKind::Firestore),
            "memory" => Ok(DatastoreKind::Memory),
            other => Err(ConfigError::Invalid {
                name: "DATASTORE",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Datastore backend
    pub datastore: DatastoreKind,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Allow requests from any origin (mobile clients, Expo web previews)
    pub cors_allow_any_origin: bool,
    /// Token returned by login/register; not verified anywhere
    pub session_token: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            datastore: DatastoreKind::Memory,
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:8081".to_string(),
            cors_allow_any_origin: true,
            session_token: DEFAULT_SESSION_TOKEN.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let datastore = match env::var("DATASTORE") {
            Ok(value) => value.parse()?,
            Err(_) => DatastoreKind::Firestore,
        };

        let gcp_project_id = match (env::var("GCP_PROJECT_ID"), datastore) {
            (Ok(id), _) => id,
            (Err(_), DatastoreKind::Memory) => "local-dev".to_string(),
            (Err(_), DatastoreKind::Firestore) => {
                return Err(ConfigError::Missing("GCP_PROJECT_ID"))
            }
        };

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            datastore,
            gcp_project_id,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            cors_allow_any_origin: parse_var("CORS_ALLOW_ANY_ORIGIN", true)?,
            session_token: env::var("SESSION_TOKEN")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_SESSION_TOKEN.to_string()),
        })
    }
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
