use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::{env, process};
use tracing::error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    pub port: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory the collection blobs live under; one file per key.
    pub data_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthConfig {
    pub x_api_key: String,
}

/// One purchasable plan: the identifier sent in the payment event's
/// metadata, plus the allotments it grants. A missing allotment field means
/// unlimited.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlanConfig {
    pub id: String,
    #[serde(default)]
    pub posts: Option<i64>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub seats: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaymentsConfig {
    /// Shared secret for the webhook's HMAC signature.
    pub signing_secret: String,
    #[serde(default)]
    pub plans: Vec<PlanConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub debug: bool,
    pub http: HttpConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub payments: PaymentsConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();
        if args.len() < 2 {
            error!("❌ Error: Configuration path not provided. Usage: cargo run -- <config_path>");
            process::exit(1);
        }
        let config_path = &args[1];

        let config = Config::builder()
            .add_source(File::with_name(config_path))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn plan(&self, id: &str) -> Option<&PlanConfig> {
        self.payments.plans.iter().find(|p| p.id == id)
    }
}
