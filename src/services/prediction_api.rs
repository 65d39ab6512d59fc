use std::env;
use std::fs;
use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::ReservationInput;
use crate::services::prediction_service::{PredictionError, PredictionService};

pub const DEFAULT_PREDICT_PATH: &str = "/prediccion/cancelacion";
pub const BASE_URL_ENV: &str = "PREDICTION_API_URL";
pub const API_TOKEN_ENV: &str = "PREDICTION_API_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("no prediction service base_url configured (use --base-url, a config file or PREDICTION_API_URL)")]
    MissingBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PredictionApiConfig {
    pub base_url: String,
    pub predict_path: String,
}

impl Default for PredictionApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
        }
    }
}

impl PredictionApiConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(filepath).map_err(|source| ConfigError::Read {
            path: PathBuf::from(filepath),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(filepath),
            source,
        })
    }

    /// Combines the optional config file with the command line override and
    /// the environment fallback, in that order of precedence for `base_url`.
    pub fn resolve(
        config_path: Option<&str>,
        base_url: Option<String>,
        env_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        if let Some(url) = base_url {
            config.base_url = url;
        }
        if config.base_url.is_empty() {
            config.base_url = env_base_url.unwrap_or_default();
        }
        if config.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.predict_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthData {
    pub api_token: Option<String>,
}

impl AuthData {
    pub fn from_env() -> Self {
        Self {
            api_token: env::var(API_TOKEN_ENV).ok().filter(|token| !token.is_empty()),
        }
    }
}

/// HTTP client for the remote cancellation model. No timeout or retry is
/// applied; a hung request keeps the caller waiting.
pub struct PredictionApiClient {
    config: PredictionApiConfig,
    auth: AuthData,
    client: Client,
}

impl PredictionApiClient {
    pub fn new(config: PredictionApiConfig, auth: AuthData) -> Result<Self, ConfigError> {
        if config.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        Ok(Self {
            config,
            auth,
            client: Client::new(),
        })
    }

    async fn post_json(&self, url: &str, body: &ReservationInput) -> Result<Value, PredictionError> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = &self.auth.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| PredictionError::Connection(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(PredictionError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(PredictionError::NotFound);
        }
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| PredictionError::Parse)
    }
}

#[async_trait::async_trait(?Send)]
impl PredictionService for PredictionApiClient {
    async fn predict(&self, input: &ReservationInput) -> Result<PredictionResult, PredictionError> {
        let url = self.config.endpoint();
        debug!(%url, "requesting cancellation prediction");

        let payload = self.post_json(&url, input).await?;
        parse_prediction(payload)
    }
}

/// Accepts any JSON object; only a non-object body counts as malformed.
fn parse_prediction(payload: Value) -> Result<PredictionResult, PredictionError> {
    if !payload.is_object() {
        return Err(PredictionError::Parse);
    }
    serde_json::from_value(payload).map_err(|_| PredictionError::Parse)
}
