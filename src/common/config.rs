// src/common/config.rs
//! Client configuration loaded from the environment

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How credentials are sent to the login endpoint.
///
/// The backend's token route reads an OAuth2 password form; some deployments
/// front it with a JSON login instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginContract {
    #[default]
    OAuth2Form,
    Json,
}

impl FromStr for LoginContract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "form" | "oauth2" | "oauth2-form" => Ok(LoginContract::OAuth2Form),
            "json" => Ok(LoginContract::Json),
            other => Err(format!("unknown login contract `{other}` (expected form or json)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub session_file: PathBuf,
    pub login_contract: LoginContract,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
            login_contract: LoginContract::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = env::var("RECRUIT_API_URL").unwrap_or(defaults.api_url);

        let session_file = env::var("RECRUIT_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        let login_contract = match env::var("RECRUIT_LOGIN_CONTRACT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{}; falling back to form login", e);
                LoginContract::default()
            }),
            Err(_) => defaults.login_contract,
        };

        let timeout = env::var("RECRUIT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            session_file,
            login_contract,
            timeout,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_login_contract(mut self, contract: LoginContract) -> Self {
        self.login_contract = contract;
        self
    }
}

/// `<config dir>/recruit/storage.json`, or the working directory when the
/// platform has no config directory.
pub fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("recruit"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storage.json")
}
