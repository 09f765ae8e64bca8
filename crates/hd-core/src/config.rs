use crate::error::{HdError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    pub server: ServerConfig,
    pub faq: FaqConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    pub path: PathBuf,
    /// Keep the first successfully parsed FAQ list instead of re-reading per lookup.
    pub cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/faq.json"),
            cache: false,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-3.5-turbo".into(),
            temperature: 0.7,
            timeout_secs: 60,
            api_key: None,
        }
    }
}

impl HelpdeskConfig {
    /// Read a JSON config file. Missing sections fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| HdError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("HELPDESK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HELPDESK_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| HdError::Config(format!("HELPDESK_PORT is not a port number: {port}")))?;
        }
        if let Some(path) = lookup("HELPDESK_FAQ_PATH") {
            self.faq.path = PathBuf::from(path);
        }
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.provider.model = model;
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.provider.base_url = url;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
