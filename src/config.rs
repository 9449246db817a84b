use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;
use crate::error::HasteError;
use crate::Result;

pub const DEFAULT_SERVER: &str = "https://hastebin.com";

/// Client settings merged from the config file, environment and flags.
///
/// Constructed once at startup and passed down by reference; nothing else in
/// the program holds configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HasteConfig {
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert_key: Option<PathBuf>,
}

impl Default for HasteConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            client_cert: None,
            client_cert_key: None,
        }
    }
}

impl HasteConfig {
    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(path).context("Error reading configuration file")?;
        let mut config: Self =
            serde_json::from_str(&contents).context("Error parsing configuration file")?;
        let server = config.server.clone();
        config.set_server(&server);

        Ok(config)
    }

    pub fn store_at(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).context("Error creating configuration directory")?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).context("Error writing configuration file")
    }

    /// Applies flag and environment values on top of the config file values.
    pub fn apply_overrides(&mut self, globals: &GlobalArgs) {
        if let Some(ref server) = globals.server {
            self.set_server(server);
        }

        if let Some(ref cert) = globals.client_cert {
            self.client_cert = Some(cert.clone());
        }

        if let Some(ref key) = globals.client_cert_key {
            self.client_cert_key = Some(key.clone());
        }
    }

    /// Trailing slashes are trimmed so paths can be appended with `/`.
    pub fn set_server(&mut self, server: &str) {
        self.server = server.trim().trim_end_matches('/').to_string();
    }

    /// Returns the certificate pair, or `None` when no certificate is
    /// configured.
    ///
    /// A certificate without its key (or the other way around) is an error,
    /// not a request without authentication.
    pub fn client_certificate(&self) -> Result<Option<(&Path, &Path)>, HasteError> {
        match (self.client_cert.as_deref(), self.client_cert_key.as_deref()) {
            (Some(cert), Some(key)) => Ok(Some((cert, key))),
            (None, None) => Ok(None),
            _ => Err(HasteError::Certificate {
                reason: "both a certificate and a certificate key must be configured".to_string(),
            }),
        }
    }
}
