use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use merchstand_types::{Currency, Product};
use serde::Deserialize;
use thiserror::Error;

use crate::default_catalog;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "MERCHSTAND_CONFIG";

/// Environment variable carrying the challenge provider secret.
///
/// The settings file is never consulted for this value; a secret in a
/// checked-in TOML file is exactly the leak this layout exists to prevent.
pub const CHALLENGE_SECRET_ENV: &str = "MERCHSTAND_CHALLENGE_SECRET";

/// Environment override for the checkout publishable key.
pub const CHECKOUT_PUBLIC_KEY_ENV: &str = "MERCHSTAND_CHECKOUT_PUBLIC_KEY";

const DEFAULT_CONFIG_FILE: &str = "merchstand.toml";

/// Storefront settings, deserialized from TOML.
///
/// Every field is optional; accessors fill in defaults so a missing file
/// yields a fully working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub relay: RelaySettings,

    #[serde(default)]
    pub challenge: ChallengeSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub server: ServerSettings,

    /// `[[catalog]]` entries. The built-in catalog applies when absent.
    pub catalog: Option<Vec<Product>>,
}

impl Settings {
    /// Hosted form relay used by both storefront forms.
    pub const DEFAULT_RELAY_ENDPOINT: &'static str = "https://formspree.io/f/mnnovalk";

    /// Challenge provider's server-side verification API.
    pub const DEFAULT_VERIFY_URL: &'static str =
        "https://www.google.com/recaptcha/api/siteverify";

    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:8787";

    /// Customer email attached to checkout requests when none is supplied.
    pub const DEFAULT_ORDER_EMAIL: &'static str = "orders@merchstand.example";

    /// Loads settings from the path in `MERCHSTAND_CONFIG`, falling back to
    /// `merchstand.toml` in the working directory.
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Loads settings from a specific file. A missing file yields defaults;
    /// an unreadable or unparsable file is an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = toml::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        tracing::info!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }

    /// The product catalog for this deployment.
    #[must_use]
    pub fn catalog(&self) -> Vec<Product> {
        match &self.catalog {
            Some(entries) if !entries.is_empty() => entries.clone(),
            _ => default_catalog(),
        }
    }
}

/// `[relay]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelaySettings {
    /// Hosted form relay endpoint.
    pub endpoint: Option<String>,
}

impl RelaySettings {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(Settings::DEFAULT_RELAY_ENDPOINT)
    }
}

/// `[challenge]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChallengeSettings {
    /// Verification API of the challenge provider.
    pub verify_url: Option<String>,

    /// Public widget key rendered into the storefront.
    pub site_key: Option<String>,
}

impl ChallengeSettings {
    #[must_use]
    pub fn verify_url(&self) -> &str {
        self.verify_url
            .as_deref()
            .unwrap_or(Settings::DEFAULT_VERIFY_URL)
    }

    #[must_use]
    pub fn site_key(&self) -> Option<&str> {
        self.site_key.as_deref()
    }

    /// The provider secret, environment-only.
    ///
    /// `None` is not a configuration error here: the re-verification
    /// endpoint turns a missing secret into a 500 at call time, matching
    /// how the deployed function behaves.
    #[must_use]
    pub fn secret(&self) -> Option<String> {
        non_empty(std::env::var(CHALLENGE_SECRET_ENV).ok())
    }
}

/// `[checkout]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutSettings {
    /// Publishable key for the payment provider. The
    /// `MERCHSTAND_CHECKOUT_PUBLIC_KEY` environment variable wins over the
    /// file value.
    pub public_key: Option<String>,

    /// Currency code for checkout requests.
    pub currency: Option<String>,

    /// Customer email attached to checkout requests.
    pub order_email: Option<String>,
}

impl CheckoutSettings {
    #[must_use]
    pub fn public_key(&self) -> Option<String> {
        non_empty(std::env::var(CHECKOUT_PUBLIC_KEY_ENV).ok())
            .or_else(|| non_empty(self.public_key.clone()))
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
            .as_deref()
            .map(Currency::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn order_email(&self) -> &str {
        self.order_email
            .as_deref()
            .unwrap_or(Settings::DEFAULT_ORDER_EMAIL)
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSettings {
    /// Listen address for the re-verification endpoint.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr
            .as_deref()
            .unwrap_or(Settings::DEFAULT_BIND_ADDR)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Treats unset and whitespace-only values the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
