use crate::app::keymap::KeyConfig;
use crate::domain::donation::OverLimitPolicy;
use crate::infrastructure::browser::HostedCheckout;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_ENV: &str = "SITEDECK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("donation.checkout_url must contain {}", HostedCheckout::SESSION_PLACEHOLDER)]
    MissingSessionPlaceholder,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub site: SiteConfig,
    pub donation: DonationConfig,
    pub verification: VerificationConfig,
    pub content: ContentConfig,
    pub keys: KeyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    pub contact_email: String,
    pub legal_name: String,
    pub ein: String,
    pub mailing_address: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://carbonplan.org".to_string(),
            contact_email: "hello@carbonplan.org".to_string(),
            legal_name: "carbonplan".to_string(),
            ein: "84-4378880".to_string(),
            mailing_address: vec![
                "2443 Fillmore St #380-6048".to_string(),
                "San Francisco, CA 94115".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Host shown in the header, e.g. `carbonplan.org`.
    #[must_use]
    pub fn host(&self) -> String {
        url::Url::parse(&self.base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| self.base_url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationConfig {
    pub api_base: String,
    pub checkout_url: String,
    pub over_limit_policy: OverLimitPolicy,
    pub request_timeout_secs: u64,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            api_base: "https://carbonplan.org".to_string(),
            checkout_url: "https://checkout.stripe.com/pay/{session_id}".to_string(),
            over_limit_policy: OverLimitPolicy::default(),
            request_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            command: "sitedeck-verify".to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub index_path: Option<PathBuf>,
}

impl Config {
    /// `$SITEDECK_CONFIG`, or `~/.config/sitedeck/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        home::home_dir().map(|mut path| {
            path.push(".config");
            path.push("sitedeck");
            path.push("config.toml");
            path
        })
    }

    /// Loads the user's config. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                warn!("could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("site.base_url", &self.site.base_url)?;
        check_url("donation.api_base", &self.donation.api_base)?;
        if !self
            .donation
            .checkout_url
            .contains(HostedCheckout::SESSION_PLACEHOLDER)
        {
            return Err(ConfigError::MissingSessionPlaceholder);
        }
        check_url(
            "donation.checkout_url",
            &self
                .donation
                .checkout_url
                .replace(HostedCheckout::SESSION_PLACEHOLDER, "session"),
        )
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
