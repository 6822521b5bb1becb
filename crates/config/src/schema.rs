//! Configuration schema definitions

use alloy::signers::local::PrivateKeySigner;
use pricing::{BaseFeeModel, BASE_FEE_MAX_CHANGE_DENOMINATOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use types::{
    ConfigError, RelayEndpoint, DEFAULT_BLOCKS_API_URL, DEFAULT_RELAY_URL, DEFAULT_USER_AGENT,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relay connection configuration
    #[serde(default)]
    pub relay: RelayConfig,
    /// Fee model configuration
    #[serde(default)]
    pub fees: FeeConfig,
    /// Request signing configuration
    #[serde(default)]
    pub signer: SignerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Relay connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Relay name used in logs
    #[serde(default = "default_relay_name")]
    pub name: String,
    /// JSON-RPC endpoint of the relay
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Public blocks API endpoint
    #[serde(default = "default_blocks_api_url")]
    pub blocks_api_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User agent for outgoing requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Fee model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Base fee max-change denominator of the chain
    #[serde(default = "default_max_change_denominator")]
    pub max_change_denominator: u64,
    /// Default projection window in blocks
    #[serde(default = "default_blocks_in_future")]
    pub blocks_in_future: u64,
}

/// Request signing configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Hex private key of the reputation (auth) signer
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_relay_name() -> String {
    "flashbots".to_string()
}

fn default_relay_url() -> String {
    DEFAULT_RELAY_URL.to_string()
}

fn default_blocks_api_url() -> String {
    DEFAULT_BLOCKS_API_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_change_denominator() -> u64 {
    BASE_FEE_MAX_CHANGE_DENOMINATOR
}

fn default_blocks_in_future() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Relay connection info for the relay client
    pub fn relay_endpoint(&self) -> RelayEndpoint {
        RelayEndpoint {
            name: self.relay.name.clone(),
            relay_url: self.relay.relay_url.clone(),
            blocks_api_url: self.relay.blocks_api_url.clone(),
            timeout_seconds: self.relay.timeout_seconds,
            user_agent: self.relay.user_agent.clone(),
        }
    }

    /// Base fee model for the configured chain
    pub fn base_fee_model(&self) -> types::Result<BaseFeeModel> {
        BaseFeeModel::new(self.fees.max_change_denominator)
    }
}

impl SignerConfig {
    /// Parse the configured auth key
    pub fn auth_signer(&self) -> Result<PrivateKeySigner, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "signer.private_key".to_string(),
            })?;

        PrivateKeySigner::from_str(key.trim()).map_err(|_| ConfigError::InvalidValue {
            field: "signer.private_key".to_string(),
            value: "<redacted>".to_string(),
        })
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: default_relay_name(),
            relay_url: default_relay_url(),
            blocks_api_url: default_blocks_api_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            max_change_denominator: default_max_change_denominator(),
            blocks_in_future: default_blocks_in_future(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
