//! Relay-related types and structures

use crate::utils::{hex_block_number, u256_from_dec_or_hex};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Flashbots relay endpoint
pub const DEFAULT_RELAY_URL: &str = "https://relay.flashbots.net";

/// Public blocks index endpoint
pub const DEFAULT_BLOCKS_API_URL: &str = "https://blocks.flashbots.net/v1/blocks";

/// Header carrying `<address>:<signature>` on every authenticated request
pub const FLASHBOTS_SIGNATURE_HEADER: &str = "X-Flashbots-Signature";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("relay-kit/", env!("CARGO_PKG_VERSION"));

/// Connection info for a relay and its companion blocks API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayEndpoint {
    /// Name used in logs and errors
    pub name: String,
    /// JSON-RPC endpoint for signed requests
    pub relay_url: String,
    /// Public read-only blocks index
    pub blocks_api_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// `User-Agent` for relay and blocks API requests
    pub user_agent: String,
}

impl Default for RelayEndpoint {
    fn default() -> Self {
        Self {
            name: "flashbots".to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            blocks_api_url: DEFAULT_BLOCKS_API_URL.to_string(),
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// JSON-RPC methods the relay accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelayMethod {
    #[serde(rename = "eth_callBundle")]
    CallBundle,
    #[serde(rename = "eth_sendBundle")]
    SendBundle,
    #[serde(rename = "eth_sendPrivateTransaction")]
    SendPrivateTransaction,
    #[serde(rename = "eth_cancelPrivateTransaction")]
    CancelPrivateTransaction,
    #[serde(rename = "flashbots_getUserStats")]
    GetUserStats,
    #[serde(rename = "flashbots_getBundleStats")]
    GetBundleStats,
}

impl RelayMethod {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayMethod::CallBundle => "eth_callBundle",
            RelayMethod::SendBundle => "eth_sendBundle",
            RelayMethod::SendPrivateTransaction => "eth_sendPrivateTransaction",
            RelayMethod::CancelPrivateTransaction => "eth_cancelPrivateTransaction",
            RelayMethod::GetUserStats => "flashbots_getUserStats",
            RelayMethod::GetBundleStats => "flashbots_getBundleStats",
        }
    }
}

impl fmt::Display for RelayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-RPC request envelope sent as the relay request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayRequest {
    /// Method name
    pub method: RelayMethod,
    /// Request parameters
    pub params: serde_json::Value,
    /// Request ID, unique per client instance
    pub id: u64,
    /// JSON-RPC version
    pub jsonrpc: String,
}

impl RelayRequest {
    /// Create a new request envelope
    pub fn new(id: u64, method: RelayMethod, params: serde_json::Value) -> Self {
        Self {
            method,
            params,
            id,
            jsonrpc: "2.0".to_string(),
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    /// JSON-RPC version
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Request ID echoed back
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Successful result
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error object
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Relay error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Error code
    #[serde(default)]
    pub code: i64,
    /// Error message
    pub message: String,
    /// Additional error data
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Parameters for eth_callBundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBundleParams {
    /// Signed transactions
    pub txs: Vec<Bytes>,
    /// Block to simulate for (hex)
    pub block_number: String,
    /// State the simulation runs on top of: hex number or tag
    pub state_block_number: String,
    /// Simulated block timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl CallBundleParams {
    /// Simulate `txs` for `block_number` on top of the latest state
    pub fn new(txs: Vec<Bytes>, block_number: u64) -> Self {
        Self {
            txs,
            block_number: hex_block_number(block_number),
            state_block_number: "latest".to_string(),
            timestamp: None,
        }
    }
}

/// Result of eth_callBundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBundleResult {
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub bundle_gas_price: U256,
    pub bundle_hash: String,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub coinbase_diff: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub eth_sent_to_coinbase: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub gas_fees: U256,
    pub results: Vec<CallBundleTxResult>,
    pub state_block_number: u64,
    pub total_gas_used: u64,
}

impl CallBundleResult {
    /// First transaction that reverted or errored during simulation
    pub fn first_revert(&self) -> Option<&CallBundleTxResult> {
        self.results
            .iter()
            .find(|r| r.error.is_some() || r.revert.is_some())
    }
}

/// Per-transaction simulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBundleTxResult {
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub coinbase_diff: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub eth_sent_to_coinbase: U256,
    pub from_address: Address,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub gas_fees: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub gas_price: U256,
    pub gas_used: u64,
    #[serde(default)]
    pub to_address: Option<Address>,
    pub tx_hash: TxHash,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub revert: Option<String>,
}

/// Parameters for eth_sendBundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBundleParams {
    /// Array of signed transactions
    pub txs: Vec<Bytes>,
    /// Target block number (hex)
    pub block_number: String,
    /// Minimum timestamp for inclusion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<u64>,
    /// Maximum timestamp for inclusion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<u64>,
    /// Transactions allowed to revert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverting_tx_hashes: Option<Vec<TxHash>>,
}

impl SendBundleParams {
    /// Bundle targeting a single block
    pub fn new(txs: Vec<Bytes>, target_block: u64) -> Self {
        Self {
            txs,
            block_number: hex_block_number(target_block),
            min_timestamp: None,
            max_timestamp: None,
            reverting_tx_hashes: None,
        }
    }
}

/// Parameters for eth_sendPrivateTransaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateTransactionParams {
    /// Signed transaction
    pub tx: Bytes,
    /// Highest block the relay should keep trying (hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_block_number: Option<String>,
    /// Routing preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PrivateTransactionPreferences>,
}

/// Routing preferences for a private transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateTransactionPreferences {
    /// Send only through the fast path
    #[serde(default)]
    pub fast: bool,
}

/// Parameters for eth_cancelPrivateTransaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPrivateTransactionParams {
    pub tx_hash: TxHash,
}

/// Parameters for flashbots_getBundleStats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStatsParams {
    pub bundle_hash: String,
    pub block_number: String,
}

/// Searcher reputation reported by flashbots_getUserStats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub is_high_priority: bool,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub all_time_miner_payments: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub all_time_gas_simulated: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub last_7d_miner_payments: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub last_7d_gas_simulated: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub last_1d_miner_payments: U256,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub last_1d_gas_simulated: U256,
}

/// Bundle lifecycle reported by flashbots_getBundleStats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    pub is_simulated: bool,
    #[serde(default)]
    pub is_sent_to_miners: bool,
    #[serde(default)]
    pub is_high_priority: bool,
    #[serde(default)]
    pub simulated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sent_to_miners_at: Option<DateTime<Utc>>,
}
