//! Blocks API types and bundle pricing results

use crate::utils::{u256_from_dec_or_hex, u256_from_dec_or_hex_default};
use alloy::primitives::{Address, TxHash, I256, U256};
use serde::{Deserialize, Serialize};

/// How a landed transaction reached the block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    /// Mined outside the relay by a miner running its own bundles
    Rogue,
    /// Delivered through the relay
    Flashbots,
}

/// One landed transaction as reported by the blocks API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionExecutionRecord {
    pub transaction_hash: TxHash,
    pub tx_index: u64,
    pub bundle_type: BundleType,
    pub bundle_index: u64,
    pub block_number: u64,
    pub eoa_address: Address,
    #[serde(default)]
    pub to_address: Option<Address>,
    pub gas_used: u64,
    #[serde(deserialize_with = "u256_from_dec_or_hex")]
    pub gas_price: U256,
    #[serde(default, deserialize_with = "u256_from_dec_or_hex_default")]
    pub coinbase_transfer: U256,
    #[serde(default, deserialize_with = "u256_from_dec_or_hex_default")]
    pub total_miner_reward: U256,
}

/// A block in the blocks API response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockDetails {
    pub block_number: u64,
    #[serde(default)]
    pub miner: Option<Address>,
    #[serde(default, deserialize_with = "u256_from_dec_or_hex_default")]
    pub miner_reward: U256,
    #[serde(default, deserialize_with = "u256_from_dec_or_hex_default")]
    pub coinbase_transfers: U256,
    pub gas_used: u64,
    #[serde(default, deserialize_with = "u256_from_dec_or_hex_default")]
    pub gas_price: U256,
    pub transactions: Vec<TransactionExecutionRecord>,
}

/// Response of `GET /v1/blocks?block_number=<n>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlocksApiResponse {
    pub latest_block_number: u64,
    pub blocks: Vec<BlockDetails>,
}

impl BlocksApiResponse {
    /// Transactions in any returned block whose hash is in `tx_hashes`
    pub fn transactions_matching<'a>(
        &'a self,
        tx_hashes: &'a [TxHash],
    ) -> impl Iterator<Item = &'a TransactionExecutionRecord> + 'a {
        self.blocks
            .iter()
            .flat_map(|block| block.transactions.iter())
            .filter(move |tx| tx_hashes.contains(&tx.transaction_hash))
    }
}

/// Bundle-level economics aggregated over landed transactions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BundlePricing {
    pub tx_count: usize,
    pub gas_used: U256,
    pub gas_fees_paid_by_searcher: U256,
    /// Negative when transactions paid less than the base fee
    pub priority_fees_received_by_miner: I256,
    pub eth_sent_to_coinbase: U256,
    pub effective_gas_price_to_searcher: U256,
    pub effective_priority_fee_to_miner: I256,
}
