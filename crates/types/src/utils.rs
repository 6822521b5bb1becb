//! Utility functions and helpers

use alloy::primitives::U256;
use serde::{Deserialize, Deserializer};

/// Parse U256 from a decimal or `0x`-prefixed hex string
pub fn string_to_u256(s: &str) -> Result<U256, String> {
    s.trim()
        .parse()
        .map_err(|e| format!("Failed to parse U256 from {:?}: {}", s, e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WeiRepr {
    Text(String),
    Number(u64),
}

/// Deserialize a wei amount sent either as a string (decimal or hex) or a JSON number
pub fn u256_from_dec_or_hex<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match WeiRepr::deserialize(deserializer)? {
        WeiRepr::Text(s) => string_to_u256(&s).map_err(serde::de::Error::custom),
        WeiRepr::Number(n) => Ok(U256::from(n)),
    }
}

/// Like [`u256_from_dec_or_hex`], treating `null` as zero
pub fn u256_from_dec_or_hex_default<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WeiRepr>::deserialize(deserializer)? {
        Some(WeiRepr::Text(s)) => string_to_u256(&s).map_err(serde::de::Error::custom),
        Some(WeiRepr::Number(n)) => Ok(U256::from(n)),
        None => Ok(U256::ZERO),
    }
}

/// Quantity encoding used by the relay for block numbers
pub fn hex_block_number(block_number: u64) -> String {
    format!("0x{:x}", block_number)
}

/// Convert wei to gwei (as f64) for display
pub fn wei_to_gwei(wei: U256) -> f64 {
    if wei == U256::ZERO {
        return 0.0;
    }
    let wei_f64: f64 = wei.to_string().parse().unwrap_or(0.0);
    wei_f64 / 1e9
}

/// Sanitize string for logging (remove sensitive data)
pub fn sanitize_for_logging(s: &str) -> String {
    if s.len() <= 10 || !s.is_ascii() {
        return s.to_string();
    }

    // Show first 6 and last 4 characters for hashes/addresses
    if s.starts_with("0x") && s.len() > 20 {
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    } else {
        format!("{}...", &s[..10])
    }
}
