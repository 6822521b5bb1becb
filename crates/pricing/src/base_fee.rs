//! Base fee projection under the EIP-1559 adjustment rule

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use types::{PricingError, Result};

/// Maximum per-block base fee change is `1 / BASE_FEE_MAX_CHANGE_DENOMINATOR`
pub const BASE_FEE_MAX_CHANGE_DENOMINATOR: u64 = 8;

/// Upper bound on the base fee `blocks_in_future` blocks from now.
///
/// Applies `next = current * 1125 / 1000 + 1` once per block, which is the
/// fastest the base fee can grow. A bid at or above the result is guaranteed
/// to cover the base fee anywhere in the window.
pub fn project_base_fee(base_fee: U256, blocks_in_future: u64) -> Result<U256> {
    let numerator = U256::from(1125u64);
    let denominator = U256::from(1000u64);

    let mut projected = base_fee;
    for _ in 0..blocks_in_future {
        projected = projected
            .checked_mul(numerator)
            .map(|v| v / denominator)
            .and_then(|v| v.checked_add(U256::from(1u64)))
            .ok_or(PricingError::CalculationOverflow)?;
    }

    Ok(projected)
}

/// Next block base fee using the default max-change denominator
pub fn estimate_next_block_base_fee(
    current_base_fee_per_gas: U256,
    current_gas_used: u64,
    current_gas_limit: u64,
) -> Result<U256> {
    BaseFeeModel::default().estimate_next_block_base_fee(
        current_base_fee_per_gas,
        current_gas_used,
        current_gas_limit,
    )
}

/// Fee-adjustment parameters of the chain being modelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFeeModel {
    max_change_denominator: u64,
}

impl BaseFeeModel {
    /// Create a model with a custom max-change denominator
    pub fn new(max_change_denominator: u64) -> Result<Self> {
        if max_change_denominator == 0 {
            return Err(PricingError::InvalidParameters(
                "max change denominator cannot be zero".to_string(),
            )
            .into());
        }

        Ok(Self {
            max_change_denominator,
        })
    }

    /// Max-change denominator in use
    pub fn max_change_denominator(&self) -> u64 {
        self.max_change_denominator
    }

    /// Base fee implied for the next block when `current_gas_used` lands in
    /// a block with `current_gas_limit`.
    ///
    /// The gas target is half the gas limit. Usage above the target raises the
    /// fee proportionally, usage below lowers it, with every division
    /// truncating like the on-chain rule.
    pub fn estimate_next_block_base_fee(
        &self,
        current_base_fee_per_gas: U256,
        current_gas_used: u64,
        current_gas_limit: u64,
    ) -> Result<U256> {
        let target = current_gas_limit / 2;

        if current_gas_used == target {
            return Ok(current_base_fee_per_gas);
        }

        if target == 0 {
            return Err(PricingError::InvalidParameters(format!(
                "gas limit {} leaves no gas target",
                current_gas_limit
            ))
            .into());
        }

        let gas_delta = current_gas_used.abs_diff(target);
        let fee_delta = current_base_fee_per_gas
            .checked_mul(U256::from(gas_delta))
            .ok_or(PricingError::CalculationOverflow)?
            / U256::from(target)
            / U256::from(self.max_change_denominator);

        let next = if current_gas_used > target {
            current_base_fee_per_gas.checked_add(fee_delta)
        } else {
            current_base_fee_per_gas.checked_sub(fee_delta)
        };

        let next = next.ok_or(PricingError::CalculationOverflow)?;

        tracing::debug!(
            base_fee = %current_base_fee_per_gas,
            gas_used = current_gas_used,
            gas_target = target,
            next_base_fee = %next,
            "Estimated next block base fee"
        );

        Ok(next)
    }
}

impl Default for BaseFeeModel {
    fn default() -> Self {
        Self {
            max_change_denominator: BASE_FEE_MAX_CHANGE_DENOMINATOR,
        }
    }
}
