//! Realized gas pricing across the transactions of a landed bundle

use alloy::primitives::{I256, U256};
use types::{BundlePricing, PricingError, Result, TransactionExecutionRecord};

/// Aggregate bundle economics over `records` given the block's `base_fee`.
///
/// Order of `records` does not matter. Priority fees are not clamped: a
/// transaction priced below the base fee contributes a negative amount.
/// Effective prices are zero when no gas was used.
pub fn aggregate_bundle_pricing<'a, I>(records: I, base_fee: U256) -> Result<BundlePricing>
where
    I: IntoIterator<Item = &'a TransactionExecutionRecord>,
{
    let signed_base_fee = to_signed(base_fee)?;
    let mut pricing = BundlePricing::default();

    for record in records {
        let gas_used = U256::from(record.gas_used);
        let priority_fee = to_signed(record.gas_price)?
            .checked_sub(signed_base_fee)
            .ok_or(PricingError::CalculationOverflow)?;

        pricing.tx_count += 1;
        pricing.gas_used = checked_add(pricing.gas_used, gas_used)?;
        pricing.gas_fees_paid_by_searcher = record
            .gas_price
            .checked_mul(gas_used)
            .and_then(|fees| fees.checked_add(pricing.gas_fees_paid_by_searcher))
            .ok_or(PricingError::CalculationOverflow)?;
        pricing.priority_fees_received_by_miner = priority_fee
            .checked_mul(to_signed(gas_used)?)
            .and_then(|fees| fees.checked_add(pricing.priority_fees_received_by_miner))
            .ok_or(PricingError::CalculationOverflow)?;
        pricing.eth_sent_to_coinbase =
            checked_add(pricing.eth_sent_to_coinbase, record.coinbase_transfer)?;
    }

    if pricing.gas_used > U256::ZERO {
        pricing.effective_gas_price_to_searcher =
            checked_add(pricing.eth_sent_to_coinbase, pricing.gas_fees_paid_by_searcher)?
                / pricing.gas_used;
        pricing.effective_priority_fee_to_miner = to_signed(pricing.eth_sent_to_coinbase)?
            .checked_add(pricing.priority_fees_received_by_miner)
            .ok_or(PricingError::CalculationOverflow)?
            / to_signed(pricing.gas_used)?;
    }

    tracing::debug!(
        tx_count = pricing.tx_count,
        gas_used = %pricing.gas_used,
        effective_gas_price = %pricing.effective_gas_price_to_searcher,
        effective_priority_fee = %pricing.effective_priority_fee_to_miner,
        "Aggregated bundle pricing"
    );

    Ok(pricing)
}

fn checked_add(a: U256, b: U256) -> Result<U256> {
    Ok(a.checked_add(b).ok_or(PricingError::CalculationOverflow)?)
}

fn to_signed(value: U256) -> Result<I256> {
    Ok(I256::try_from(value).map_err(|_| PricingError::CalculationOverflow)?)
}
