use std::str::FromStr;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to two decimals, halves rounded away from zero.
///
/// The value is taken through its shortest decimal representation first, so 12.345 becomes
/// 12.35 even though the closest f64 is slightly below it. Values that cannot be represented
/// as a decimal (non-finite or very large) are returned as is.
///
/// # Arguments
///
/// * 'value' - the value to round
pub fn round_two_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    match Decimal::from_str(&value.to_string()) {
        Ok(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or(value),
        Err(_) => value,
    }
}
