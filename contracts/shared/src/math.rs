//! Fixed-point helpers for proportional dividend splits.
//!
//! All division truncates toward zero. Summing `proportional_amount` over every holder of a
//! distribution therefore never exceeds the deposit; the remainder stays in the pool.

use soroban_sdk::{Env, U256};

use crate::errors::Error;

/// `floor(a * b / divisor)` with the product held in 256 bits
fn mul_div(env: &Env, a: u128, b: u128, divisor: u128) -> Result<u128, Error> {
    if divisor == 0 {
        return Err(Error::DivisionByZero);
    }
    let quotient = U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, divisor));
    narrow(&quotient)
}

/// Narrow a 256-bit value back to `u128`, failing when the high half is set
fn narrow(value: &U256) -> Result<u128, Error> {
    let mut bytes = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut bytes);

    let (high, low) = bytes.split_at(16);
    if high.iter().any(|b| *b != 0) {
        return Err(Error::ArithmeticOverflow);
    }
    let mut low_bytes = [0u8; 16];
    low_bytes.copy_from_slice(low);
    Ok(u128::from_be_bytes(low_bytes))
}

/// `floor(quantity * rate / precision)`
pub fn proportional_amount(
    env: &Env,
    quantity: u128,
    rate: u128,
    precision: u128,
) -> Result<u128, Error> {
    mul_div(env, quantity, rate, precision)
}

/// `floor(deposit * precision / total_units)`
///
/// Callers must reject an empty pool before asking for a rate; a zero `total_units` is
/// reported as `DivisionByZero`.
pub fn rate_for_total(
    env: &Env,
    deposit: u128,
    total_units: u128,
    precision: u128,
) -> Result<u128, Error> {
    mul_div(env, deposit, precision, total_units)
}

/// Converts a token amount into the unsigned domain used by the helpers above.
pub fn to_unsigned(amount: i128) -> Result<u128, Error> {
    u128::try_from(amount).map_err(|_| Error::InvalidAmount)
}

/// Converts a helper result back into a token amount.
pub fn to_amount(value: u128) -> Result<i128, Error> {
    i128::try_from(value).map_err(|_| Error::ArithmeticOverflow)
}
