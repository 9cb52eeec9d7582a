//! Canonical unit ("AUSD") arithmetic.
//!
//! Every accepted stable coin is valued 1:1 with AUSD, an 18-decimal fixed
//! point unit. An amount of a coin with `d` decimals is worth
//! `amount * 10^(18 - d)` atto-AUSD. Coins with more than 18 decimals are not
//! supported.

use soroban_sdk::{Env, I256};

pub const AUSD_DECIMALS: u32 = 18;

/// One whole AUSD in atto.
pub const AUSD_UNIT: i128 = 1_000_000_000_000_000_000;

/// (threshold in whole units, bonus percent), highest first.
const BONUS_TIERS: [(i128, u32); 10] = [
    (9_000_000, 150),
    (8_000_000, 145),
    (7_000_000, 140),
    (6_000_000, 135),
    (5_000_000, 130),
    (4_000_000, 125),
    (3_000_000, 120),
    (2_000_000, 115),
    (1_000_000, 110),
    (500_000, 105),
];

const BASE_PERCENT: u32 = 100;

/// Multiplier turning an amount with `decimals` decimals into atto-AUSD.
pub fn scale_factor(decimals: u32) -> i128 {
    if decimals > AUSD_DECIMALS {
        panic!("unsupported decimals");
    }
    10i128.pow(AUSD_DECIMALS - decimals)
}

pub fn to_atto(amount: i128, decimals: u32) -> i128 {
    amount
        .checked_mul(scale_factor(decimals))
        .unwrap_or_else(|| panic!("arithmetic overflow"))
}

/// Inverse of [`to_atto`]. Refuses amounts the asset cannot represent
/// instead of rounding them away.
pub fn from_atto(atto: i128, decimals: u32) -> i128 {
    let scale = scale_factor(decimals);
    if atto % scale != 0 {
        panic!("amount below asset precision");
    }
    atto / scale
}

/// Bonus percent for a contribution of `amount`, where `unit` is the size of
/// one whole unit in the same denomination (1 for whole units, [`AUSD_UNIT`]
/// for atto).
///
/// The tier is picked by the full amount and applies to all of it.
pub fn bonus_percent(amount: i128, unit: i128) -> u32 {
    for (threshold, percent) in BONUS_TIERS.iter() {
        let scaled = threshold
            .checked_mul(unit)
            .unwrap_or_else(|| panic!("arithmetic overflow"));
        if amount >= scaled {
            return *percent;
        }
    }
    BASE_PERCENT
}

/// Tokens issued for `amount`: `amount * tokens_per_unit * bonus`, rounded
/// down.
pub fn calculate_tokens(amount: i128, tokens_per_unit: i128, unit: i128) -> i128 {
    if amount < 0 || tokens_per_unit < 0 {
        panic!("invalid amount");
    }
    let percent = bonus_percent(amount, unit) as i128;
    amount
        .checked_mul(tokens_per_unit)
        .and_then(|v| v.checked_mul(percent))
        .map(|v| v / BASE_PERCENT as i128)
        .unwrap_or_else(|| panic!("arithmetic overflow"))
}

/// `a * b / c` rounded down, with the product held in 256 bits so 18-decimal
/// amounts cannot overflow before the division.
pub fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> i128 {
    if c == 0 {
        panic!("division by zero");
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
        .unwrap_or_else(|| panic!("arithmetic overflow"))
}
