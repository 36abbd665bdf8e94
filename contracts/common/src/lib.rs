#![deny(warnings)]
#![no_std]

mod fixedi128;
#[cfg(test)]
mod test;

pub use fixedi128::*;

/// Percent representation, 1% - 1, 100% - 100
pub const LIQUIDATION_PRECISION: u32 = 100;

/// Share of the collateral value that counts towards the health factor.
/// 50% means a position has to be 200% over-collateralized.
pub const LIQUIDATION_THRESHOLD: u32 = 50;

/// Premium paid to the liquidator on top of the covered debt, in percent
pub const LIQUIDATION_BONUS: u32 = 10;

/// Health factor below which a position can be liquidated
pub const MIN_HEALTH_FACTOR: FixedI128 = FixedI128::ONE;
