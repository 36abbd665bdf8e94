use soroban_fixed_point_math::FixedPoint;

use crate::LIQUIDATION_PRECISION;

/// Fixed type with inner type of i128 and fixed denominator 10e9
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);
    pub const MAX: FixedI128 = FixedI128(i128::MAX);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        nom.into()
            .fixed_div_floor(denom.into(), Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Construct fixed value as percentage
    /// percentage expressed as 1% - 1, 100% - 100
    pub fn from_percentage<T: Into<i128>>(percentage: T) -> Option<FixedI128> {
        Self::from_rational(percentage, LIQUIDATION_PRECISION)
    }

    /// Converts fixed value into an int with `precision` decimals, rounding down
    pub fn to_precision(self, precision: u32) -> Option<i128> {
        let prec_denom = 10i128.checked_pow(precision)?;

        self.0
            .checked_mul(prec_denom)?
            .checked_div(Self::DENOMINATOR)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value
    pub fn mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0.fixed_mul_floor(other.into(), Self::DENOMINATOR)
    }

    /// Calculates division of non fixed int value and fixed value, e.g.  other / self.
    /// Result is int value
    pub fn recip_mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        other.into().fixed_div_floor(self.0, Self::DENOMINATOR)
    }
}
