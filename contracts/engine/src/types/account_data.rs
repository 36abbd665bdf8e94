use common::{FixedI128, LIQUIDATION_THRESHOLD};
use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;

#[derive(Debug, Clone)]
pub struct AccountData {
    /// Minted debt units
    pub debt: i128,
    /// Collateral value expressed in debt units
    pub collateral_value: i128,
}

impl AccountData {
    /// Ratio of the threshold-adjusted collateral value to the debt.
    /// A position without debt can't be under-collateralized and reports `FixedI128::MAX`.
    pub fn health_factor(&self) -> Result<FixedI128, Error> {
        if self.debt == 0 {
            return Ok(FixedI128::MAX);
        }

        FixedI128::from_percentage(LIQUIDATION_THRESHOLD)
            .and_then(|threshold| threshold.mul_int(self.collateral_value))
            .and_then(|adjusted| FixedI128::from_rational(adjusted, self.debt))
            .ok_or(Error::MathOverflowError)
    }

    pub fn get_information(&self) -> AccountInformation {
        AccountInformation {
            debt: self.debt,
            collateral_value: self.collateral_value,
        }
    }
}
