use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_config;
use crate::types::price_provider::PriceProvider;

use super::utils::collateral::withdraw_collateral;
use super::utils::debt::burn_debt;
use super::utils::health_factor::require_healthy;
use super::utils::lock::non_reentrant;

/// Burns `debt_amount` first so the redeemed collateral is checked against the reduced debt
pub fn redeem_collateral_for_debt(
    env: &Env,
    who: &Address,
    token: &Address,
    collateral_amount: i128,
    debt_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        let config = read_config(env)?;

        burn_debt(env, &config, debt_amount, who, who)?;
        withdraw_collateral(env, who, who, token, collateral_amount)?;

        let mut price_provider = PriceProvider::new(env, &config);
        require_healthy(env, who, &mut price_provider)
    })
}
