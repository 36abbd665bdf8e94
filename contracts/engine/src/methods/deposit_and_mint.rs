use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_config;
use crate::types::price_provider::PriceProvider;

use super::utils::collateral::deposit_collateral;
use super::utils::debt::mint_debt;
use super::utils::health_factor::require_healthy;
use super::utils::lock::non_reentrant;

pub fn deposit_collateral_and_mint(
    env: &Env,
    who: &Address,
    token: &Address,
    collateral_amount: i128,
    debt_amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        let config = read_config(env)?;

        deposit_collateral(env, who, token, collateral_amount)?;
        mint_debt(env, &config, who, debt_amount)?;

        let mut price_provider = PriceProvider::new(env, &config);
        require_healthy(env, who, &mut price_provider)
    })
}
