use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_config;
use crate::types::price_provider::PriceProvider;

use super::utils::collateral::withdraw_collateral;
use super::utils::health_factor::require_healthy;
use super::utils::lock::non_reentrant;

pub fn redeem_collateral(
    env: &Env,
    who: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || {
        let config = read_config(env)?;

        withdraw_collateral(env, who, who, token, amount)?;

        let mut price_provider = PriceProvider::new(env, &config);
        require_healthy(env, who, &mut price_provider)
    })
}
