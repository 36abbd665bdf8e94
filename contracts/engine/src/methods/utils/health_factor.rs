use common::{FixedI128, MIN_HEALTH_FACTOR};
use engine_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::storage::{read_collateral, read_collateral_tokens, read_debt};
use crate::types::account_data::AccountData;
use crate::types::price_provider::PriceProvider;

/// Sums the value of every approved collateral token held by `who`.
/// Tokens with zero balance are skipped, so an empty account never touches a feed.
pub fn calc_collateral_value(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let mut total_value: i128 = 0;

    for token in read_collateral_tokens(env) {
        let amount = read_collateral(env, who, &token);
        if amount == 0 {
            continue;
        }

        total_value = total_value
            .checked_add(price_provider.value_of(&token, amount)?)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(total_value)
}

pub fn calc_account_data(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<AccountData, Error> {
    Ok(AccountData {
        debt: read_debt(env, who),
        collateral_value: calc_collateral_value(env, who, price_provider)?,
    })
}

pub fn health_factor(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<FixedI128, Error> {
    calc_account_data(env, who, price_provider)?.health_factor()
}

pub fn require_healthy(
    env: &Env,
    who: &Address,
    price_provider: &mut PriceProvider,
) -> Result<(), Error> {
    let health_factor = health_factor(env, who, price_provider)?;

    if health_factor < MIN_HEALTH_FACTOR {
        log!(env, "health factor broken", who.clone(), health_factor.into_inner());
        return Err(Error::HealthFactorBroken);
    }

    Ok(())
}
