use engine_interface::types::account_information::AccountInformation;
use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_config;
use crate::types::account_data::AccountData;
use crate::types::price_provider::PriceProvider;

use super::utils::health_factor::{calc_account_data, calc_collateral_value, health_factor};

pub fn account_information(env: &Env, who: &Address) -> Result<AccountInformation, Error> {
    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);

    Ok(calc_account_data(env, who, &mut price_provider)?.get_information())
}

pub fn account_collateral_value(env: &Env, who: &Address) -> Result<i128, Error> {
    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);

    calc_collateral_value(env, who, &mut price_provider)
}

pub fn account_health_factor(env: &Env, who: &Address) -> Result<i128, Error> {
    let config = read_config(env)?;
    let mut price_provider = PriceProvider::new(env, &config);

    Ok(health_factor(env, who, &mut price_provider)?.into_inner())
}

pub fn usd_value(env: &Env, token: &Address, amount: i128) -> Result<i128, Error> {
    let config = read_config(env)?;

    PriceProvider::new(env, &config).value_of(token, amount)
}

pub fn token_amount_from_usd(env: &Env, token: &Address, usd_amount: i128) -> Result<i128, Error> {
    let config = read_config(env)?;

    PriceProvider::new(env, &config).token_amount_for(token, usd_amount)
}

pub fn calculate_health_factor(debt: i128, collateral_value: i128) -> Result<i128, Error> {
    let account_data = AccountData {
        debt,
        collateral_value,
    };

    Ok(account_data.health_factor()?.into_inner())
}
