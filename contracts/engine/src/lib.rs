#![deny(warnings)]
#![no_std]

use common::{
    FixedI128, LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD,
    MIN_HEALTH_FACTOR,
};
use engine_interface::types::{
    account_information::AccountInformation, engine_config::EngineConfig, error::Error,
};
use engine_interface::EngineTrait;
use methods::{
    account_information::{
        account_collateral_value, account_health_factor, account_information,
        calculate_health_factor, token_amount_from_usd, usd_value,
    },
    burn::burn,
    deposit::deposit_collateral,
    deposit_and_mint::deposit_collateral_and_mint,
    initialize::initialize,
    liquidate::liquidate,
    mint::mint,
    redeem::redeem_collateral,
    redeem_for_debt::redeem_collateral_for_debt,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct CollateralEngine;

#[contractimpl]
impl EngineTrait for CollateralEngine {
    fn initialize(
        env: Env,
        debt_token: Address,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        price_timeout: u64,
    ) -> Result<(), Error> {
        initialize(
            &env,
            &debt_token,
            &collateral_tokens,
            &price_feeds,
            price_timeout,
        )
    }

    fn deposit_collateral(
        env: Env,
        who: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        deposit_collateral(&env, &who, &token, amount)
    }

    fn deposit_collateral_and_mint(
        env: Env,
        who: Address,
        token: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error> {
        deposit_collateral_and_mint(&env, &who, &token, collateral_amount, debt_amount)
    }

    fn redeem_collateral(
        env: Env,
        who: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral(&env, &who, &token, amount)
    }

    fn redeem_collateral_for_debt(
        env: Env,
        who: Address,
        token: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error> {
        redeem_collateral_for_debt(&env, &who, &token, collateral_amount, debt_amount)
    }

    fn mint(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        mint(&env, &who, amount)
    }

    fn burn(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        burn(&env, &who, amount)
    }

    fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_token: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error> {
        liquidate(&env, &liquidator, &collateral_token, &who, debt_to_cover)
    }

    fn get_account_information(env: Env, who: Address) -> Result<AccountInformation, Error> {
        account_information(&env, &who)
    }

    fn get_account_collateral_value(env: Env, who: Address) -> Result<i128, Error> {
        account_collateral_value(&env, &who)
    }

    fn get_usd_value(env: Env, token: Address, amount: i128) -> Result<i128, Error> {
        usd_value(&env, &token, amount)
    }

    fn get_token_amount_from_usd(
        env: Env,
        token: Address,
        usd_amount: i128,
    ) -> Result<i128, Error> {
        token_amount_from_usd(&env, &token, usd_amount)
    }

    fn get_health_factor(env: Env, who: Address) -> Result<i128, Error> {
        account_health_factor(&env, &who)
    }

    fn calculate_health_factor(
        _env: Env,
        debt: i128,
        collateral_value: i128,
    ) -> Result<i128, Error> {
        calculate_health_factor(debt, collateral_value)
    }

    fn get_collateral_tokens(env: Env) -> Vec<Address> {
        read_collateral_tokens(&env)
    }

    fn get_collateral_balance_of_user(env: Env, who: Address, token: Address) -> i128 {
        read_collateral(&env, &who, &token)
    }

    fn get_debt(env: Env, who: Address) -> i128 {
        read_debt(&env, &who)
    }

    fn get_collateral_token_price_feed(env: Env, token: Address) -> Option<Address> {
        read_collateral_config(&env, &token).map(|config| config.feed)
    }

    fn get_debt_token(env: Env) -> Result<Address, Error> {
        Ok(read_config(&env)?.debt_token)
    }

    fn config(env: Env) -> Result<EngineConfig, Error> {
        read_config(&env)
    }

    fn get_liquidation_threshold() -> u32 {
        LIQUIDATION_THRESHOLD
    }

    fn get_liquidation_bonus() -> u32 {
        LIQUIDATION_BONUS
    }

    fn get_liquidation_precision() -> u32 {
        LIQUIDATION_PRECISION
    }

    fn get_min_health_factor() -> i128 {
        MIN_HEALTH_FACTOR.into_inner()
    }

    fn get_precision() -> i128 {
        FixedI128::ONE.into_inner()
    }
}
