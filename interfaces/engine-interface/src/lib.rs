#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::account_information::AccountInformation;
use types::engine_config::EngineConfig;
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface for the collateralized debt engine
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "EngineClient")]
pub trait EngineTrait {
    /// Registers the debt token and the collateral tokens with their price feeds.
    /// `collateral_tokens[i]` is priced by `price_feeds[i]`. Can be called once.
    fn initialize(
        env: Env,
        debt_token: Address,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        price_timeout: u64,
    ) -> Result<(), Error>;

    fn deposit_collateral(env: Env, who: Address, token: Address, amount: i128)
        -> Result<(), Error>;

    fn deposit_collateral_and_mint(
        env: Env,
        who: Address,
        token: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error>;

    fn redeem_collateral(env: Env, who: Address, token: Address, amount: i128)
        -> Result<(), Error>;

    fn redeem_collateral_for_debt(
        env: Env,
        who: Address,
        token: Address,
        collateral_amount: i128,
        debt_amount: i128,
    ) -> Result<(), Error>;

    fn mint(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn burn(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_token: Address,
        who: Address,
        debt_to_cover: i128,
    ) -> Result<(), Error>;

    fn get_account_information(env: Env, who: Address) -> Result<AccountInformation, Error>;

    fn get_account_collateral_value(env: Env, who: Address) -> Result<i128, Error>;

    fn get_usd_value(env: Env, token: Address, amount: i128) -> Result<i128, Error>;

    fn get_token_amount_from_usd(env: Env, token: Address, usd_amount: i128)
        -> Result<i128, Error>;

    fn get_health_factor(env: Env, who: Address) -> Result<i128, Error>;

    fn calculate_health_factor(env: Env, debt: i128, collateral_value: i128)
        -> Result<i128, Error>;

    fn get_collateral_tokens(env: Env) -> Vec<Address>;

    fn get_collateral_balance_of_user(env: Env, who: Address, token: Address) -> i128;

    fn get_debt(env: Env, who: Address) -> i128;

    fn get_collateral_token_price_feed(env: Env, token: Address) -> Option<Address>;

    fn get_debt_token(env: Env) -> Result<Address, Error>;

    fn config(env: Env) -> Result<EngineConfig, Error>;

    fn get_liquidation_threshold() -> u32;

    fn get_liquidation_bonus() -> u32;

    fn get_liquidation_precision() -> u32;

    fn get_min_health_factor() -> i128;

    fn get_precision() -> i128;
}
