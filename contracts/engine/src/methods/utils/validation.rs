use engine_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, Vec};

use crate::storage::{has_collateral_config, has_config};

pub fn require_not_initialized(env: &Env) {
    if has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_same_length(env: &Env, tokens: &Vec<Address>, feeds: &Vec<Address>) {
    assert_with_error!(
        env,
        tokens.len() == feeds.len(),
        Error::MismatchedConfigLength
    );
}

pub fn require_not_empty(env: &Env, tokens: &Vec<Address>) {
    assert_with_error!(env, !tokens.is_empty(), Error::EmptyCollateralTokens);
}

pub fn require_unregistered_token(env: &Env, token: &Address) {
    assert_with_error!(
        env,
        !has_collateral_config(env, token),
        Error::DuplicateCollateralToken
    );
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_allowed_token(env: &Env, token: &Address) {
    assert_with_error!(
        env,
        has_collateral_config(env, token),
        Error::NotAllowedToken
    );
}

pub fn require_enough_collateral(env: &Env, balance: i128, amount: i128) {
    assert_with_error!(env, amount <= balance, Error::InsufficientCollateral);
}

pub fn require_debt(env: &Env, debt: i128) {
    assert_with_error!(env, debt > 0, Error::NoDebtToBurn);
}

pub fn require_enough_debt(env: &Env, debt: i128, amount: i128) {
    assert_with_error!(env, amount <= debt, Error::InsufficientDebt);
}
