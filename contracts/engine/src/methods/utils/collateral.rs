use engine_interface::types::error::Error;
use soroban_sdk::{log, token, Address, Env};

use crate::event;
use crate::storage::{read_collateral, write_collateral};

use super::validation::{
    require_allowed_token, require_enough_collateral, require_positive_amount,
};

/// Credits `who` with `amount` of `token` and pulls the tokens into custody
pub fn deposit_collateral(
    env: &Env,
    who: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_positive_amount(env, amount);
    require_allowed_token(env, token);

    let balance_after = read_collateral(env, who, token)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_collateral(env, who, token, balance_after)?;
    event::collateral_deposited(env, who, token, amount);

    transfer(env, token, who, &env.current_contract_address(), amount)
}

/// Debits `from` by `amount` of `token` and sends the tokens to `to`.
/// Solvency of `from` is not checked here.
pub fn withdraw_collateral(
    env: &Env,
    from: &Address,
    to: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_positive_amount(env, amount);

    let balance = read_collateral(env, from, token);
    require_enough_collateral(env, balance, amount);

    write_collateral(env, from, token, balance - amount)?;
    event::collateral_redeemed(env, from, to, token, amount);

    transfer(env, token, &env.current_contract_address(), to, amount)
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "collateral transfer failed", token.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}
