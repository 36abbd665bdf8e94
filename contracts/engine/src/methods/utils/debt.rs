use debt_token_interface::DebtTokenClient;
use engine_interface::types::engine_config::EngineConfig;
use engine_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{read_debt, write_debt};

use super::validation::{require_debt, require_enough_debt, require_positive_amount};

/// Records `amount` of new debt for `who` and mints the debt units to them.
/// Solvency is checked by the caller afterwards.
pub fn mint_debt(
    env: &Env,
    config: &EngineConfig,
    who: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_positive_amount(env, amount);

    let debt_after = read_debt(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_debt(env, who, debt_after)?;

    match DebtTokenClient::new(env, &config.debt_token).try_mint(who, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "debt mint failed", who.clone(), amount);
            return Err(Error::MintFailed);
        }
    }

    event::mint(env, who, amount);

    Ok(())
}

/// Pulls `amount` debt units from `payer`, burns them and reduces the debt of `on_behalf_of`
pub fn burn_debt(
    env: &Env,
    config: &EngineConfig,
    amount: i128,
    on_behalf_of: &Address,
    payer: &Address,
) -> Result<(), Error> {
    require_positive_amount(env, amount);

    let debt = read_debt(env, on_behalf_of);
    require_debt(env, debt);
    require_enough_debt(env, debt, amount);

    write_debt(env, on_behalf_of, debt - amount)?;

    let debt_token = DebtTokenClient::new(env, &config.debt_token);
    let custody = env.current_contract_address();

    match debt_token.try_transfer(payer, &custody, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "debt transfer failed", payer.clone(), amount);
            return Err(Error::TransferFailed);
        }
    }

    match debt_token.try_burn(&custody, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "debt burn failed", amount);
            return Err(Error::BurnFailed);
        }
    }

    event::burn(env, on_behalf_of, payer, amount);

    Ok(())
}
