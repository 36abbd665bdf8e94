use engine_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use super::utils::collateral::deposit_collateral as do_deposit;
use super::utils::lock::non_reentrant;

pub fn deposit_collateral(
    env: &Env,
    who: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    non_reentrant(env, || do_deposit(env, who, token, amount))
}
