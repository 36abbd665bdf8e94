use engine_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{is_entered, remove_entered, write_entered};

/// Runs `f` holding the engine-wide re-entrancy lock.
/// The lock is released whatever `f` returns; a nested call fails with `Error::Reentrancy`.
pub fn non_reentrant<T, F>(env: &Env, f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    if is_entered(env) {
        return Err(Error::Reentrancy);
    }

    write_entered(env);
    let result = f();
    remove_entered(env);

    result
}
