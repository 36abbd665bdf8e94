use engine_interface::types::collateral_config::CollateralConfig;
use engine_interface::types::engine_config::EngineConfig;
use engine_interface::types::error::Error;
use soroban_sdk::{assert_with_error, contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    CollateralTokens,
    CollateralConfig(Address),
    Collateral(Address, Address),
    Debt(Address),
    Entered,
}

pub fn has_config(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &EngineConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<EngineConfig, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn read_collateral_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::CollateralTokens)
        .unwrap_or(vec![env])
}

pub fn write_collateral_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::CollateralTokens, tokens);
}

pub fn read_collateral_config(env: &Env, token: &Address) -> Option<CollateralConfig> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::CollateralConfig(token.clone()))
}

pub fn has_collateral_config(env: &Env, token: &Address) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .has(&DataKey::CollateralConfig(token.clone()))
}

pub fn write_collateral_config(env: &Env, token: &Address, config: &CollateralConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::CollateralConfig(token.clone()), config);
}

pub fn read_collateral(env: &Env, who: &Address, token: &Address) -> i128 {
    let key = DataKey::Collateral(who.clone(), token.clone());
    let balance = env.storage().persistent().get(&key);

    if balance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0i128)
}

pub fn write_collateral(
    env: &Env,
    who: &Address,
    token: &Address,
    balance: i128,
) -> Result<(), Error> {
    assert_with_error!(env, !balance.is_negative(), Error::InsufficientCollateral);

    let key = DataKey::Collateral(who.clone(), token.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(())
}

pub fn read_debt(env: &Env, who: &Address) -> i128 {
    let key = DataKey::Debt(who.clone());
    let debt = env.storage().persistent().get(&key);

    if debt.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    debt.unwrap_or(0i128)
}

pub fn write_debt(env: &Env, who: &Address, debt: i128) -> Result<(), Error> {
    assert_with_error!(env, !debt.is_negative(), Error::InsufficientDebt);

    let key = DataKey::Debt(who.clone());
    env.storage().persistent().set(&key, &debt);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(())
}

pub fn is_entered(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::Entered)
}

pub fn write_entered(env: &Env) {
    env.storage().temporary().set(&DataKey::Entered, &true);
}

pub fn remove_entered(env: &Env) {
    env.storage().temporary().remove(&DataKey::Entered);
}
