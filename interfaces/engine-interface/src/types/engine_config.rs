use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EngineConfig {
    pub debt_token: Address,
    pub debt_decimals: u32,
    /// Max age of a price in seconds, zero disables the check
    pub price_timeout: u64,
}
