use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollateralConfig {
    pub feed: Address,
    pub feed_decimals: u32,
    pub asset_decimals: u32,
}
