use soroban_sdk::contracttype;

/// Price of an asset in the feed's base asset and decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    /// Unix time in seconds the price was observed at
    pub timestamp: u64,
}
