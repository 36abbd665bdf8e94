use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Address, Env, Symbol};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    StellarPrice(Address),
    OtherPrice(Symbol),
}

fn data_key(asset: &Asset) -> DataKey {
    match asset {
        Asset::Stellar(asset) => DataKey::StellarPrice(asset.clone()),
        Asset::Other(asset) => DataKey::OtherPrice(asset.clone()),
    }
}

pub fn write_price(env: &Env, asset: &Asset, price: &PriceData) {
    env.storage().instance().set(&data_key(asset), price);
}

pub fn read_price(env: &Env, asset: &Asset) -> Option<PriceData> {
    env.storage().instance().get(&data_key(asset))
}
