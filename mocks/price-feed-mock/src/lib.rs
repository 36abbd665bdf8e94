#![deny(warnings)]
#![no_std]

mod constants;
mod storage;

use crate::storage::*;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(_env: Env) -> u32 {
        constants::DECIMALS
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_price(&env, &asset)
    }

    fn set_price(env: Env, asset: Asset, price: i128) {
        write_price(
            &env,
            &asset,
            &PriceData {
                price,
                timestamp: env.ledger().timestamp(),
            },
        );
    }
}
