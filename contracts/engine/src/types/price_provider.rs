use common::FixedI128;
use engine_interface::types::collateral_config::CollateralConfig;
use engine_interface::types::engine_config::EngineConfig;
use engine_interface::types::error::Error;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{log, Address, Env, Map};

use crate::storage::read_collateral_config;

/// Converts collateral amounts to debt units and back.
///
/// Prices are fetched from the token's feed on first use and kept only for
/// the lifetime of the provider, i.e. one contract call.
pub struct PriceProvider<'a> {
    env: &'a Env,
    debt_decimals: u32,
    price_timeout: u64,
    prices: Map<Address, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env, config: &EngineConfig) -> Self {
        Self {
            env,
            debt_decimals: config.debt_decimals,
            price_timeout: config.price_timeout,
            prices: Map::new(env),
        }
    }

    /// Value of `amount` of `token` expressed in debt units, rounded down
    pub fn value_of(&mut self, token: &Address, amount: i128) -> Result<i128, Error> {
        let config = self.config(token)?;
        let price = self.price(token, &config)?;

        price
            .mul_int(amount)
            .and_then(|a| FixedI128::from_rational(a, 10i128.checked_pow(config.asset_decimals)?))
            .and_then(|a| a.to_precision(self.debt_decimals))
            .ok_or(Error::MathOverflowError)
    }

    /// Amount of `token` worth `value` debt units, rounded down
    pub fn token_amount_for(&mut self, token: &Address, value: i128) -> Result<i128, Error> {
        let config = self.config(token)?;
        let price = self.price(token, &config)?;

        price
            .recip_mul_int(value)
            .and_then(|a| FixedI128::from_rational(a, 10i128.checked_pow(self.debt_decimals)?))
            .and_then(|a| a.to_precision(config.asset_decimals))
            .ok_or(Error::MathOverflowError)
    }

    fn config(&self, token: &Address) -> Result<CollateralConfig, Error> {
        read_collateral_config(self.env, token).ok_or(Error::PriceUnavailable)
    }

    /// Feed price up-scaled to `FixedI128` precision
    fn price(&mut self, token: &Address, config: &CollateralConfig) -> Result<FixedI128, Error> {
        if let Some(price) = self.prices.get(token.clone()) {
            return Ok(FixedI128::from_inner(price));
        }

        let price_data = PriceFeedClient::new(self.env, &config.feed)
            .lastprice(&Asset::Stellar(token.clone()))
            .ok_or(Error::PriceUnavailable)?;

        if price_data.price <= 0 {
            log!(self.env, "invalid price", token.clone(), price_data.price);
            return Err(Error::InvalidAssetPrice);
        }

        if self.price_timeout > 0 {
            let age = self
                .env
                .ledger()
                .timestamp()
                .saturating_sub(price_data.timestamp);

            if age > self.price_timeout {
                log!(self.env, "stale price", token.clone(), age);
                return Err(Error::StalePrice);
            }
        }

        let price = 10i128
            .checked_pow(config.feed_decimals)
            .and_then(|denom| FixedI128::from_rational(price_data.price, denom))
            .ok_or(Error::InvalidAssetPrice)?;

        self.prices.set(token.clone(), price.into_inner());

        Ok(price)
    }
}
