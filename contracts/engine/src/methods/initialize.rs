use debt_token_interface::DebtTokenClient;
use engine_interface::types::collateral_config::CollateralConfig;
use engine_interface::types::engine_config::EngineConfig;
use engine_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{token, Address, Env, Vec};

use crate::event;
use crate::storage::{write_collateral_config, write_collateral_tokens, write_config};

use super::utils::validation::{
    require_not_empty, require_not_initialized, require_same_length, require_unregistered_token,
};

pub fn initialize(
    env: &Env,
    debt_token: &Address,
    collateral_tokens: &Vec<Address>,
    price_feeds: &Vec<Address>,
    price_timeout: u64,
) -> Result<(), Error> {
    require_not_initialized(env);
    require_same_length(env, collateral_tokens, price_feeds);
    require_not_empty(env, collateral_tokens);

    for (token, feed) in collateral_tokens.iter().zip(price_feeds.iter()) {
        require_unregistered_token(env, &token);

        let config = CollateralConfig {
            feed_decimals: PriceFeedClient::new(env, &feed).decimals(),
            asset_decimals: token::Client::new(env, &token).decimals(),
            feed,
        };

        write_collateral_config(env, &token, &config);
    }

    write_collateral_tokens(env, collateral_tokens);
    write_config(
        env,
        &EngineConfig {
            debt_token: debt_token.clone(),
            debt_decimals: DebtTokenClient::new(env, debt_token).decimals(),
            price_timeout,
        },
    );

    event::initialized(env, debt_token, collateral_tokens);

    Ok(())
}
