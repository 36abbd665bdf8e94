use common::{FixedI128, LIQUIDATION_BONUS, MIN_HEALTH_FACTOR};
use engine_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::read_config;
use crate::types::price_provider::PriceProvider;

use super::utils::collateral::withdraw_collateral;
use super::utils::debt::burn_debt;
use super::utils::health_factor::{health_factor, require_healthy};
use super::utils::lock::non_reentrant;
use super::utils::validation::{require_allowed_token, require_positive_amount};

pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    collateral_token: &Address,
    who: &Address,
    debt_to_cover: i128,
) -> Result<(), Error> {
    liquidator.require_auth();

    non_reentrant(env, || {
        require_positive_amount(env, debt_to_cover);
        require_allowed_token(env, collateral_token);

        let config = read_config(env)?;
        let mut price_provider = PriceProvider::new(env, &config);

        let starting_health_factor = health_factor(env, who, &mut price_provider)?;
        if starting_health_factor >= MIN_HEALTH_FACTOR {
            return Err(Error::HealthFactorOk);
        }

        let collateral_to_seize =
            seized_amount(&mut price_provider, collateral_token, debt_to_cover)?;

        withdraw_collateral(env, who, liquidator, collateral_token, collateral_to_seize)?;
        burn_debt(env, &config, debt_to_cover, who, liquidator)?;

        let ending_health_factor = health_factor(env, who, &mut price_provider)?;
        if ending_health_factor <= starting_health_factor {
            log!(
                env,
                "liquidation did not improve health factor",
                who.clone(),
                starting_health_factor.into_inner(),
                ending_health_factor.into_inner()
            );
            return Err(Error::HealthFactorNotImproved);
        }

        require_healthy(env, liquidator, &mut price_provider)?;

        event::liquidation(
            env,
            who,
            liquidator,
            collateral_token,
            debt_to_cover,
            collateral_to_seize,
        );

        Ok(())
    })
}

/// Collateral equivalent of `debt_to_cover` plus the liquidation bonus
fn seized_amount(
    price_provider: &mut PriceProvider,
    collateral_token: &Address,
    debt_to_cover: i128,
) -> Result<i128, Error> {
    let base = price_provider.token_amount_for(collateral_token, debt_to_cover)?;

    let bonus = FixedI128::from_percentage(LIQUIDATION_BONUS)
        .and_then(|bonus| bonus.mul_int(base))
        .ok_or(Error::MathOverflowError)?;

    base.checked_add(bonus).ok_or(Error::MathOverflowError)
}
