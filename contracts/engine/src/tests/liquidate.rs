use crate::tests::sut::{init_engine, Sut, ONE_DOLLAR, ONE_TOKEN};
use crate::*;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{vec, IntoVal, Symbol};

/// Target with 10 tokens and 100 units of debt, liquidator with 20 tokens and 100 units of debt
fn fill_engine(env: &Env, sut: &Sut) -> (Address, Address) {
    let who = sut.open_position(env, 10 * ONE_TOKEN, 100 * ONE_TOKEN);
    let liquidator = sut.open_position(env, 20 * ONE_TOKEN, 100 * ONE_TOKEN);

    (who, liquidator)
}

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.set_price(&token_address, 18 * ONE_DOLLAR);
    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN));

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.engine.address.clone(),
            Symbol::new(&env, "liquidate"),
            (
                liquidator.clone(),
                token_address,
                who.clone(),
                100 * ONE_TOKEN
            )
                .into_val(&env)
        )),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_invalid_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);

    sut.set_price(&sut.token().address, 18 * ONE_DOLLAR);
    sut.engine
        .liquidate(&liquidator, &sut.token().address, &who, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_token_not_allowed() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);

    sut.set_price(&sut.token().address, 18 * ONE_DOLLAR);
    sut.engine.liquidate(
        &liquidator,
        &sut.debt_token.address,
        &who,
        &(100 * ONE_TOKEN),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #202)")]
fn should_fail_when_health_factor_ok() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);

    sut.engine.liquidate(
        &liquidator,
        &sut.token().address,
        &who,
        &(100 * ONE_TOKEN),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #202)")]
fn should_fail_when_no_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (_, liquidator) = fill_engine(&env, &sut);

    sut.engine.liquidate(
        &liquidator,
        &sut.token().address,
        &Address::generate(&env),
        &(100 * ONE_TOKEN),
    );
}

#[test]
fn should_liquidate_whole_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    assert_eq!(
        sut.engine.get_health_factor(&who),
        100 * FixedI128::ONE.into_inner()
    );

    sut.set_price(&token_address, 18 * ONE_DOLLAR);
    assert_eq!(sut.engine.get_health_factor(&who), 900_000_000);

    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN));

    // 100 / 18 tokens plus 10%
    let base = 55_555_555;
    let bonus = 5_555_555;

    assert_eq!(sut.engine.get_debt(&who), 0);
    assert_eq!(sut.engine.get_health_factor(&who), i128::MAX);
    assert_eq!(
        sut.engine.get_collateral_balance_of_user(&who, &token_address),
        10 * ONE_TOKEN - base - bonus
    );
    assert_eq!(sut.token().balance(&liquidator), base + bonus);
    assert_eq!(
        sut.token().balance(&sut.engine.address),
        30 * ONE_TOKEN - base - bonus
    );

    assert_eq!(sut.debt_token.balance(&liquidator), 0);
    assert_eq!(sut.debt_token.balance(&who), 100 * ONE_TOKEN);
    assert_eq!(sut.debt_token.total_supply(), 100 * ONE_TOKEN);
    assert_eq!(sut.engine.get_debt(&liquidator), 100 * ONE_TOKEN);
    assert_eq!(
        sut.engine
            .get_collateral_balance_of_user(&liquidator, &token_address),
        20 * ONE_TOKEN
    );
}

#[test]
fn should_liquidate_partially() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.set_price(&token_address, 18 * ONE_DOLLAR);
    let starting_health_factor = sut.engine.get_health_factor(&who);

    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(50 * ONE_TOKEN));

    let ending_health_factor = sut.engine.get_health_factor(&who);

    assert_eq!(sut.engine.get_debt(&who), 50 * ONE_TOKEN);
    assert_eq!(
        sut.engine.get_collateral_balance_of_user(&who, &token_address),
        10 * ONE_TOKEN - 27_777_777 - 2_777_777
    );
    assert!(ending_health_factor > starting_health_factor);
    assert_eq!(ending_health_factor, 1_250_000_028);
    assert_eq!(sut.debt_token.balance(&liquidator), 50 * ONE_TOKEN);
}

#[test]
fn should_fail_when_health_factor_not_improved() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    // collateral is worth the debt, the bonus makes the position worse
    sut.set_price(&token_address, 10 * ONE_DOLLAR);

    assert_eq!(
        sut.engine
            .try_liquidate(&liquidator, &token_address, &who, &(50 * ONE_TOKEN)),
        Err(Ok(Error::HealthFactorNotImproved))
    );
    assert_eq!(sut.engine.get_debt(&who), 100 * ONE_TOKEN);
    assert_eq!(
        sut.engine.get_collateral_balance_of_user(&who, &token_address),
        10 * ONE_TOKEN
    );
    assert_eq!(sut.debt_token.balance(&liquidator), 100 * ONE_TOKEN);
    assert_eq!(sut.token().balance(&liquidator), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #205)")]
fn should_fail_when_seizing_more_than_deposited() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.set_price(&token_address, 10 * ONE_DOLLAR);

    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #206)")]
fn should_fail_when_covering_more_than_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.debt_token.transfer(&who, &liquidator, &(100 * ONE_TOKEN));
    sut.set_price(&token_address, 18 * ONE_DOLLAR);

    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(150 * ONE_TOKEN));
}

#[test]
fn should_fail_when_liquidator_lacks_debt_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.debt_token
        .transfer(&liquidator, &Address::generate(&env), &(60 * ONE_TOKEN));
    sut.set_price(&token_address, 18 * ONE_DOLLAR);

    assert_eq!(
        sut.engine
            .try_liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN)),
        Err(Ok(Error::TransferFailed))
    );
    assert_eq!(sut.engine.get_debt(&who), 100 * ONE_TOKEN);
    assert_eq!(sut.token().balance(&liquidator), 0);
}

#[test]
fn should_fail_when_liquidator_becomes_unhealthy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let who = sut.open_position(&env, 10 * ONE_TOKEN, 100 * ONE_TOKEN);
    let liquidator = sut.open_position(&env, 10 * ONE_TOKEN, 100 * ONE_TOKEN);
    let token_address = sut.token().address.clone();

    sut.set_price(&token_address, 18 * ONE_DOLLAR);

    assert_eq!(
        sut.engine
            .try_liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN)),
        Err(Ok(Error::HealthFactorBroken))
    );
    assert_eq!(sut.engine.get_debt(&who), 100 * ONE_TOKEN);
    assert_eq!(
        sut.engine.get_collateral_balance_of_user(&who, &token_address),
        10 * ONE_TOKEN
    );
}

#[test]
fn should_liquidate_with_debt_tokens_of_healthy_holder() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let who = sut.open_position(&env, 10 * ONE_TOKEN, 100 * ONE_TOKEN);
    let minter = sut.open_position(&env, 20 * ONE_TOKEN, 100 * ONE_TOKEN);
    let liquidator = Address::generate(&env);
    let token_address = sut.token().address.clone();

    sut.debt_token
        .transfer(&minter, &liquidator, &(100 * ONE_TOKEN));
    sut.set_price(&token_address, 18 * ONE_DOLLAR);

    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN));

    assert_eq!(sut.engine.get_debt(&who), 0);
    assert_eq!(sut.token().balance(&liquidator), 61_111_110);
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_engine(&env);
    let (who, liquidator) = fill_engine(&env, &sut);
    let token_address = sut.token().address.clone();

    sut.set_price(&token_address, 18 * ONE_DOLLAR);
    sut.engine
        .liquidate(&liquidator, &token_address, &who, &(100 * ONE_TOKEN));

    let event = env
        .events()
        .all()
        .iter()
        .filter(|event| event.0 == sut.engine.address)
        .last()
        .unwrap();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.engine.address.clone(),
                (
                    Symbol::new(&env, "liquidation"),
                    who.clone(),
                    liquidator.clone()
                )
                    .into_val(&env),
                (token_address, 100 * ONE_TOKEN, 61_111_110_i128).into_val(&env)
            ),
        ]
    );
}
