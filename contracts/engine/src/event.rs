use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

pub(crate) fn initialized(e: &Env, debt_token: &Address, collateral_tokens: &Vec<Address>) {
    let topics = (Symbol::new(e, "initialize"), debt_token.clone());
    e.events().publish(topics, collateral_tokens.clone());
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, token: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), who.clone());
    e.events().publish(topics, (token.clone(), amount));
}

pub(crate) fn collateral_redeemed(
    e: &Env,
    from: &Address,
    to: &Address,
    token: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "collateral_redeemed"), from.clone(), to.clone());
    e.events().publish(topics, (token.clone(), amount));
}

pub(crate) fn mint(e: &Env, who: &Address, amount: i128) {
    let topics = (symbol_short!("mint"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn burn(e: &Env, on_behalf_of: &Address, payer: &Address, amount: i128) {
    let topics = (symbol_short!("burn"), on_behalf_of.clone(), payer.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn liquidation(
    e: &Env,
    who: &Address,
    liquidator: &Address,
    collateral_token: &Address,
    debt_covered: i128,
    collateral_seized: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), who.clone(), liquidator.clone());
    e.events().publish(
        topics,
        (collateral_token.clone(), debt_covered, collateral_seized),
    );
}
