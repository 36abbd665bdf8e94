#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};

pub struct Spec;

/// Interface of the pegged debt unit.
/// Transferable like a SEP-41 token; supply changes only through the engine.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "DebtTokenClient")]
pub trait DebtTokenTrait {
    fn initialize(env: Env, engine: Address, decimal: u32, name: String, symbol: String);

    fn mint(env: Env, to: Address, amount: i128);

    fn allowance(env: Env, from: Address, spender: Address) -> i128;

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn burn(env: Env, from: Address, amount: i128);

    fn decimals(env: Env) -> u32;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn total_supply(env: Env) -> i128;

    fn engine(env: Env) -> Address;
}
