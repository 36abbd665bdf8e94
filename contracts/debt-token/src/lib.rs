#![deny(warnings)]
#![no_std]

use common_token::allowance::{read_allowance, spend_allowance, write_allowance};
use common_token::balance::{add_total_supply, receive_balance, spend_balance};
use common_token::storage::*;
use common_token::{require_nonnegative_amount, require_positive_amount, verify_caller_is_engine};
use debt_token_interface::DebtTokenTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

mod event;

#[contract]
pub struct DebtToken;

#[contractimpl]
impl DebtTokenTrait for DebtToken {
    /// Initializes the Debt token contract.
    ///
    /// # Arguments
    ///
    /// - engine - The address of the engine contract, the only minter and burner.
    /// - decimal - The number of decimals of the token.
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    ///
    /// # Panics
    ///
    /// Panics if the contract has already been initialized.
    /// Panics if name or symbol is empty
    ///
    fn initialize(e: Env, engine: Address, decimal: u32, name: String, symbol: String) {
        if name.len() == 0 {
            panic!("debt-token: no name");
        }

        if symbol.len() == 0 {
            panic!("debt-token: no symbol");
        }

        if has_engine(&e) {
            panic!("debt-token: already initialized");
        }

        write_engine(&e, &engine);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name: name.clone(),
                symbol: symbol.clone(),
            },
        );

        event::initialized(&e, engine, decimal, name, symbol);
    }

    /// Mints a specified amount of tokens for a given `to`.
    ///
    /// # Panics
    ///
    /// Panics if the amount is not positive.
    /// Panics if the caller is not the engine associated with this token.
    ///
    fn mint(e: Env, to: Address, amount: i128) {
        let engine = verify_caller_is_engine(&e);

        receive_balance(&e, to.clone(), amount);
        add_total_supply(&e, amount);

        event::mint(&e, engine, to, amount);
    }

    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, from, spender).amount
    }

    /// Set the allowance for a spender to withdraw from the `from` address by a specified amount of tokens.
    ///
    /// # Arguments
    ///
    /// - from - The address of the token owner.
    /// - spender - The address of the spender.
    /// - amount - The amount of tokens to increase the allowance by.
    /// - expiration_ledger - The time when allowance will be expired.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not authorized.
    /// Panics if the amount is negative.
    ///
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        require_nonnegative_amount(amount);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        event::approve(&e, from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, id)
    }

    /// Transfers a specified amount of tokens from one account (`from`) to another account (`to`).
    ///
    /// # Panics
    ///
    /// Panics if the caller is not authorized.
    /// Panics if the amount is not positive or exceeds the balance of `from`.
    ///
    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        require_positive_amount(amount);

        do_transfer(&e, from, to, amount);
    }

    /// Transfers a specified amount of tokens from the from account to the to account on behalf of the spender account.
    ///
    /// # Panics
    ///
    /// Panics if the spender is not authorized or the allowance is insufficient.
    /// Panics if the amount is not positive or exceeds the balance of `from`.
    ///
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        require_positive_amount(amount);
        spend_allowance(&e, from.clone(), spender, amount);

        do_transfer(&e, from, to, amount);
    }

    /// Burns a specified amount of tokens from the from account.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the engine associated with this token.
    /// Panics if the amount is not positive or exceeds the balance of `from`.
    ///
    fn burn(e: Env, from: Address, amount: i128) {
        verify_caller_is_engine(&e);

        spend_balance(&e, from.clone(), amount);
        add_total_supply(&e, amount.checked_neg().expect("debt-token: no overflow"));

        event::burn(&e, from, amount);
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }

    /// Returns the address of the engine allowed to mint and burn the token.
    fn engine(e: Env) -> Address {
        read_engine(&e)
    }
}

fn do_transfer(e: &Env, from: Address, to: Address, amount: i128) {
    spend_balance(e, from.clone(), amount);
    receive_balance(e, to.clone(), amount);

    event::transfer(e, from, to, amount);
}
