pub mod account_information;
pub mod burn;
pub mod deposit;
pub mod deposit_and_mint;
pub mod initialize;
pub mod liquidate;
pub mod mint;
pub mod redeem;
pub mod redeem_for_debt;

pub(crate) mod utils;
