pub mod account_information;
pub mod collateral_config;
pub mod engine_config;
pub mod error;
