pub mod account_data;
pub mod price_provider;
