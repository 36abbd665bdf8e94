pub mod collateral;
pub mod debt;
pub mod health_factor;
pub mod lock;
pub mod validation;
