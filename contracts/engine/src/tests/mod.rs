pub mod liquidate;
