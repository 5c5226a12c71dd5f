pub mod alphavantage;
pub mod base;
