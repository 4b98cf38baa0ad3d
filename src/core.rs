pub mod converter;
pub mod units;
