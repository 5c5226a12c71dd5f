use crate::errors::{AdvisorError, Result};
use std::fmt;
use std::str::FromStr;

const MAX_TICKER_LEN: usize = 5;
const MIN_RISK: f64 = 1.0;
const MAX_RISK: f64 = 10.0;

/// 股票代码，1 到 5 个英文字母，统一转为大写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    pub fn parse(input: &str) -> Result<Self> {
        let symbol = input.trim();
        if symbol.is_empty()
            || symbol.len() > MAX_TICKER_LEN
            || !symbol.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(AdvisorError::InvalidInput(format!(
                "'{}' is not a valid ticker symbol (1-{} letters expected)",
                symbol, MAX_TICKER_LEN
            )));
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TickerSymbol {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 风险承受度，取值 [1, 10]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTolerance(f64);

impl RiskTolerance {
    pub fn new(value: f64) -> Result<Self> {
        // NaN 也会落到这里
        if !(MIN_RISK..=MAX_RISK).contains(&value) {
            return Err(AdvisorError::InvalidInput(format!(
                "risk tolerance must be between {} and {}, got {}",
                MIN_RISK, MAX_RISK, value
            )));
        }
        Ok(Self(value))
    }

    pub fn parse(input: &str) -> Result<Self> {
        let value = input.trim().parse::<f64>().map_err(|_| {
            AdvisorError::InvalidInput(format!("'{}' is not a number", input.trim()))
        })?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// 可接受的涨幅比例，范围 [0.05, 0.5]
    pub fn threshold(&self) -> f64 {
        self.0 / 20.0
    }
}

impl FromStr for RiskTolerance {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
