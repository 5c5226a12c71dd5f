use crate::errors::{AdvisorError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日线数据结构
///
/// 字段顺序即 CSV 列顺序，日期列在文件中命名为 `timestamp`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "timestamp")]
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Daily price history in upstream order (most recent first), never empty
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(records: Vec<PriceRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(AdvisorError::NoData("time series contains no trading days".to_string()));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 上游返回的第一条记录
    pub fn first(&self) -> &PriceRecord {
        &self.records[0]
    }

    /// 按日期取最新的记录，不依赖上游顺序
    pub fn newest(&self) -> &PriceRecord {
        self.records
            .iter()
            .max_by_key(|r| r.date)
            .unwrap_or(&self.records[0])
    }

    pub fn recent_high(&self) -> f64 {
        self.records.iter().map(|r| r.high).fold(f64::MIN, f64::max)
    }

    pub fn recent_low(&self) -> f64 {
        self.records.iter().map(|r| r.low).fold(f64::MAX, f64::min)
    }
}

/// 汇总指标，每次运行从序列重新计算
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub latest_close: f64,
    pub recent_high: f64,
    pub recent_low: f64,
    pub as_of: String,
}

impl Summary {
    /// 最新收盘价相对近期低点的涨幅，作为风险指标
    pub fn drawdown(&self) -> f64 {
        if self.recent_low == 0.0 {
            return if self.latest_close == 0.0 { 0.0 } else { f64::INFINITY };
        }
        (self.latest_close - self.recent_low) / self.recent_low
    }
}
