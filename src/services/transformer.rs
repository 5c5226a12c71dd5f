use crate::errors::{AdvisorError, Result};
use crate::models::price::{PriceRecord, PriceSeries, Summary};
use chrono::NaiveDate;
use log::{debug, warn};
use serde_json::{Map, Value};

pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";
pub const META_DATA_KEY: &str = "Meta Data";
pub const LAST_REFRESHED_KEY: &str = "3. Last Refreshed";

// 上游错误响应可能出现的字段
const ERROR_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// 把按日期嵌套的 JSON 转成价格序列，保持上游的键顺序
pub fn transform(payload: &Value) -> Result<PriceSeries> {
    let series = payload
        .get(TIME_SERIES_KEY)
        .and_then(|v| v.as_object())
        .ok_or_else(|| no_data(payload, TIME_SERIES_KEY))?;

    let records = series
        .iter()
        .map(|(date, prices)| parse_record(date, prices))
        .collect::<Result<Vec<_>>>()?;

    debug!("解析得到 {} 条日线记录", records.len());
    PriceSeries::new(records)
}

/// 读取 Meta Data 中的最后刷新时间
pub fn extract_as_of_timestamp(payload: &Value) -> Result<String> {
    payload
        .get(META_DATA_KEY)
        .and_then(|meta| meta.get(LAST_REFRESHED_KEY))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| no_data(payload, LAST_REFRESHED_KEY))
}

/// 计算最新收盘价和近期高低点
///
/// 最新收盘价取序列第一条，即假定上游按日期倒序返回。
pub fn summarize(series: &PriceSeries, as_of: &str) -> Summary {
    let first = series.first();
    let newest = series.newest();
    if newest.date != first.date {
        warn!(
            "First record is dated {} but the newest record is {}; using the first record as latest close",
            first.date, newest.date
        );
    }

    Summary {
        latest_close: first.close,
        recent_high: series.recent_high(),
        recent_low: series.recent_low(),
        as_of: as_of.to_string(),
    }
}

fn parse_record(date: &str, prices: &Value) -> Result<PriceRecord> {
    let fields = prices
        .as_object()
        .ok_or_else(|| AdvisorError::DataError(format!("Prices for {} are not an object", date)))?;

    Ok(PriceRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
        open: parse_price(fields, date, "1. open")?,
        high: parse_price(fields, date, "2. high")?,
        low: parse_price(fields, date, "3. low")?,
        close: parse_price(fields, date, "4. close")?,
        volume: parse_volume(fields, date, "5. volume")?,
    })
}

fn field_text(fields: &Map<String, Value>, date: &str, key: &str) -> Result<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(AdvisorError::DataError(format!("Missing field '{}' for {}", key, date))),
    }
}

fn parse_price(fields: &Map<String, Value>, date: &str, key: &str) -> Result<f64> {
    let text = field_text(fields, date, key)?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AdvisorError::DataError(format!(
            "Invalid value '{}' for '{}' on {}",
            text, key, date
        ))),
    }
}

fn parse_volume(fields: &Map<String, Value>, date: &str, key: &str) -> Result<u64> {
    let text = field_text(fields, date, key)?;
    text.parse::<u64>().map_err(|e| {
        AdvisorError::DataError(format!("Invalid volume '{}' on {}: {}", text, date, e))
    })
}

fn no_data(payload: &Value, missing: &str) -> AdvisorError {
    let upstream = ERROR_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(|v| v.as_str()));

    match upstream {
        Some(message) => AdvisorError::NoData(message.to_string()),
        None => AdvisorError::NoData(format!("Response has no '{}'", missing)),
    }
}
