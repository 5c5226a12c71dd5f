use crate::config::Config;
use crate::errors::{AdvisorError, Result};
use crate::models::input::TickerSymbol;
use crate::scrapers::base::PriceSource;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Url};
use serde_json::Value;

const DAILY_FUNCTION: &str = "TIME_SERIES_DAILY";

/// 拼接日线接口的请求地址，API key 作为查询参数
pub fn build_request_url(base_url: &str, ticker: &TickerSymbol, api_key: &str) -> Result<Url> {
    Url::parse_with_params(
        base_url,
        &[
            ("function", DAILY_FUNCTION),
            ("symbol", ticker.as_str()),
            ("apikey", api_key),
        ],
    )
    .map_err(|e| AdvisorError::ConfigError(format!("Invalid base url {}: {}", base_url, e)))
}

/// 发送一次 GET 请求并把响应体解析为 JSON，不做重试
///
/// reqwest 的错误会带上完整 URL（含 API key），转换时去掉。
pub async fn fetch_json(client: &Client, url: Url) -> Result<Value> {
    let response = client.get(url).send().await.map_err(redact)?;

    let status = response.status();
    if !status.is_success() {
        warn!("Upstream responded with HTTP status {}", status);
    }

    let text = response.text().await.map_err(redact)?;
    debug!("成功获取响应，长度 {} 字节", text.len());

    let json: Value = serde_json::from_str(&text)?;
    Ok(json)
}

fn redact(e: reqwest::Error) -> AdvisorError {
    AdvisorError::RequestError(e.without_url())
}

/// Alpha Vantage 日线数据抓取器
pub struct AlphaVantageScraper {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageScraper {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("robo_advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AdvisorError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PriceSource for AlphaVantageScraper {
    fn source_name(&self) -> &'static str {
        "AlphaVantage"
    }

    async fn fetch_daily_series(&self, ticker: &TickerSymbol) -> Result<Value> {
        info!("Fetching daily prices for {} from {}", ticker, self.source_name());

        let url = build_request_url(&self.base_url, ticker, &self.api_key)?;
        fetch_json(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn url_carries_function_symbol_and_key() {
        let ticker = TickerSymbol::parse("ibm").unwrap();
        let url = build_request_url(DEFAULT_BASE_URL, &ticker, "abc123").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.alphavantage.co/query?function=TIME_SERIES_DAILY&symbol=IBM&apikey=abc123"
        );
    }

    #[test]
    fn empty_key_is_not_checked_locally() {
        let ticker = TickerSymbol::parse("IBM").unwrap();
        let url = build_request_url(DEFAULT_BASE_URL, &ticker, "").unwrap();

        let key = url.query_pairs().find(|(k, _)| k == "apikey").map(|(_, v)| v.into_owned());
        assert_eq!(key.as_deref(), Some(""));
    }

    #[test]
    fn bad_base_url_is_config_error() {
        let ticker = TickerSymbol::parse("IBM").unwrap();
        let err = build_request_url("not a url", &ticker, "k").unwrap_err();
        assert!(matches!(err, AdvisorError::ConfigError(_)));
    }
}
