use httpmock::prelude::*;
use robo_advisor::config::Config;
use robo_advisor::errors::AdvisorError;
use robo_advisor::models::input::{RiskTolerance, TickerSymbol};
use robo_advisor::scrapers::alphavantage::{build_request_url, fetch_json, AlphaVantageScraper};
use robo_advisor::scrapers::base::PriceSource;
use robo_advisor::services::advisor_service::AdvisorService;
use robo_advisor::util::csv_utils::read_prices_csv;
use robo_advisor::Decision;
use serde_json::json;
use std::sync::Arc;
use tempfile::tempdir;

fn daily_payload() -> serde_json::Value {
    json!({
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "IBM",
            "3. Last Refreshed": "2024-01-03",
            "4. Output Size": "Compact",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2024-01-03": {
                "1. open": "160.5000", "2. high": "162.0000", "3. low": "150.0000",
                "4. close": "161.0000", "5. volume": "4200000"
            },
            "2024-01-02": {
                "1. open": "158.0000", "2. high": "161.2000", "3. low": "140.0000",
                "4. close": "160.1000", "5. volume": "3900000"
            }
        }
    })
}

#[tokio::test]
async fn fetch_sends_daily_query_and_parses_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "TIME_SERIES_DAILY")
                .query_param("symbol", "IBM")
                .query_param("apikey", "test-key");
            then.status(200).json_body(daily_payload());
        })
        .await;

    let config = Config::new()
        .with_api_key("test-key")
        .with_base_url(&server.url("/query"));
    let scraper = AlphaVantageScraper::new(&config).expect("scraper");

    let ticker = TickerSymbol::parse("ibm").unwrap();
    let payload = scraper.fetch_daily_series(&ticker).await.expect("fetch");

    mock.assert_async().await;
    assert_eq!(payload["Meta Data"]["2. Symbol"], "IBM");
}

#[tokio::test]
async fn non_json_body_is_json_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let ticker = TickerSymbol::parse("IBM").unwrap();
    let url = build_request_url(&server.url("/query"), &ticker, "k").unwrap();
    let err = fetch_json(&reqwest::Client::new(), url).await.unwrap_err();

    assert!(matches!(err, AdvisorError::JsonError(_)));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let ticker = TickerSymbol::parse("IBM").unwrap();
    let url = build_request_url("http://127.0.0.1:1/query", &ticker, "secret-key").unwrap();
    let err = fetch_json(&reqwest::Client::new(), url).await.unwrap_err();

    assert!(matches!(err, AdvisorError::RequestError(_)));
    assert!(!err.to_string().contains("apikey"));
    assert!(!err.to_string().contains("secret-key"));
    assert!(!format!("{:?}", err).contains("secret-key"));
}

#[tokio::test]
async fn full_run_against_mock_server() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query").query_param("symbol", "IBM");
            then.status(200).json_body(daily_payload());
        })
        .await;

    let temp = tempdir().expect("tempdir");
    let data_dir = temp.path().join("data");
    let config = Config::new()
        .with_api_key("test-key")
        .with_base_url(&server.url("/query"))
        .with_data_dir(data_dir.to_str().unwrap());
    let source = Arc::new(AlphaVantageScraper::new(&config).expect("scraper"));
    let service = AdvisorService::new(config, source);

    let ticker = TickerSymbol::parse("IBM").unwrap();

    // (161 - 140) / 140 = 0.15：风险 2 (0.10) 不买，风险 3 (0.15) 刚好可以买
    let cautious = service
        .run(&ticker, RiskTolerance::new(2.0).unwrap())
        .await
        .expect("run");
    assert_eq!(cautious.recommendation.decision, Decision::DoNotBuy);
    assert_eq!(cautious.summary.as_of, "2024-01-03");
    assert_eq!(cautious.summary.latest_close, 161.0);
    assert_eq!(cautious.summary.recent_high, 162.0);
    assert_eq!(cautious.summary.recent_low, 140.0);

    let bolder = service
        .run(&ticker, RiskTolerance::new(3.0).unwrap())
        .await
        .expect("run");
    assert_eq!(bolder.recommendation.decision, Decision::Buy);

    let rows = read_prices_csv(&data_dir.join("prices.csv")).expect("read csv");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2024-01-03");
    assert_eq!(rows[1].volume, 3_900_000);
}

#[tokio::test]
async fn error_payload_aborts_run() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200).json_body(json!({
                "Error Message": "Invalid API call. Please retry or visit the documentation (https://www.alphavantage.co/documentation/) for TIME_SERIES_DAILY."
            }));
        })
        .await;

    let temp = tempdir().expect("tempdir");
    let data_dir = temp.path().join("data");
    let config = Config::new()
        .with_api_key("test-key")
        .with_base_url(&server.url("/query"))
        .with_data_dir(data_dir.to_str().unwrap());
    let source = Arc::new(AlphaVantageScraper::new(&config).expect("scraper"));
    let service = AdvisorService::new(config, source);

    let ticker = TickerSymbol::parse("QQQQQ").unwrap();
    let err = service
        .run(&ticker, RiskTolerance::new(5.0).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisorError::NoData(_)));
    assert!(!data_dir.join("prices.csv").exists());
}
