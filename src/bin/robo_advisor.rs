use robo_advisor::config::Config;
use robo_advisor::errors::AdvisorError;
use robo_advisor::models::input::{RiskTolerance, TickerSymbol};
use robo_advisor::scrapers::alphavantage::AlphaVantageScraper;
use robo_advisor::services::advisor_service::AdvisorService;
use robo_advisor::services::report::print_report;
use robo_advisor::util::prompt_until_valid;

use clap::{App, Arg};
use log::{error, info};
use std::error::Error;
use std::io;
use std::sync::Arc;

const TICKER_PROMPT: &str =
    "Please enter the ticker symbol of the stock you wish to evaluate (e.g. IBM): ";
const RISK_PROMPT: &str = "How much risk are you willing to accept? \
    Enter a number between 1 (very low) and 10 (very high): ";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let matches = App::new("Robo Advisor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetches daily stock prices and recommends whether to buy")
        .arg(
            Arg::with_name("ticker")
                .short('t')
                .long("ticker")
                .value_name("TICKER")
                .help("Ticker symbol to evaluate; prompted for when omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("risk")
                .short('r')
                .long("risk")
                .value_name("RISK")
                .help("Risk tolerance from 1 to 10; prompted for when omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory the price CSV is written to, relative to the working directory")
                .takes_value(true)
                .default_value("data"),
        )
        .arg(
            Arg::with_name("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Name of the price CSV file")
                .takes_value(true)
                .default_value("prices.csv"),
        )
        .get_matches();

    let data_dir = matches.value_of("data-dir").unwrap_or("data");
    let csv_file_name = matches.value_of("output").unwrap_or("prices.csv");

    let config = Config::from_env()?
        .with_data_dir(data_dir)
        .with_csv_file_name(csv_file_name);
    info!("CSV output: {}", config.csv_path().display());

    // 命令行给出的值不合法直接报错，不再提示
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let ticker = match matches.value_of("ticker") {
        Some(value) => TickerSymbol::parse(value)?,
        None => prompt_until_valid(&mut input, &mut output, TICKER_PROMPT, TickerSymbol::parse)?,
    };
    let risk = match matches.value_of("risk") {
        Some(value) => RiskTolerance::parse(value)?,
        None => prompt_until_valid(&mut input, &mut output, RISK_PROMPT, RiskTolerance::parse)?,
    };

    let source = Arc::new(AlphaVantageScraper::new(&config)?);
    let service = AdvisorService::new(config, source);

    println!("Fetching stock market data for {}...", ticker);
    match service.run(&ticker, risk).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(AdvisorError::NoData(message)) => {
            error!("No data for {}: {}", ticker, message);
            println!(
                "Oh no! I couldn't find any trading data for {}. Please try another symbol.",
                ticker
            );
            Err(AdvisorError::NoData(message).into())
        }
        Err(e) => {
            error!("Run failed for {}: {}", ticker, e);
            Err(e.into())
        }
    }
}
