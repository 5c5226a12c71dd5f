use crate::config::Config;
use crate::errors::Result;
use crate::models::input::{RiskTolerance, TickerSymbol};
use crate::scrapers::base::PriceSource;
use crate::services::advisor;
use crate::services::report::AdvisorReport;
use crate::services::transformer;
use crate::util::csv_utils;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 投顾服务：拉取、解析、给出建议并写出 CSV
pub struct AdvisorService {
    config: Config,
    source: Arc<dyn PriceSource + Send + Sync>,
    csv_path: PathBuf,
}

impl AdvisorService {
    pub fn new(config: Config, source: Arc<dyn PriceSource + Send + Sync>) -> Self {
        let csv_path = config.csv_path();
        Self {
            config,
            source,
            csv_path,
        }
    }

    /// CSV 输出路径
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// 跑完整条流程；任何一步失败都不会写出 CSV
    pub async fn run(&self, ticker: &TickerSymbol, risk: RiskTolerance) -> Result<AdvisorReport> {
        let requested_at = chrono::Local::now();
        info!("Processing {} with risk tolerance {}", ticker, risk.value());

        let payload = self.source.fetch_daily_series(ticker).await?;
        let series = transformer::transform(&payload)?;
        let as_of = transformer::extract_as_of_timestamp(&payload)?;
        let summary = transformer::summarize(&series, &as_of);
        let recommendation = advisor::recommend(&summary, risk);

        // 确保目录存在
        std::fs::create_dir_all(&self.config.data_dir)?;
        csv_utils::write_prices_csv(&series, &self.csv_path)?;

        info!("Successfully processed {}: {}", ticker, recommendation);
        Ok(AdvisorReport {
            ticker: ticker.clone(),
            risk,
            summary,
            recommendation,
            trading_days: series.len(),
            csv_path: self.csv_path.clone(),
            requested_at,
        })
    }
}
