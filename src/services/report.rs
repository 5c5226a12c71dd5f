use crate::models::input::{RiskTolerance, TickerSymbol};
use crate::models::price::Summary;
use crate::models::recommendation::Recommendation;
use crate::util::format_currency;
use chrono::{DateTime, Local};
use std::path::PathBuf;

const RULE: &str = "-------------------------";

/// 一次运行的全部结果，用于终端输出
#[derive(Debug, Clone)]
pub struct AdvisorReport {
    pub ticker: TickerSymbol,
    pub risk: RiskTolerance,
    pub summary: Summary,
    pub recommendation: Recommendation,
    pub trading_days: usize,
    pub csv_path: PathBuf,
    pub requested_at: DateTime<Local>,
}

pub fn render_report(report: &AdvisorReport) -> String {
    let summary = &report.summary;
    format!(
        "{rule}\n\
         Stock: {ticker}\n\
         {rule}\n\
         Requested at: {requested_at}\n\
         {rule}\n\
         Latest data from: {as_of}\n\
         Trading days: {days}\n\
         Latest closing price: {close}\n\
         Recent high: {high}\n\
         Recent low: {low}\n\
         {rule}\n\
         Risk tolerance: {risk} (max gain over recent low {threshold:.2}%, actual {drawdown:.2}%)\n\
         Recommendation: {recommendation}\n\
         {rule}\n\
         Wrote data to CSV: {csv}\n\
         {rule}\n\
         {closing}\n\
         {rule}\n",
        rule = RULE,
        ticker = report.ticker,
        requested_at = report.requested_at.format("%m-%d-%Y %H:%M:%S"),
        as_of = summary.as_of,
        days = report.trading_days,
        close = format_currency(summary.latest_close),
        high = format_currency(summary.recent_high),
        low = format_currency(summary.recent_low),
        risk = report.risk.value(),
        threshold = report.risk.threshold() * 100.0,
        drawdown = summary.drawdown() * 100.0,
        recommendation = report.recommendation,
        csv = report.csv_path.display(),
        closing = report.recommendation.closing_message(),
    )
}

pub fn print_report(report: &AdvisorReport) {
    print!("{}", render_report(report));
}
