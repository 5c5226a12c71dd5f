use crate::models::input::RiskTolerance;
use crate::models::price::Summary;
use crate::models::recommendation::Recommendation;
use log::debug;

/// 涨幅超过风险阈值则不建议买入，等于阈值仍视为可接受
pub fn recommend(summary: &Summary, risk: RiskTolerance) -> Recommendation {
    let threshold = risk.threshold();
    let drawdown = summary.drawdown();
    debug!("drawdown {:.4} vs threshold {:.4}", drawdown, threshold);

    if drawdown > threshold {
        Recommendation::do_not_buy()
    } else {
        Recommendation::buy()
    }
}
