// 公开导出的模块，供外部使用
pub mod models;
pub mod errors;
pub mod config;
pub mod scrapers;
pub mod services;
pub mod util;

// 重新导出常用类型，方便使用
pub use models::input::{RiskTolerance, TickerSymbol};
pub use models::price::{PriceRecord, PriceSeries, Summary};
pub use models::recommendation::{Decision, Recommendation};
pub use services::advisor_service::AdvisorService;
pub use errors::{Result, AdvisorError};
