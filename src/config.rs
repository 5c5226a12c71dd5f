use crate::errors::{AdvisorError, Result};
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// 相对路径按当前工作目录解析
    pub data_dir: String,
    pub csv_file_name: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: "data".to_string(),
            csv_file_name: "prices.csv".to_string(),
        }
    }

    /// 从环境变量读取 API key，其余字段取默认值
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AdvisorError::ConfigError(format!("{} is not set", API_KEY_ENV)))?;
        Ok(Self::new().with_api_key(&api_key))
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data_dir = dir.to_string();
        self
    }

    pub fn with_csv_file_name(mut self, name: &str) -> Self {
        self.csv_file_name = name.to_string();
        self
    }

    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.csv_file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
