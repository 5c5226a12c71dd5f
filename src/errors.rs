use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

// csv 包装的 IO 错误（目录不存在、无权限）按 IO 错误上报
impl From<csv::Error> for AdvisorError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => AdvisorError::IoError(io),
                other => AdvisorError::CsvError(format!("{:?}", other)),
            }
        } else {
            AdvisorError::CsvError(e.to_string())
        }
    }
}

impl AdvisorError {
    /// 输入校验错误，CLI 可以重新提示
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AdvisorError::InvalidInput(_))
    }
}
