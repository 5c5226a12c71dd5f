use crate::errors::{AdvisorError, Result};
use std::io::{BufRead, Write};

// 金额格式化：美元符号、千分位、两位小数
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 这种舍入后为零的值不带负号
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// 反复提示直到输入合法；只有输入校验错误会重新提示，输入结束视为无效输入
pub fn prompt_until_valid<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: fn(&str) -> Result<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AdvisorError::InvalidInput(
                "input closed before a value was given".to_string(),
            ));
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_invalid_input() => writeln!(output, "{} Please try again.", e)?,
            Err(e) => return Err(e),
        }
    }
}

// CSV 读写工具
pub mod csv_utils {
    use crate::errors::Result;
    use crate::models::price::{PriceRecord, PriceSeries};
    use log::info;
    use std::path::Path;

    pub const CSV_HEADERS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

    /// 写出价格序列，覆盖已有文件；目录不存在时报 IO 错误
    pub fn write_prices_csv(series: &PriceSeries, path: &Path) -> Result<()> {
        info!("Writing {} rows to {}", series.len(), path.display());

        let mut writer = csv::Writer::from_path(path)?;
        for record in series.records() {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn read_prices_csv(path: &Path) -> Result<Vec<PriceRecord>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: PriceRecord = row?;
            records.push(record);
        }
        Ok(records)
    }
}
