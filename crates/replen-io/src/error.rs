//! 資料來源錯誤
//!
//! 連線、讀檔、解析失敗都在資料進入計算引擎之前回報。

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("無法開啟檔案 {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O 錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("解析錯誤 {file} 第 {line} 行: {message}")]
    Parse {
        file: String,
        line: u64,
        message: String,
    },

    #[error("{file} 中的鍵重複: {key}")]
    DuplicateKey { file: String, key: String },

    #[error("模擬參數無效: {0}")]
    InvalidSynthConfig(String),
}
