//! # Replenishment I/O
//!
//! 資料來源與輸出：CSV 原始資料表、記憶體資料庫、補貨計畫匯出、模擬資料產生

pub mod csv_store;
pub mod error;
pub mod export;
pub mod records;
pub mod repository;
pub mod stats;
pub mod synth;

// Re-export 主要類型
pub use csv_store::CsvRepository;
pub use error::IoError;
pub use export::{write_plan, write_plan_file, PLAN_COLUMNS};
pub use repository::{load_feeds, Feeds, InMemoryRepository, ReplenishmentRepository};
pub use synth::{SynthConfig, SyntheticDataset};

pub type Result<T> = std::result::Result<T, IoError>;
