//! # 批量处理模块
//!
//! 对一组模型参数进行并行计算。
//!
//! ## 功能
//! - 从 CSV 扫描表读取参数组
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod records;
pub mod runner;

pub use records::{read_scan_file, ScanJob};
pub use runner::{BatchRunner, ProcessResult};
