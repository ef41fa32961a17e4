//! # scan 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// CSV file of parameter sets
    /// (columns: name,energy_mev,beta,d_theta_deg,resolution_const,d_beta)
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "broadening_scan")]
    pub output: PathBuf,

    /// Output format for every parameter set
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Angle range in degrees (e.g., "0-180")
    #[arg(short, long, default_value = "0-180")]
    pub range: String,

    /// Angle step in degrees
    #[arg(long, default_value_t = 0.5)]
    pub step: f64,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
