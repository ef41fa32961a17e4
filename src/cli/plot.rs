//! # plot 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::model::ModelArgs;
use super::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file path
    #[arg(short, long, default_value = "doppler_broadening.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Angle range in degrees (e.g., "0-180")
    #[arg(short, long, default_value = "0-180")]
    pub range: String,

    /// Angle step in degrees
    #[arg(long, default_value_t = 0.5)]
    pub step: f64,

    /// Relative width of the emitted gamma line (dE/E), drawn as an extra curve
    /// added in quadrature to the total
    #[arg(long)]
    pub emission_width: Option<f64>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,
}
