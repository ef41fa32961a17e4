//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 绘制或导出四条展宽曲线
//! - `eval`: 在指定角度处求值并打印表格
//! - `scan`: 从 CSV 扫描表批量计算
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: model, plot, eval, scan

pub mod eval;
pub mod model;
pub mod plot;
pub mod scan;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

/// dopbroad - γ 射线探测器 Doppler 展宽计算
#[derive(Parser)]
#[command(name = "dopbroad")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Doppler broadening of gamma-ray energy resolution versus detector angle",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot (or export) the broadening curves over 0-180 degrees
    Plot(plot::PlotArgs),

    /// Evaluate the broadening components at specific angles
    Eval(eval::EvalArgs),

    /// Evaluate many parameter sets from a CSV file in parallel
    Scan(scan::ScanArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (angle, energy, solid_angle, beta, total)
    Csv,
    /// XY data file (tab separated, commented header)
    Xy,
}

impl OutputFormat {
    /// 从文件扩展名推断输出格式
    pub fn from_extension(path: &Path) -> OutputFormat {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => OutputFormat::Svg,
            Some("csv") => OutputFormat::Csv,
            Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
            _ => OutputFormat::Png,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Xy => "xy",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Svg)
    }
}
