//! # dopbroad - γ 射线探测器 Doppler 展宽计算
//!
//! 计算运动参考系中发射的 γ 射线在探测器上的能量分辨率展宽，
//! 作为探测器极角的函数。
//!
//! ## 子命令
//! - `plot` - 绘制四条展宽曲线 (PNG/SVG) 或导出数据 (CSV/XY)
//! - `eval` - 在指定角度处求值
//! - `scan` - 批量计算 CSV 扫描表中的多组参数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── doppler/   (采样、绘图、导出)
//!   │     ├── batch/     (批量并行处理)
//!   │     └── models/    (展宽模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod doppler;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
