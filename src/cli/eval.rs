//! # eval 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/eval.rs`

use super::model::ModelArgs;

use clap::Args;

/// eval 子命令参数
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Detector polar angle(s) in degrees (repeat or comma-separate)
    #[arg(
        short,
        long = "angle",
        required = true,
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub angles: Vec<f64>,

    /// Relative width of the emitted gamma line (dE/E), added in quadrature
    /// as an extra column
    #[arg(long)]
    pub emission_width: Option<f64>,
}
