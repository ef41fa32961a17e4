//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `doppler/`, `batch/`, `utils/`
//! - 子模块: plot, eval, scan

pub mod eval;
pub mod plot;
pub mod scan;

use crate::cli::{Commands, OutputFormat};
use crate::doppler::{export, plot as chart, SampledCurves};
use crate::error::Result;
use crate::models::BroadeningParams;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plot(args) => plot::execute(args),
        Commands::Eval(args) => eval::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 按格式写出采样结果
pub(crate) fn write_curves(
    curves: &SampledCurves,
    name: &str,
    output_path: &Path,
    format: OutputFormat,
    options: &chart::PlotOptions,
) -> Result<()> {
    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let options = chart::PlotOptions {
                use_svg: format == OutputFormat::Svg,
                ..options.clone()
            };
            chart::generate_broadening_plot(curves, output_path, &options)
        }
        OutputFormat::Csv => export::to_csv(curves, output_path),
        OutputFormat::Xy => export::to_xy(curves, name, output_path),
    }
}

/// 打印模型参数
pub(crate) fn print_params(params: &BroadeningParams) {
    output::print_param("Gamma energy", &format!("{} MeV", params.energy_mev));
    output::print_param("Beta", &format!("{}", params.beta));
    output::print_param("Angular coverage", &format!("{}°", params.d_theta_deg));
    output::print_param(
        "Resolution constant",
        &format!("{} √MeV", params.resolution_const),
    );
    output::print_param("Beta spread", &format!("{}", params.d_beta));
}
