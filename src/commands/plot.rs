//! # plot 子命令实现
//!
//! 在角度网格上采样四条展宽曲线并输出图像或数据文件。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `doppler/` 模块进行采样、绘图和导出

use crate::cli::plot::PlotArgs;
use crate::cli::OutputFormat;
use crate::doppler::{self, plot::PlotOptions, AngleGrid};
use crate::error::{DopplerError, Result};
use crate::models::{BroadeningModel, Component};
use crate::utils::output;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Doppler Broadening");

    let params = args.model.params();
    let model = BroadeningModel::new(params)?;
    super::print_params(&params);

    if let Some(width) = args.emission_width {
        if !(width.is_finite() && width >= 0.0) {
            return Err(DopplerError::InvalidParameter {
                name: "emission_width",
                value: width,
                reason: "must be a finite value >= 0",
            });
        }
    }

    let grid = AngleGrid::parse_range(&args.range, args.step)?;
    output::print_info(&format!(
        "Sampling {:.1}° - {:.1}° in {} points",
        grid.start_deg,
        grid.end_deg,
        grid.len()
    ));

    let curves = doppler::sample(&model, &grid);

    if let Some((angle, value)) = curves.peak(Component::Total) {
        output::print_info(&format!(
            "Maximum total broadening {:.4e} at {:.1}°",
            value, angle
        ));
    }

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_extension(&args.output));

    let options = PlotOptions {
        title: args.title.clone().unwrap_or_else(|| {
            format!(
                "Doppler Broadening ({} MeV, β = {})",
                params.energy_mev, params.beta
            )
        }),
        width: args.width,
        height: args.height,
        emission_width: args.emission_width,
        use_svg: format == OutputFormat::Svg,
    };

    let name = args
        .output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("broadening")
        .to_string();

    super::write_curves(&curves, &name, &args.output, format, &options)?;

    output::print_success(&format!(
        "Broadening {} saved to '{}'",
        if format.is_image() { "plot" } else { "data" },
        args.output.display()
    ));

    Ok(())
}
