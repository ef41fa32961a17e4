//! # 展宽曲线图表生成
//!
//! 使用 `plotters` 库把四条展宽曲线叠加绘制在同一坐标系中。
//!
//! ## 功能
//! - 总展宽黑色，本征项蓝色，张角项红色，β 分布项绿色
//! - 纵轴下限固定为 0
//! - 可选绘制加入外部发射宽度 δE/E 后的总展宽
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/scan.rs` 调用
//! - 使用 `doppler/sampler.rs` 的 SampledCurves
//! - 使用 `plotters` 渲染图表

use crate::doppler::SampledCurves;
use crate::error::{DopplerError, Result};
use crate::models::{add_in_quadrature, Component};

use plotters::prelude::*;
use std::path::Path;

/// 加入发射宽度后的曲线标题
pub const EMISSION_TITLE: &str = "Total + Emission Width";

/// 图表外观选项
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// 外部发射能量宽度 δE/E，不进入模型本身的总展宽
    pub emission_width: Option<f64>,
    pub use_svg: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            title: "Doppler Broadening".to_string(),
            width: 1200,
            height: 800,
            emission_width: None,
            use_svg: false,
        }
    }
}

/// 各分量的线条颜色
fn component_color(component: Component) -> RGBColor {
    match component {
        Component::Total => BLACK,
        Component::Energy => BLUE,
        Component::SolidAngle => RED,
        Component::Beta => RGBColor(0, 153, 0),
    }
}

fn plot_err<E: std::fmt::Debug>(e: E) -> DopplerError {
    DopplerError::PlotError(format!("{:?}", e))
}

/// 生成展宽图表
pub fn generate_broadening_plot(
    curves: &SampledCurves,
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if curves.rows.is_empty() {
        return Err(DopplerError::Other("No data to plot".to_string()));
    }

    if options.use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_broadening_chart(&root, curves, options)?;
        root.present().map_err(plot_err)?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_broadening_chart(&root, curves, options)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_broadening_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &SampledCurves,
    options: &PlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_min, x_max) = curves.angle_span().unwrap_or((0.0, 180.0));
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

    let mut y_max = curves.max_value();
    if let Some(width) = options.emission_width {
        y_max = y_max.max(add_in_quadrature(y_max, width));
    }
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Angle [°]")
        .y_desc("Resolution [dE/E]")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    for component in Component::ALL {
        let color = component_color(component);
        chart
            .draw_series(LineSeries::new(
                curves.series(component),
                color.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label(component.title())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if let Some(width) = options.emission_width {
        let color = MAGENTA;
        chart
            .draw_series(LineSeries::new(
                curves
                    .series(Component::Total)
                    .into_iter()
                    .map(|(x, y)| (x, add_in_quadrature(y, width))),
                color.stroke_width(1),
            ))
            .map_err(plot_err)?
            .label(EMISSION_TITLE)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
