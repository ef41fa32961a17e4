//! # eval 子命令实现
//!
//! 在给定角度处计算各展宽分量并以表格输出。
//! 超出 [0°, 180°] 的角度仍然计算，但给出警告。
//!
//! ## 依赖关系
//! - 使用 `cli/eval.rs` 定义的 EvalArgs
//! - 使用 `models/broadening.rs`
//! - 使用 `tabled` 打印表格

use crate::cli::eval::EvalArgs;
use crate::error::{DopplerError, Result};
use crate::models::{add_in_quadrature, is_physical_angle, BroadeningModel};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct EvalRow {
    #[tabled(rename = "θ (°)")]
    angle: String,
    #[tabled(rename = "E' (MeV)")]
    shifted_energy: String,
    #[tabled(rename = "Energy")]
    energy: String,
    #[tabled(rename = "Solid Angle")]
    solid_angle: String,
    #[tabled(rename = "Beta")]
    beta: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Total ⊕ dE/E")]
    with_emission: String,
}

/// 执行 eval 命令
pub fn execute(args: EvalArgs) -> Result<()> {
    output::print_header("Doppler Broadening Evaluation");

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

    for angle in args.angles.iter().filter(|a| !is_physical_angle(**a)) {
        output::print_warning(&format!(
            "Angle {}° is outside the physical range [0°, 180°]; evaluating anyway",
            angle
        ));
    }

    let rows = evaluate_rows(&model, &args.angles, args.emission_width);

    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

fn evaluate_rows(
    model: &BroadeningModel,
    angles: &[f64],
    emission_width: Option<f64>,
) -> Vec<EvalRow> {
    angles
        .iter()
        .map(|&angle| {
            let b = model.components(angle);
            EvalRow {
                angle: format!("{:.2}", angle),
                shifted_energy: format!("{:.6}", model.doppler_shift(angle)),
                energy: format!("{:.6e}", b.energy),
                solid_angle: format!("{:.6e}", b.solid_angle),
                beta: format!("{:.6e}", b.beta),
                total: format!("{:.6e}", b.total),
                with_emission: emission_width
                    .map(|w| format!("{:.6e}", add_in_quadrature(b.total, w)))
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect()
}
