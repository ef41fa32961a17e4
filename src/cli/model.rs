//! # 模型参数 CLI 定义
//!
//! 五个模型参数，被 `plot` 和 `eval` 子命令共用。
//! 每个参数也可以从 `DOPBROAD_*` 环境变量读取。
//!
//! ## 依赖关系
//! - 被 `cli/plot.rs`, `cli/eval.rs` 展开 (flatten)
//! - 转换为 `models/parameters.rs` 的 BroadeningParams

use crate::models::parameters::{DEFAULT_D_BETA, DEFAULT_D_THETA_DEG, DEFAULT_RESOLUTION_CONST};
use crate::models::BroadeningParams;

use clap::Args;

/// 模型参数
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Energy of the emitted gamma-ray in MeV
    #[arg(short, long, env = "DOPBROAD_ENERGY")]
    pub energy: f64,

    /// Velocity of the moving frame as a fraction of the speed of light
    #[arg(short, long, env = "DOPBROAD_BETA", allow_negative_numbers = true)]
    pub beta: f64,

    /// Angular coverage (half opening angle) of the detector in degrees
    #[arg(long, env = "DOPBROAD_D_THETA", default_value_t = DEFAULT_D_THETA_DEG)]
    pub d_theta: f64,

    /// Constant of the intrinsic const/sqrt(E) resolution term, in sqrt(MeV)
    #[arg(long, env = "DOPBROAD_RESOLUTION_CONST", default_value_t = DEFAULT_RESOLUTION_CONST)]
    pub resolution_const: f64,

    /// Width of the beta distribution
    #[arg(long, env = "DOPBROAD_D_BETA", default_value_t = DEFAULT_D_BETA)]
    pub d_beta: f64,
}

impl ModelArgs {
    pub fn params(&self) -> BroadeningParams {
        BroadeningParams::new(self.energy, self.beta)
            .with_coverage_deg(self.d_theta)
            .with_resolution_const(self.resolution_const)
            .with_beta_spread(self.d_beta)
    }
}
