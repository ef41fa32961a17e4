//! # 模型输入参数
//!
//! 五个标量参数的命名表示，带默认值与校验。
//! 角度覆盖以度输入，进入 [`BroadeningModel`](super::BroadeningModel) 时转换为弧度。
//!
//! ## 依赖关系
//! - 被 `models/broadening.rs` 校验并构造模型
//! - 被 `cli/`, `batch/` 填充

use crate::error::{DopplerError, Result};

/// 探测器角度覆盖默认值（度）
pub const DEFAULT_D_THETA_DEG: f64 = 0.0;
/// 本征分辨率常数默认值（√MeV）
pub const DEFAULT_RESOLUTION_CONST: f64 = 1.0;
/// β 分布宽度默认值
pub const DEFAULT_D_BETA: f64 = 0.0;

/// Doppler 展宽模型参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadeningParams {
    /// 发射 γ 射线能量（MeV）
    pub energy_mev: f64,
    /// 参考系速度与光速之比
    pub beta: f64,
    /// 探测器半张角（度）
    pub d_theta_deg: f64,
    /// 1/√E 本征分辨率项的常数（√MeV）
    pub resolution_const: f64,
    /// β 分布宽度
    pub d_beta: f64,
}

impl BroadeningParams {
    /// 仅指定必需参数，其余取默认值
    pub fn new(energy_mev: f64, beta: f64) -> Self {
        Self {
            energy_mev,
            beta,
            d_theta_deg: DEFAULT_D_THETA_DEG,
            resolution_const: DEFAULT_RESOLUTION_CONST,
            d_beta: DEFAULT_D_BETA,
        }
    }

    pub fn with_coverage_deg(mut self, d_theta_deg: f64) -> Self {
        self.d_theta_deg = d_theta_deg;
        self
    }

    pub fn with_resolution_const(mut self, resolution_const: f64) -> Self {
        self.resolution_const = resolution_const;
        self
    }

    pub fn with_beta_spread(mut self, d_beta: f64) -> Self {
        self.d_beta = d_beta;
        self
    }

    /// 校验参数的物理有效性
    pub fn validate(&self) -> Result<()> {
        require_finite("energy_mev", self.energy_mev)?;
        require_finite("beta", self.beta)?;
        require_finite("d_theta_deg", self.d_theta_deg)?;
        require_finite("resolution_const", self.resolution_const)?;
        require_finite("d_beta", self.d_beta)?;

        if self.energy_mev <= 0.0 {
            return Err(invalid("energy_mev", self.energy_mev, "must be > 0"));
        }
        if self.beta.abs() >= 1.0 {
            return Err(invalid("beta", self.beta, "must satisfy |beta| < 1"));
        }
        if self.d_theta_deg < 0.0 {
            return Err(invalid("d_theta_deg", self.d_theta_deg, "must be >= 0"));
        }
        if self.resolution_const < 0.0 {
            return Err(invalid(
                "resolution_const",
                self.resolution_const,
                "must be >= 0",
            ));
        }
        if self.d_beta < 0.0 {
            return Err(invalid("d_beta", self.d_beta, "must be >= 0"));
        }

        Ok(())
    }
}

impl std::fmt::Display for BroadeningParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "E = {} MeV, β = {}, δθ = {}°, const = {} √MeV, δβ = {}",
            self.energy_mev, self.beta, self.d_theta_deg, self.resolution_const, self.d_beta
        )
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "must be finite"))
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> DopplerError {
    DopplerError::InvalidParameter {
        name,
        value,
        reason,
    }
}
