//! # Doppler 展宽模型
//!
//! 探测器能量分辨率随极角 θ 的 Doppler 展宽贡献。
//!
//! ## 公式
//! 运动参考系中发射的 γ 射线在探测器处的能量：
//!
//! E' = E · (1 - β²) / (1 - β cosθ)
//!
//! 分辨率按各偏导项的平方和开方合成（均除以 E'）：
//! - 本征项：const / √E'
//! - 张角项：δθ · β sinθ / (1 - β cosθ)
//! - β 分布项：δβ · |cosθ - β| / ((1 - β²)(1 - β cosθ))
//!
//! 对发射能量 E 的偏导项化简为 δE/E，与角度无关，
//! 不计入 [`BroadeningModel::total_broadening`]。需要时由调用方通过
//! [`add_in_quadrature`] 在外部加入。
//!
//! ## 角度范围
//! 物理范围为 [0°, 180°]。范围外的角度公式仍然有定义，不会被拒绝，
//! 调用方可用 [`is_physical_angle`] 给出警告。
//!
//! ## 依赖关系
//! - 被 `doppler/sampler.rs` 和 `commands/` 使用
//! - 使用 `models/parameters.rs` 校验输入

use crate::error::Result;
use crate::models::BroadeningParams;

/// 极角物理范围（度）
pub const PHYSICAL_DOMAIN_DEG: (f64, f64) = (0.0, 180.0);

/// 展宽分量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// 本征分辨率在 Doppler 移动后能量处的取值
    Energy,
    /// 探测器张角
    SolidAngle,
    /// β 分布宽度
    Beta,
    /// 平方和合成
    Total,
}

impl Component {
    /// 绘制顺序：先画总展宽，再叠加各分量
    pub const ALL: [Component; 4] = [
        Component::Total,
        Component::Energy,
        Component::SolidAngle,
        Component::Beta,
    ];

    /// 显示标题
    pub fn title(&self) -> &'static str {
        match self {
            Component::Energy => "Energy Broadening",
            Component::SolidAngle => "Solid Angle Broadening",
            Component::Beta => "Beta Broadening",
            Component::Total => "Total Broadening",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 单个角度处的全部展宽分量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Broadening {
    pub energy: f64,
    pub solid_angle: f64,
    pub beta: f64,
    pub total: f64,
}

impl Broadening {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Energy => self.energy,
            Component::SolidAngle => self.solid_angle,
            Component::Beta => self.beta,
            Component::Total => self.total,
        }
    }
}

/// Doppler 展宽模型
///
/// 构造时校验参数，之后只读。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadeningModel {
    energy_mev: f64,
    beta: f64,
    angular_coverage_rad: f64,
    resolution_const: f64,
    beta_spread: f64,
}

impl BroadeningModel {
    /// 从参数构造模型
    pub fn new(params: BroadeningParams) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            energy_mev: params.energy_mev,
            beta: params.beta,
            angular_coverage_rad: params.d_theta_deg.to_radians(),
            resolution_const: params.resolution_const,
            beta_spread: params.d_beta,
        })
    }

    /// 按位置参数构造（顺序同 [`BroadeningParams`] 字段）
    pub fn from_values(
        energy_mev: f64,
        beta: f64,
        d_theta_deg: f64,
        resolution_const: f64,
        d_beta: f64,
    ) -> Result<Self> {
        Self::new(
            BroadeningParams::new(energy_mev, beta)
                .with_coverage_deg(d_theta_deg)
                .with_resolution_const(resolution_const)
                .with_beta_spread(d_beta),
        )
    }

    /// 还原为输入参数（角度覆盖换回度）
    pub fn params(&self) -> BroadeningParams {
        BroadeningParams {
            energy_mev: self.energy_mev,
            beta: self.beta,
            d_theta_deg: self.angular_coverage_rad.to_degrees(),
            resolution_const: self.resolution_const,
            d_beta: self.beta_spread,
        }
    }

    /// 1 - β cosθ，|β| < 1 时恒为正
    fn denominator(&self, angle_rad: f64) -> f64 {
        1.0 - self.beta * angle_rad.cos()
    }

    /// Doppler 移动后的能量 E'（MeV）
    pub(crate) fn doppler_shift(&self, angle_deg: f64) -> f64 {
        let angle_rad = angle_deg.to_radians();
        self.energy_mev * (1.0 - self.beta * self.beta) / self.denominator(angle_rad)
    }

    /// 本征分辨率项 const / √E'
    pub fn energy_broadening(&self, angle_deg: f64) -> f64 {
        self.resolution_const / self.doppler_shift(angle_deg).sqrt()
    }

    /// 张角项 δθ · β sinθ / (1 - β cosθ)
    pub fn solid_angle_broadening(&self, angle_deg: f64) -> f64 {
        let angle_rad = angle_deg.to_radians();
        self.angular_coverage_rad * self.beta * angle_rad.sin() / self.denominator(angle_rad)
    }

    /// β 分布项 δβ · |cosθ - β| / ((1 - β²)(1 - β cosθ))
    pub fn beta_broadening(&self, angle_deg: f64) -> f64 {
        let angle_rad = angle_deg.to_radians();
        self.beta_spread * (angle_rad.cos() - self.beta).abs()
            / ((1.0 - self.beta * self.beta) * self.denominator(angle_rad))
    }

    /// 三项平方和开方。不含发射能量的 δE/E 项
    pub fn total_broadening(&self, angle_deg: f64) -> f64 {
        let energy = self.energy_broadening(angle_deg);
        let solid_angle = self.solid_angle_broadening(angle_deg);
        let beta = self.beta_broadening(angle_deg);
        (energy * energy + solid_angle * solid_angle + beta * beta).sqrt()
    }

    /// 按分量求值
    pub fn evaluate(&self, component: Component, angle_deg: f64) -> f64 {
        match component {
            Component::Energy => self.energy_broadening(angle_deg),
            Component::SolidAngle => self.solid_angle_broadening(angle_deg),
            Component::Beta => self.beta_broadening(angle_deg),
            Component::Total => self.total_broadening(angle_deg),
        }
    }

    /// 一次求出全部分量，共享三角函数与分母
    pub fn components(&self, angle_deg: f64) -> Broadening {
        let angle_rad = angle_deg.to_radians();
        let (sin, cos) = angle_rad.sin_cos();
        let gamma_factor = 1.0 - self.beta * self.beta;
        let denominator = 1.0 - self.beta * cos;

        let shifted = self.energy_mev * gamma_factor / denominator;
        let energy = self.resolution_const / shifted.sqrt();
        let solid_angle = self.angular_coverage_rad * self.beta * sin / denominator;
        let beta = self.beta_spread * (cos - self.beta).abs() / (gamma_factor * denominator);

        Broadening {
            energy,
            solid_angle,
            beta,
            total: (energy * energy + solid_angle * solid_angle + beta * beta).sqrt(),
        }
    }
}

/// 两个独立贡献的平方和开方
///
/// 用于在外部加入发射能量宽度 δE/E 等与角度无关的系统项。
pub fn add_in_quadrature(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// 角度是否位于 [0°, 180°]
pub fn is_physical_angle(angle_deg: f64) -> bool {
    angle_deg >= PHYSICAL_DOMAIN_DEG.0 && angle_deg <= PHYSICAL_DOMAIN_DEG.1
}
