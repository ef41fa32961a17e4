//! # 数据模型模块
//!
//! 定义 Doppler 展宽模型及其输入参数。
//!
//! ## 依赖关系
//! - 被 `doppler/`, `batch/` 和 `commands/` 使用
//! - 子模块: parameters, broadening

pub mod broadening;
pub mod parameters;

pub use broadening::{
    add_in_quadrature, is_physical_angle, Broadening, BroadeningModel, Component,
    PHYSICAL_DOMAIN_DEG,
};
pub use parameters::BroadeningParams;
