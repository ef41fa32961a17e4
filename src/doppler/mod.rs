//! # Doppler 展宽计算模块
//!
//! 在角度网格上采样展宽模型，并交给绘图和导出。
//!
//! ## 子模块
//! - `sampler`: 角度网格与并行采样
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/broadening.rs`

pub mod export;
pub mod plot;
pub mod sampler;

pub use sampler::{sample, AngleGrid, SampledCurves};
