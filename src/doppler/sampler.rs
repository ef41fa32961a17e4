//! # 角度网格采样
//!
//! 在极角网格上对四个展宽函数求值，供绘图和导出使用。
//!
//! ## 说明
//! 每个网格点的计算互相独立，使用 rayon 并行；输出保持网格顺序。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/scan.rs` 调用
//! - 使用 `models/broadening.rs` 的 BroadeningModel
//! - 使用 `rayon` 并行求值

use crate::error::{DopplerError, Result};
use crate::models::{Broadening, BroadeningModel, Component, PHYSICAL_DOMAIN_DEG};

use rayon::prelude::*;

/// 单个网格允许的最大点数
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// 极角采样网格（度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleGrid {
    pub start_deg: f64,
    pub end_deg: f64,
    pub step_deg: f64,
}

impl AngleGrid {
    /// 创建网格并校验
    pub fn new(start_deg: f64, end_deg: f64, step_deg: f64) -> Result<Self> {
        if !(start_deg.is_finite() && end_deg.is_finite() && step_deg.is_finite()) {
            return Err(DopplerError::InvalidRange(format!(
                "{}-{} step {} (values must be finite)",
                start_deg, end_deg, step_deg
            )));
        }
        if step_deg <= 0.0 {
            return Err(DopplerError::InvalidRange(format!(
                "step {} (must be > 0)",
                step_deg
            )));
        }
        if end_deg < start_deg {
            return Err(DopplerError::InvalidRange(format!(
                "{}-{} (end must not be below start)",
                start_deg, end_deg
            )));
        }
        let intervals = ((end_deg - start_deg) / step_deg).ceil();
        if intervals >= MAX_GRID_POINTS as f64 {
            return Err(DopplerError::InvalidRange(format!(
                "{}-{} step {} (more than {} points)",
                start_deg, end_deg, step_deg, MAX_GRID_POINTS
            )));
        }

        Ok(Self {
            start_deg,
            end_deg,
            step_deg,
        })
    }

    /// 覆盖完整物理范围 [0°, 180°]
    pub fn full(step_deg: f64) -> Result<Self> {
        Self::new(PHYSICAL_DOMAIN_DEG.0, PHYSICAL_DOMAIN_DEG.1, step_deg)
    }

    /// 解析 "min-max" 形式的角度范围
    pub fn parse_range(range: &str, step_deg: f64) -> Result<Self> {
        let parts: Vec<&str> = range.split('-').collect();
        if parts.len() != 2 {
            return Err(DopplerError::InvalidRange(range.to_string()));
        }

        let min: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| DopplerError::InvalidRange(range.to_string()))?;
        let max: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| DopplerError::InvalidRange(range.to_string()))?;

        if min < PHYSICAL_DOMAIN_DEG.0 || max <= min || max > PHYSICAL_DOMAIN_DEG.1 {
            return Err(DopplerError::InvalidRange(format!(
                "{} (must be 0 <= min < max <= 180)",
                range
            )));
        }

        Self::new(min, max, step_deg)
    }

    /// 网格点数（含两端）
    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// 所有网格点：从 start_deg 按步长递增，末点总是 end_deg
    pub fn points(&self) -> Vec<f64> {
        // 与 end_deg 相差不到该容差的点视为端点本身
        let tolerance = self.step_deg * 1e-6;
        let mut points: Vec<f64> = (0..MAX_GRID_POINTS)
            .map(|i| self.start_deg + i as f64 * self.step_deg)
            .take_while(|&angle| angle < self.end_deg - tolerance)
            .collect();
        points.push(self.end_deg);
        points
    }
}

/// 单个角度的采样结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub angle_deg: f64,
    pub values: Broadening,
}

/// 四条展宽曲线的采样数据
#[derive(Debug, Clone)]
pub struct SampledCurves {
    pub model: BroadeningModel,
    pub rows: Vec<SampleRow>,
}

impl SampledCurves {
    /// 单条曲线的 (角度, 数值) 序列
    pub fn series(&self, component: Component) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.angle_deg, row.values.get(component)))
            .collect()
    }

    /// 所有曲线中的最大值（用于确定纵轴范围）
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| Component::ALL.map(|c| row.values.get(c)))
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max)
    }

    /// 某条曲线的最大值位置
    pub fn peak(&self, component: Component) -> Option<(f64, f64)> {
        self.series(component)
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn angle_span(&self) -> Option<(f64, f64)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.angle_deg, last.angle_deg)),
            _ => None,
        }
    }
}

/// 在网格上并行求值
pub fn sample(model: &BroadeningModel, grid: &AngleGrid) -> SampledCurves {
    let rows = grid
        .points()
        .par_iter()
        .map(|&angle_deg| SampleRow {
            angle_deg,
            values: model.components(angle_deg),
        })
        .collect();

    SampledCurves {
        model: *model,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_points() {
        let grid = AngleGrid::full(0.5).unwrap();
        let points = grid.points();
        assert_eq!(points.len(), 361);
        assert_eq!(points[0], 0.0);
        assert_eq!(*points.last().unwrap(), 180.0);
    }

    #[test]
    fn test_uneven_step_clamps_last_point() {
        let grid = AngleGrid::new(0.0, 1.0, 0.3).unwrap();
        let points = grid.points();
        assert_eq!(points.len(), 5);
        assert_eq!(*points.last().unwrap(), 1.0);
    }

    #[test]
    fn test_rounding_does_not_duplicate_endpoint() {
        let grid = AngleGrid::new(0.0, 0.3, 0.1).unwrap();
        let points = grid.points();
        assert_eq!(points.len(), 4);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_step_close_to_span_keeps_endpoint() {
        let points = AngleGrid::new(0.0, 1.0, 0.9999999995).unwrap().points();
        assert_eq!(points, vec![0.0, 1.0]);

        let single = AngleGrid::new(45.0, 45.0, 1.0).unwrap();
        assert_eq!(single.points(), vec![45.0]);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            AngleGrid::full(1e-300),
            Err(DopplerError::InvalidRange(_))
        ));
        assert!(AngleGrid::new(0.0, 180.0, 1e-7).is_err());
        assert!(AngleGrid::parse_range("0-180", 1e-6).is_err());

        let fine = AngleGrid::full(180.0 / (MAX_GRID_POINTS / 2) as f64).unwrap();
        assert_eq!(fine.len(), MAX_GRID_POINTS / 2 + 1);
    }

    #[test]
    fn test_parse_range() {
        let grid = AngleGrid::parse_range("10-170", 1.0).unwrap();
        assert_eq!(grid.start_deg, 10.0);
        assert_eq!(grid.end_deg, 170.0);
        assert_eq!(grid.len(), 161);

        assert!(AngleGrid::parse_range("10", 1.0).is_err());
        assert!(AngleGrid::parse_range("90-10", 1.0).is_err());
        assert!(AngleGrid::parse_range("0-200", 1.0).is_err());
        assert!(AngleGrid::parse_range("a-b", 1.0).is_err());
        assert!(AngleGrid::parse_range("0-180", 0.0).is_err());
    }

    #[test]
    fn test_sample_preserves_order_and_values() {
        let model = BroadeningModel::from_values(1.0, 0.5, 0.1, 1.0, 0.01).unwrap();
        let grid = AngleGrid::full(1.0).unwrap();
        let curves = sample(&model, &grid);

        assert_eq!(curves.rows.len(), 181);
        for (i, row) in curves.rows.iter().enumerate() {
            assert_eq!(row.angle_deg, i as f64);
            assert_eq!(row.values, model.components(row.angle_deg));
        }

        let at_60 = curves.rows[60].values;
        assert!((at_60.energy - 1.0).abs() < 1e-12);
        assert_eq!(curves.angle_span(), Some((0.0, 180.0)));
    }

    #[test]
    fn test_peak_and_max() {
        // β = 0.5 时 E' 在 180° 最小，本征项在 180° 最大
        let model = BroadeningModel::from_values(1.0, 0.5, 0.0, 1.0, 0.0).unwrap();
        let curves = sample(&model, &AngleGrid::full(1.0).unwrap());

        let (angle, value) = curves.peak(Component::Energy).unwrap();
        assert_eq!(angle, 180.0);
        assert!((value - model.energy_broadening(180.0)).abs() < 1e-12);
        assert!(curves.max_value() >= value);
    }
}
