//! # 展宽数据导出
//!
//! 导出采样曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: angle_deg, energy, solid_angle, beta, total
//! - XY: `#` 注释头记录模型参数，之后为制表符分隔的数据列
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/scan.rs` 调用
//! - 使用 `doppler/sampler.rs` 的 SampledCurves
//! - 使用 `csv` 库写入 CSV 文件

use crate::doppler::SampledCurves;
use crate::error::{DopplerError, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 数据列标题
pub const COLUMNS: [&str; 5] = ["angle_deg", "energy", "solid_angle", "beta", "total"];

/// 导出为 CSV 格式
pub fn to_csv(curves: &SampledCurves, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(COLUMNS)?;

    for row in &curves.rows {
        wtr.write_record(&[
            format!("{:.4}", row.angle_deg),
            format!("{:.8e}", row.values.energy),
            format!("{:.8e}", row.values.solid_angle),
            format!("{:.8e}", row.values.beta),
            format!("{:.8e}", row.values.total),
        ])?;
    }

    wtr.flush()
        .map_err(|e| DopplerError::write(output_path, e))?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(curves: &SampledCurves, name: &str, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| DopplerError::write(output_path, e))?;
    let mut out = BufWriter::new(file);

    write_xy(&mut out, curves, name).map_err(|e| DopplerError::write(output_path, e))
}

fn write_xy<W: Write>(out: &mut W, curves: &SampledCurves, name: &str) -> std::io::Result<()> {
    let params = curves.model.params();

    writeln!(out, "# Doppler Broadening: {}", name)?;
    writeln!(out, "# Gamma energy: {} MeV", params.energy_mev)?;
    writeln!(out, "# Beta: {}", params.beta)?;
    writeln!(out, "# Angular coverage: {} deg", params.d_theta_deg)?;
    writeln!(out, "# Resolution constant: {} sqrt(MeV)", params.resolution_const)?;
    writeln!(out, "# Beta spread: {}", params.d_beta)?;
    writeln!(out, "# Columns: {}", COLUMNS.join("\t"))?;
    writeln!(out, "#")?;

    for row in &curves.rows {
        writeln!(
            out,
            "{:.4}\t{:.8e}\t{:.8e}\t{:.8e}\t{:.8e}",
            row.angle_deg,
            row.values.energy,
            row.values.solid_angle,
            row.values.beta,
            row.values.total
        )?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doppler::{sample, AngleGrid};
    use crate::models::BroadeningModel;

    fn curves() -> SampledCurves {
        let model = BroadeningModel::from_values(1.0, 0.5, 0.1, 1.0, 0.01).unwrap();
        sample(&model, &AngleGrid::full(30.0).unwrap())
    }

    #[test]
    fn test_csv_export() {
        let curves = curves();
        let path = std::env::temp_dir().join("dopbroad_export_test.csv");
        to_csv(&curves, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());

        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 7);

        // 60° 处本征项为 1
        let angle: f64 = records[2][0].parse().unwrap();
        let energy: f64 = records[2][1].parse().unwrap();
        assert_eq!(angle, 60.0);
        assert!((energy - 1.0).abs() < 1e-7);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_xy_header_and_rows() {
        let curves = curves();
        let mut buf = Vec::new();
        write_xy(&mut buf, &curves, "test").unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# Doppler Broadening: test"));
        assert!(text.contains("# Beta: 0.5"));

        let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 7);
        assert_eq!(data[0].split('\t').count(), 5);
    }
}
