//! # 参数扫描表读取
//!
//! 从 CSV 文件读取一组模型参数，每行对应一次计算。
//!
//! ## 文件格式
//! ```text
//! name,energy_mev,beta,d_theta_deg,resolution_const,d_beta
//! fast,1.0,0.5,0.1,1.0,0.01
//! slow,1.0,0.05,,,
//! ```
//! 后三列可留空，取默认值。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `models/parameters.rs` 的 BroadeningParams
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{DopplerError, Result};
use crate::models::parameters::{DEFAULT_D_BETA, DEFAULT_D_THETA_DEG, DEFAULT_RESOLUTION_CONST};
use crate::models::BroadeningParams;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// 扫描表中的一行
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanRecord {
    /// 输出文件名前缀；为空时使用行号
    #[serde(default)]
    pub name: Option<String>,
    pub energy_mev: f64,
    pub beta: f64,
    #[serde(default)]
    pub d_theta_deg: Option<f64>,
    #[serde(default)]
    pub resolution_const: Option<f64>,
    #[serde(default)]
    pub d_beta: Option<f64>,
}

impl ScanRecord {
    /// 转换为模型参数，空列取默认值
    pub fn params(&self) -> BroadeningParams {
        BroadeningParams::new(self.energy_mev, self.beta)
            .with_coverage_deg(self.d_theta_deg.unwrap_or(DEFAULT_D_THETA_DEG))
            .with_resolution_const(self.resolution_const.unwrap_or(DEFAULT_RESOLUTION_CONST))
            .with_beta_spread(self.d_beta.unwrap_or(DEFAULT_D_BETA))
    }
}

/// 带编号的扫描任务
#[derive(Debug, Clone)]
pub struct ScanJob {
    pub name: String,
    pub params: BroadeningParams,
}

/// 读取扫描表
pub fn read_scan_file(path: &Path) -> Result<Vec<ScanJob>> {
    if !path.exists() {
        return Err(DopplerError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| DopplerError::read(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(file);

    read_records(&mut rdr).map_err(|e| match e {
        // 底层读取失败（如路径是目录）与格式错误区分开
        DopplerError::CsvError(err) if err.is_io_error() => match err.into_kind() {
            csv::ErrorKind::Io(source) => DopplerError::read(path, source),
            kind => DopplerError::Other(format!("{:?}", kind)),
        },
        other => other,
    })
}

fn read_records<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<ScanJob>> {
    let mut jobs = Vec::new();
    let mut used = HashSet::new();

    for (i, record) in rdr.deserialize::<ScanRecord>().enumerate() {
        let record = record?;
        let base = match record.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => sanitize_name(n),
            _ => format!("set_{:03}", i + 1),
        };
        let name = unique_name(base, &mut used);
        jobs.push(ScanJob {
            name,
            params: record.params(),
        });
    }

    Ok(jobs)
}

/// 重名（包括清理后重名）时追加 `_2`, `_3`, ... 后缀，保证每组输出文件不同
fn unique_name(base: String, used: &mut HashSet<String>) -> String {
    let mut name = base.clone();
    let mut suffix = 2;
    while used.contains(&name) {
        name = format!("{}_{}", base, suffix);
        suffix += 1;
    }
    used.insert(name.clone());
    name
}

/// 把名称中不适合出现在文件名里的字符替换为下划线
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<ScanJob>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(text.as_bytes());
        read_records(&mut rdr)
    }

    #[test]
    fn test_full_and_default_columns() {
        let jobs = parse(
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             fast,1.0,0.5,0.1,2.0,0.01\n\
             ,0.662,0.05,,,\n",
        )
        .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].name, "fast");
        assert_eq!(jobs[0].params.resolution_const, 2.0);
        assert_eq!(jobs[0].params.d_beta, 0.01);

        assert_eq!(jobs[1].name, "set_002");
        assert_eq!(jobs[1].params.energy_mev, 0.662);
        assert_eq!(jobs[1].params.d_theta_deg, 0.0);
        assert_eq!(jobs[1].params.resolution_const, 1.0);
        assert_eq!(jobs[1].params.d_beta, 0.0);
    }

    #[test]
    fn test_comments_skipped_and_names_sanitized() {
        let jobs = parse(
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             # calibration runs\n\
             Co 60/a,1.173,0.1,1,1,0\n",
        )
        .unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "Co_60_a");
    }

    #[test]
    fn test_colliding_names_get_suffix() {
        let jobs = parse(
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             Co 60,1.173,0.1,,,\n\
             Co_60,1.332,0.1,,,\n\
             Co 60,1.173,0.2,,,\n\
             set_004,1.0,0.3,,,\n\
             ,1.0,0.4,,,\n",
        )
        .unwrap();

        let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Co_60", "Co_60_2", "Co_60_3", "set_004", "set_005"]
        );
    }

    #[test]
    fn test_default_name_collides_with_explicit() {
        let jobs = parse(
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             set_002,1.0,0.1,,,\n\
             ,1.0,0.2,,,\n",
        )
        .unwrap();

        assert_eq!(jobs[0].name, "set_002");
        assert_eq!(jobs[1].name, "set_002_2");
    }

    #[test]
    fn test_malformed_row_is_error() {
        let result = parse(
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             bad,abc,0.1,,,\n",
        );
        assert!(matches!(result, Err(DopplerError::CsvError(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("dopbroad_no_such_scan.csv");
        assert!(matches!(
            read_scan_file(&path),
            Err(DopplerError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = std::env::temp_dir().join("dopbroad_scan_dir_input");
        std::fs::create_dir_all(&dir).unwrap();

        match read_scan_file(&dir) {
            Err(DopplerError::FileReadError { path, .. }) => {
                assert_eq!(path, dir.display().to_string());
            }
            other => panic!("expected read error, got {:?}", other),
        }

        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn test_read_scan_file_from_disk() {
        let path = std::env::temp_dir().join("dopbroad_scan_table.csv");
        std::fs::write(
            &path,
            "name,energy_mev,beta,d_theta_deg,resolution_const,d_beta\n\
             a,1.0,0.5,,,\n\
             a,1.0,0.6,,,\n",
        )
        .unwrap();

        let jobs = read_scan_file(&path).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].name, "a_2");
        assert_eq!(jobs[1].params.beta, 0.6);

        let _ = std::fs::remove_file(&path);
    }
}
