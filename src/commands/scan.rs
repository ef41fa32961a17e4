//! # scan 子命令实现
//!
//! 从 CSV 扫描表读取多组模型参数，并行计算并为每组写出一个文件。
//!
//! ## 功能
//! - 并行计算（rayon）
//! - 已存在的输出默认跳过
//! - 非法参数组记为失败，不中断其余计算
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的 ScanArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `doppler/` 模块进行采样和输出

use crate::batch::{self, BatchRunner, ProcessResult, ScanJob};
use crate::cli::scan::ScanArgs;
use crate::cli::OutputFormat;
use crate::doppler::{self, plot::PlotOptions, AngleGrid};
use crate::error::{DopplerError, Result};
use crate::models::BroadeningModel;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 批量处理配置
struct ScanConfig {
    output_dir: PathBuf,
    grid: AngleGrid,
    format: OutputFormat,
    width: u32,
    height: u32,
    overwrite: bool,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Doppler Broadening Parameter Scan");

    let jobs = batch::read_scan_file(&args.input)?;
    if jobs.is_empty() {
        output::print_warning(&format!(
            "No parameter sets found in '{}'",
            args.input.display()
        ));
        return Ok(());
    }
    output::print_info(&format!("Found {} parameter sets", jobs.len()));

    let grid = AngleGrid::parse_range(&args.range, args.step)?;

    fs::create_dir_all(&args.output).map_err(|e| DopplerError::write(&args.output, e))?;

    output::print_info(&format!("Output format: {:?}", args.format));

    let config = ScanConfig {
        output_dir: args.output.clone(),
        grid,
        format: args.format,
        width: args.width,
        height: args.height,
        overwrite: args.overwrite,
    };

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&jobs, |job| process_job(job, &config))?;

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} parameter sets ({} success, {} skipped, {} failed)",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed parameter sets:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 单组参数的输出路径
fn output_path(config: &ScanConfig, job: &ScanJob) -> PathBuf {
    config.output_dir.join(format!(
        "{}_broadening.{}",
        job.name,
        config.format.extension()
    ))
}

/// 处理单组参数
fn process_job(job: &ScanJob, config: &ScanConfig) -> ProcessResult {
    let output_file = output_path(config, job);

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match compute_and_write(job, &output_file, config) {
        Ok(()) => ProcessResult::Success(format!("{} -> {}", job.name, output_file.display())),
        Err(e) => ProcessResult::Failed(job.name.clone(), e.to_string()),
    }
}

fn compute_and_write(job: &ScanJob, output_file: &Path, config: &ScanConfig) -> Result<()> {
    let model = BroadeningModel::new(job.params)?;
    let curves = doppler::sample(&model, &config.grid);

    let options = PlotOptions {
        title: format!("{} ({})", job.name, job.params),
        width: config.width,
        height: config.height,
        ..PlotOptions::default()
    };

    super::write_curves(&curves, &job.name, output_file, config.format, &options)
}
