//! Boxsync - CSV Uploader
//!
//! ローカルのCSVファイルをBoxのフォルダにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use adapter::config::Settings;
use driver::{Args, CsvUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    configure_logging(args.verbose);

    // Load configuration
    let settings = Settings::from_env(args.env_file.as_deref().map(Path::new))?;

    // Create workflow with injected dependencies
    let workflow = CsvUploadWorkflow::new(settings);

    let exit_code = workflow.execute(args).await?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// RUST_LOG が未設定の場合のログレベルを決める
fn configure_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
