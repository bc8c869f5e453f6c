//! Allowsync - Home Office Allowance Uploader
//!
//! 在宅勤務手当のエントリをポータルにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use allowsync::adapter::config::Config;
use allowsync::driver::{AllowanceUploadWorkflow, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (falls back to built-in defaults)
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Create workflow with injected configuration
    let workflow = AllowanceUploadWorkflow::new(config);

    workflow.execute(args).await
}
