//! # CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 在宅勤務手当をポータルにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "allowsync")]
#[command(
    about = "Upload home office allowance entries for the business days of a month",
    long_about = None
)]
pub struct Args {
    /// Portal base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Portal username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Portal password (falls back to the ALLOWSYNC_PASSWORD env var)
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Description attached to every allowance entry
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Hours per allowance entry
    #[arg(long)]
    pub hours: Option<u32>,

    /// Minutes per allowance entry
    #[arg(long)]
    pub minutes: Option<u32>,

    /// Month to upload allowance for (1-12, defaults to the current month)
    #[arg(short = 'm', long)]
    pub month: Option<u32>,

    /// Year to upload allowance for (defaults to the current year)
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Milliseconds to wait between allowance uploads
    #[arg(short = 't', long)]
    pub throttle: Option<u64>,

    /// Working days of the month to skip (e.g. -x 12 20 21)
    #[arg(short = 'x', long = "exclude", num_args = 1.., value_name = "DAY")]
    pub exclude: Vec<u32>,

    /// Dry run mode - don't actually submit
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}
