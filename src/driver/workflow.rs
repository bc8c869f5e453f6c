//! # Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{anyhow, ensure, Result};
use chrono::{Datelike, Local, NaiveDate};
use log::info;

use std::sync::Arc;
use std::time::Instant;

use crate::adapter::config::Config;
use crate::adapter::repositories::http_allowance_repository::HttpAllowanceRepository;
use crate::application::dto::batch_config::BatchConfig;
use crate::application::use_cases::plan_entries::PlanEntriesUseCase;
use crate::application::use_cases::submit_entries::SubmitEntriesUseCase;
use crate::domain::entities::session::Credentials;
use crate::domain::services::schedule::ScheduleService;

use super::cli::Args;

/// パスワードのフォールバック用環境変数
const PASSWORD_ENV_VAR: &str = "ALLOWSYNC_PASSWORD";

/// 除外日の表示用フォーマット
fn as_long_date(date: &NaiveDate) -> String {
    date.format("%a, %b %d, %Y").to_string()
}

/// Allowance Upload Workflow
pub struct AllowanceUploadWorkflow {
    config: Config,
}

impl AllowanceUploadWorkflow {
    /// 新しいワークフローを作成
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 実行設定とCLI引数からバッチ設定を組み立てる
    ///
    /// 明示的なCLIフラグが設定ファイルの値より優先される
    fn batch_config(&self, args: &Args) -> BatchConfig {
        BatchConfig::new(
            args.url.clone().unwrap_or_else(|| self.config.base_url.clone()),
            args.description
                .clone()
                .unwrap_or_else(|| self.config.description.clone()),
            args.hours.unwrap_or(self.config.hours),
            args.minutes.unwrap_or(self.config.minutes),
            args.throttle.unwrap_or(self.config.throttle_ms),
        )
    }

    /// 資格情報を解決する
    ///
    /// パスワードはフラグが無ければ環境変数に落ちる
    fn resolve_credentials(args: &Args) -> Result<Credentials> {
        let username = args
            .username
            .clone()
            .ok_or_else(|| anyhow!("username is required (use --username)"))?;

        let password = match args.password.clone() {
            Some(password) => password,
            None => std::env::var(PASSWORD_ENV_VAR).map_err(|_| {
                anyhow!(
                    "password is required (use --password or the {} env var)",
                    PASSWORD_ENV_VAR
                )
            })?,
        };

        Ok(Credentials { username, password })
    }

    /// アップロードワークフローを実行する
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting allowance uploader...");
        info!("Dry run: {}", args.dry_run);

        let batch_config = self.batch_config(&args);
        ensure!(
            !batch_config.description.is_empty(),
            "description is required (use --description or a config file)"
        );

        let today = Local::now().date_naive();
        let month = args.month.unwrap_or_else(|| today.month());
        let year = args.year.unwrap_or_else(|| today.year());

        println!("✓ Using configuration:");
        println!("  Portal: {}", batch_config.base_url);
        println!("  Period: {:04}-{:02}", year, month);
        println!(
            "  Entry: {} ({}h {}m)",
            batch_config.description, batch_config.hours, batch_config.minutes
        );

        let entries = PlanEntriesUseCase::new().execute(&batch_config, year, month, &args.exclude)?;

        println!(
            "✓ Home office allowance will be uploaded for a total of {} days",
            entries.len()
        );

        let excluded = ScheduleService::excluded_dates(year, month, &args.exclude);
        if !excluded.is_empty() {
            println!(
                "⚠ Excluding dates: {}",
                excluded
                    .iter()
                    .map(as_long_date)
                    .collect::<Vec<_>>()
                    .join(" / ")
            );
        }

        if entries.is_empty() {
            println!("No entries to submit. Exiting.");
            return Ok(());
        }

        if args.dry_run {
            println!("✓ Dry-run mode (not actually submitting)");
            println!("  Would submit {} entries:", entries.len());
            for entry in &entries {
                println!(
                    "    - {} | {} | {}h {}m",
                    entry.form_date(),
                    entry.description(),
                    entry.hours(),
                    entry.minutes()
                );
            }
            return Ok(());
        }

        let credentials = Self::resolve_credentials(&args)?;
        let started = Instant::now();

        let repository = Arc::new(HttpAllowanceRepository::new(&batch_config.base_url)?);
        let use_case = SubmitEntriesUseCase::new(repository, batch_config.throttle());

        let summary = use_case.execute(&credentials, &entries).await?;

        println!("✓ Submitted {} entries", summary.submitted_count);
        println!("✓ All done in {} ms", started.elapsed().as_millis());

        Ok(())
    }
}
