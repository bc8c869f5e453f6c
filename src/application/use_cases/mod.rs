//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **PlanEntriesUseCase**: 送信対象エントリの計画
//! - **SubmitEntriesUseCase**: エントリのバッチ送信

pub mod plan_entries;
pub mod submit_entries;
