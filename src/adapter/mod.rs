//! # Adapter Layer
//!
//! 外部システム（ポータルHTTP API, 設定ファイル）との統合

pub mod config;
pub mod portal;
pub mod repositories;
