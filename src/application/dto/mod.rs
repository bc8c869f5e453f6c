//! # Application DTOs
//!
//! アプリケーション層のData Transfer Object

pub mod batch_config;
