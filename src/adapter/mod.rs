//! Adapter Layer
//!
//! 外部システム（Box API, ファイルシステム, 環境変数）との統合

pub mod box_api;
pub mod config;
pub mod repositories;
