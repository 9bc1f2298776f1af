//! Box API Adapter Modules
//!
//! Box Upload API統合のためのアダプターモジュール

pub mod client;
pub mod models;
