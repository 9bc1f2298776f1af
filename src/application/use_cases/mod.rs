//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverFilesUseCase**: CSVファイルの発見
//! - **UploadFilesUseCase**: アップロードのオーケストレーションとリトライ
//! - **GenerateDummyUseCase**: ダミーCSVの生成

pub mod discover_files;
pub mod generate_dummy;
pub mod upload_files;
