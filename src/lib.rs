//! photo-rename-ai ライブラリ
//!
//! 画像キャプションから命名し、編集状態を管理してZIPに一括出力する。

pub mod ai_provider;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod review;
pub mod scanner;
pub mod session;
pub mod store;

pub use error::{RenameError, Result};
pub use session::Session;
pub use store::{Item, ItemId, ItemState, ItemStore};

/// デフォルトの出力ZIP名
pub fn default_archive_name() -> String {
    format!("renamed_images_{}.zip", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
