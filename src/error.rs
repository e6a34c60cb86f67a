use crate::store::{ItemId, ItemState};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("未対応の拡張子です (jpg/jpeg/png): {0}")]
    UnsupportedExtension(String),

    #[error("キャプション生成エラー: {0}")]
    CaptionFailure(String),

    #[error("翻訳エラー: {0}")]
    TranslationFailure(String),

    #[error("状態遷移エラー: #{id} は {state} のため解析できません")]
    InvalidTransition { id: ItemId, state: ItemState },

    #[error("画像が見つかりません: #{0}")]
    UnknownItem(ItemId),

    #[error("ファイル名が不正です: {0:?}")]
    InvalidName(String),

    #[error("画像エンコードエラー: #{id}: {reason}")]
    EncodeFailure { id: ItemId, reason: String },

    #[error("ZIP生成エラー: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenameError>;
