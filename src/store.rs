//! 画像状態ストア
//!
//! 取り込み時に割り当てた固定IDで画像を管理する。
//! IDは単調増加で再利用せず、削除や再解析で他の画像のIDがずれることはない。
//!
//! ## 状態遷移
//! - 取り込み → `Pending`
//! - `Pending` → `Captioned`（解析成功時に一度だけ）
//! - 任意の状態 → `Edited`（ユーザーによるリネーム）
//! - 削除 → ストアから完全に除去

use crate::error::{RenameError, Result};
use photo_rename_common::naming::{synthesize_name, LabelStyle};
use photo_rename_common::{strip_illegal_chars, ClassificationResult, EncodeFormat, FileFormat};
use std::collections::BTreeMap;
use std::fmt;

/// 画像の固定ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 命名状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Captioned,
    Edited,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemState::Pending => write!(f, "未解析"),
            ItemState::Captioned => write!(f, "解析済み"),
            ItemState::Edited => write!(f, "編集済み"),
        }
    }
}

/// 1枚の画像とその命名状態
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub original_name: String,
    /// 正規化済み拡張子（jpg / png）
    pub extension: String,
    pub encode_format: EncodeFormat,
    pub image_bytes: Vec<u8>,
    /// AIキャプション（英語、正規化前）
    pub raw_caption: String,
    pub classification: Option<ClassificationResult>,
    pub state: ItemState,
    pub current_name: String,
}

impl Item {
    pub fn mime_type(&self) -> &'static str {
        self.encode_format.mime_type()
    }

    /// 出力ファイル名（衝突解消前）
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.current_name, self.extension)
    }

    /// ZIP出力の対象か（未解析の画像は含めない）
    pub fn is_exportable(&self) -> bool {
        self.state != ItemState::Pending
    }
}

/// IDをキーにした画像ストア（ID昇順）
#[derive(Debug, Default)]
pub struct ItemStore {
    items: BTreeMap<ItemId, Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を取り込み、新しいIDを割り当てる
    pub fn ingest(&mut self, image_bytes: Vec<u8>, original_name: &str) -> Result<ItemId> {
        let format = FileFormat::from_file_name(original_name)
            .ok_or_else(|| RenameError::UnsupportedExtension(original_name.to_string()))?;

        let id = ItemId(self.next_id);
        self.next_id += 1;

        self.items.insert(
            id,
            Item {
                id,
                original_name: original_name.to_string(),
                extension: format.extension,
                encode_format: format.encode_format,
                image_bytes,
                raw_caption: String::new(),
                classification: None,
                state: ItemState::Pending,
                current_name: format.stem,
            },
        );

        Ok(id)
    }

    /// 解析結果を反映する（`Pending` の画像のみ）
    ///
    /// 解析済み・編集済みの画像に対しては `InvalidTransition` を返し、
    /// 既存の名前を保持する。
    pub fn classify(
        &mut self,
        id: ItemId,
        raw_caption: String,
        result: ClassificationResult,
        category: &str,
        action: &str,
        style: LabelStyle,
    ) -> Result<&str> {
        let item = self.items.get_mut(&id).ok_or(RenameError::UnknownItem(id))?;

        if item.state != ItemState::Pending {
            return Err(RenameError::InvalidTransition {
                id,
                state: item.state,
            });
        }

        item.current_name = synthesize_name(category, &result, action, style);
        item.raw_caption = raw_caption;
        item.classification = Some(result);
        item.state = ItemState::Captioned;

        Ok(item.current_name.as_str())
    }

    /// ユーザーによるリネーム（どの状態からでも `Edited` へ）
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> Result<()> {
        let item = self.items.get_mut(&id).ok_or(RenameError::UnknownItem(id))?;

        let name = strip_illegal_chars(new_name).trim().to_string();
        if name.is_empty() {
            return Err(RenameError::InvalidName(new_name.to_string()));
        }

        item.current_name = name;
        item.state = ItemState::Edited;
        Ok(())
    }

    /// 画像を削除する（IDは再利用されない）
    pub fn delete(&mut self, id: ItemId) -> Result<Item> {
        self.items.remove(&id).ok_or(RenameError::UnknownItem(id))
    }

    /// ID昇順の一覧
    pub fn snapshot(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// 未解析の画像ID（昇順）
    pub fn pending_ids(&self) -> Vec<ItemId> {
        self.items
            .values()
            .filter(|item| item.state == ItemState::Pending)
            .map(|item| item.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
