//! ZIP一括出力モジュール
//!
//! 解析済み・編集済みの画像を ID 順に再エンコードし、
//! 衝突解消済みの `<名前>.<拡張子>` でZIPに格納する。
//! 1枚のエンコード失敗は全体を中断せず、スキップしたIDとして報告する。

use crate::error::{RenameError, Result};
use crate::store::{Item, ItemId};
use image::{DynamicImage, ImageFormat};
use photo_rename_common::{entry_name, resolve_unique_names, EncodeFormat};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 出力結果
#[derive(Debug)]
pub struct ExportReport {
    /// ZIPファイルのバイト列
    pub archive: Vec<u8>,
    /// 格納したエントリ名（ID順）
    pub entries: Vec<(ItemId, String)>,
    /// エンコードに失敗して除外した画像
    pub skipped: Vec<(ItemId, RenameError)>,
}

impl ExportReport {
    pub fn skipped_ids(&self) -> Vec<ItemId> {
        self.skipped.iter().map(|(id, _)| *id).collect()
    }

    /// ZIPをファイルに保存
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.archive)?;
        Ok(())
    }
}

/// 画像をZIPに書き出す
///
/// `items` はID昇順であること（`ItemStore::snapshot` の順序）。
/// 未解析の画像は対象外。
pub fn export_archive(items: &[&Item]) -> Result<ExportReport> {
    let exportable: Vec<&Item> = items.iter().copied().filter(|item| item.is_exportable()).collect();

    let pairs: Vec<(&str, &str)> = exportable
        .iter()
        .map(|item| (item.current_name.as_str(), item.extension.as_str()))
        .collect();
    let names = resolve_unique_names(&pairs);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (item, name) in exportable.iter().zip(names) {
        let bytes = match encode_image(item) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("#{} {} をスキップ: {}", item.id, item.original_name, e);
                skipped.push((item.id, e));
                continue;
            }
        };

        let entry = entry_name(&name, &item.extension);
        zip.start_file(entry.as_str(), options)?;
        zip.write_all(&bytes)?;
        entries.push((item.id, entry));
    }

    let archive = zip.finish()?.into_inner();

    Ok(ExportReport {
        archive,
        entries,
        skipped,
    })
}

/// 画像を保存形式で再エンコードする
///
/// JPEGはアルファを持てないためRGBに変換してから書き出す。
pub fn encode_image(item: &Item) -> Result<Vec<u8>> {
    let image = image::load_from_memory(&item.image_bytes).map_err(|e| RenameError::EncodeFailure {
        id: item.id,
        reason: e.to_string(),
    })?;

    let mut buffer = Cursor::new(Vec::new());
    let written = match item.encode_format {
        EncodeFormat::Png => image.write_to(&mut buffer, ImageFormat::Png),
        EncodeFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buffer, ImageFormat::Jpeg)
        }
    };

    written.map_err(|e| RenameError::EncodeFailure {
        id: item.id,
        reason: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}
