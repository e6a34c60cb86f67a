//! リネームセッション
//!
//! ホスト（CLI・対話メニュー）向けの操作窓口。
//! 取り込み・未解析画像の解析・リネーム・削除・ZIP出力を同期的に提供する。
//!
//! 未解析画像の解析は画像ごとに独立なので並列に実行し、
//! ストアへの反映はID昇順で一括して行う。

use crate::analyzer::{describe_image, Captioner, Description, NamingOptions, Translator};
use crate::error::Result;
use crate::export::{self, ExportReport};
use crate::store::{Item, ItemId, ItemState, ItemStore};
use photo_rename_common::strip_illegal_chars;
use rayon::prelude::*;

/// 1枚ごとの処理結果
pub type ItemOutcome<T> = (ItemId, Result<T>);

pub struct Session<C, T> {
    store: ItemStore,
    captioner: C,
    translator: T,
    options: NamingOptions,
}

impl<C, T> Session<C, T>
where
    C: Captioner,
    T: Translator,
{
    pub fn new(captioner: C, translator: T, options: NamingOptions) -> Self {
        Self {
            store: ItemStore::new(),
            captioner,
            translator,
            options,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn options(&self) -> &NamingOptions {
        &self.options
    }

    /// 画像をまとめて取り込む（入力順にIDを割り当て）
    pub fn ingest_batch(&mut self, files: Vec<(Vec<u8>, String)>) -> Vec<Result<ItemId>> {
        files
            .into_iter()
            .map(|(bytes, name)| self.store.ingest(bytes, &name))
            .collect()
    }

    /// 未解析の画像だけを解析して命名する
    ///
    /// 解析済み・編集済みの画像には触れない。
    /// キャプション生成に失敗した画像はエラーとして返し、`Pending` のまま残す。
    /// ジャンルからはファイル名に使えない文字（パス区切りを含む）を除く。
    pub fn classify_pending(&mut self, category: &str) -> Vec<ItemOutcome<String>> {
        self.classify_pending_with_progress(category, |_| {})
    }

    /// `classify_pending` と同じ。1枚解析するごとに `on_done` を呼ぶ
    pub fn classify_pending_with_progress<F>(&mut self, category: &str, on_done: F) -> Vec<ItemOutcome<String>>
    where
        F: Fn(ItemId) + Sync,
    {
        let described: Vec<ItemOutcome<Description>> = {
            let pending: Vec<&Item> = self
                .store
                .snapshot()
                .into_iter()
                .filter(|item| item.state == ItemState::Pending)
                .collect();

            pending
                .par_iter()
                .map(|item| {
                    let result = describe_image(&self.captioner, &self.translator, &self.options, &item.image_bytes);
                    on_done(item.id);
                    (item.id, result)
                })
                .collect()
        };

        let category = strip_illegal_chars(category);
        let category = category.trim();
        let style = self.options.label_style;
        described
            .into_iter()
            .map(|(id, result)| {
                let outcome = result.and_then(|d| {
                    self.store
                        .classify(id, d.raw_caption, d.classification, category, &d.action, style)
                        .map(|name| name.to_string())
                });
                if let Err(e) = &outcome {
                    tracing::warn!("#{} の解析に失敗: {}", id, e);
                }
                (id, outcome)
            })
            .collect()
    }

    pub fn rename(&mut self, id: ItemId, new_name: &str) -> Result<()> {
        self.store.rename(id, new_name)
    }

    pub fn delete(&mut self, id: ItemId) -> Result<()> {
        self.store.delete(id).map(|_| ())
    }

    /// 現在の状態をZIPに書き出す
    pub fn export_archive(&self) -> Result<ExportReport> {
        export::export_archive(&self.store.snapshot())
    }
}
