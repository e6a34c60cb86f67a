//! 対話式セッションメニュー
//!
//! 画像の追加 → 解析 → 確認・編集 → 出力 を何度でも繰り返せる。
//! 追加した画像は未解析として積み増され、解析は未解析分のみに行う。

use crate::analyzer::{Captioner, Translator};
use crate::error::{RenameError, Result};
use crate::review::run_review;
use crate::scanner;
use crate::session::Session;
use crate::store::ItemId;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use photo_rename_common::CATEGORIES;
use std::path::PathBuf;

const MENU: &[&str] = &[
    "フォルダから画像を追加",
    "未解析の画像を解析",
    "一覧を表示",
    "確認・名前を編集",
    "画像を削除",
    "ジャンルを変更",
    "ZIPに出力",
    "終了",
];

fn dialog_error(e: dialoguer::Error) -> RenameError {
    RenameError::CliExecution(e.to_string())
}

/// 対話メニューを実行
pub fn run_session_menu<C, T>(session: &mut Session<C, T>, mut category: String, recursive: bool) -> Result<()>
where
    C: Captioner,
    T: Translator,
{
    loop {
        println!(
            "\n📂 画像 {}枚 (未解析 {}枚) / ジャンル: {}",
            session.store().len(),
            session.store().pending_ids().len(),
            category
        );

        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(MENU)
            .default(0)
            .interact()
            .map_err(dialog_error)?;

        match choice {
            0 => {
                let folder: String = Input::new()
                    .with_prompt("フォルダのパス")
                    .interact_text()
                    .map_err(dialog_error)?;
                match add_folder(session, &PathBuf::from(folder.trim()), recursive) {
                    Ok(count) => println!("✔ {}枚を追加", count),
                    Err(e) => println!("⚠ {}", e),
                }
            }
            1 => {
                let failures = classify_with_progress(session, &category);
                if !failures.is_empty() {
                    println!("⚠ 失敗した {}枚は未解析のまま残ります（再度解析できます）", failures.len());
                }
            }
            2 => print_items(session),
            3 => {
                let (renamed, deleted) = run_review(session)?;
                println!("✔ 変更 {}件 / 削除 {}件", renamed, deleted);
            }
            4 => {
                let id: u64 = Input::new()
                    .with_prompt("削除する画像のID")
                    .interact_text()
                    .map_err(dialog_error)?;
                match session.delete(ItemId(id)) {
                    Ok(()) => println!("✔ #{} を削除", id),
                    Err(e) => println!("⚠ {}", e),
                }
            }
            5 => category = select_category(&category)?,
            6 => {
                let default_name = crate::default_archive_name();
                let output: String = Input::new()
                    .with_prompt("出力ファイル")
                    .default(default_name)
                    .interact_text()
                    .map_err(dialog_error)?;
                export_to(session, &PathBuf::from(output.trim()))?;
            }
            _ => break,
        }
    }

    Ok(())
}

/// フォルダの画像をセッションに追加
pub fn add_folder<C, T>(session: &mut Session<C, T>, folder: &std::path::Path, recursive: bool) -> Result<usize>
where
    C: Captioner,
    T: Translator,
{
    let images = scanner::scan_folder(folder, recursive)?;
    if images.is_empty() {
        return Err(RenameError::NoImagesFound(folder.display().to_string()));
    }

    let files = scanner::read_images(&images);
    let added = session
        .ingest_batch(files)
        .into_iter()
        .filter_map(|r| r.map_err(|e| println!("⚠ {}", e)).ok())
        .count();
    Ok(added)
}

/// 未解析の画像を解析（プログレスバー付き）
///
/// # Returns
/// 失敗した画像の (ID, エラー) 一覧
pub fn classify_with_progress<C, T>(session: &mut Session<C, T>, category: &str) -> Vec<(ItemId, RenameError)>
where
    C: Captioner,
    T: Translator,
{
    let pending = session.store().pending_ids().len();
    if pending == 0 {
        println!("未解析の画像はありません");
        return Vec::new();
    }

    let progress = ProgressBar::new(pending as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}") {
        progress.set_style(style);
    }

    let outcomes = session.classify_pending_with_progress(category, |_| progress.inc(1));
    progress.finish_and_clear();

    let mut failures = Vec::new();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(name) => println!("  #{} → {}", id, name),
            Err(e) => {
                let original = session
                    .store()
                    .get(id)
                    .map(|i| i.original_name.clone())
                    .unwrap_or_default();
                println!("  ✖ #{} {} のエラー: {}", id, original, e);
                failures.push((id, e));
            }
        }
    }

    println!("✔ 解析完了 (成功 {}枚 / 失敗 {}枚)", pending - failures.len(), failures.len());
    failures
}

/// ZIPに出力してファイルへ保存
pub fn export_to<C, T>(session: &Session<C, T>, output: &std::path::Path) -> Result<()>
where
    C: Captioner,
    T: Translator,
{
    let report = session.export_archive()?;
    report.write_to(output)?;

    for (id, e) in &report.skipped {
        println!("  ✖ #{} をスキップ: {}", id, e);
    }
    println!("✔ {}件をZIP出力: {}", report.entries.len(), output.display());
    Ok(())
}

fn print_items<C, T>(session: &Session<C, T>)
where
    C: Captioner,
    T: Translator,
{
    let items = session.store().snapshot();
    if items.is_empty() {
        println!("画像がありません");
        return;
    }

    for item in items {
        println!(
            "  #{:<3} [{}] {} ← {}",
            item.id,
            item.state,
            item.file_name(),
            item.original_name
        );
    }
}

fn select_category(current: &str) -> Result<String> {
    let mut options: Vec<&str> = CATEGORIES.to_vec();
    options.push("(自由入力)");

    let default = CATEGORIES.iter().position(|c| *c == current).unwrap_or(0);
    let choice = Select::new()
        .with_prompt("ジャンルを選択")
        .items(&options)
        .default(default)
        .interact()
        .map_err(dialog_error)?;

    if choice < CATEGORIES.len() {
        return Ok(CATEGORIES[choice].to_string());
    }

    let custom: String = Input::new()
        .with_prompt("ジャンル")
        .interact_text()
        .map_err(dialog_error)?;
    Ok(custom.trim().to_string())
}
