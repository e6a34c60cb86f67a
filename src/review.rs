//! 対話式の命名確認モジュール
//!
//! 解析結果を1枚ずつ表示し、名前の変更・削除を受け付ける。

use crate::analyzer::{Captioner, Translator};
use crate::error::{RenameError, Result};
use crate::session::Session;
use crate::store::ItemId;
use dialoguer::{Input, Select};

/// 確認時の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// この名前のまま
    Keep,
    /// 残り全部そのまま
    KeepAll,
    /// 名前を変更
    Rename(String),
    /// 画像を削除
    Delete,
    /// 確認を終了
    Quit,
}

/// 操作メニュー（並びは `review_action` の選択番号に対応）
pub const REVIEW_CHOICES: &[&str] = &[
    "そのまま",
    "名前を変更",
    "削除",
    "残り全部そのまま",
    "終了",
];

/// 選択番号を操作に変換
///
/// 「名前を変更」のときだけ `new_name` で名前を受け取る。
/// 空の名前はそのまま扱い。
pub fn review_action<F>(choice: usize, new_name: F) -> Result<ReviewAction>
where
    F: FnOnce() -> Result<String>,
{
    let action = match choice {
        0 => ReviewAction::Keep,
        1 => match new_name()?.trim() {
            "" => ReviewAction::Keep,
            name => ReviewAction::Rename(name.to_string()),
        },
        2 => ReviewAction::Delete,
        3 => ReviewAction::KeepAll,
        _ => ReviewAction::Quit,
    };
    Ok(action)
}

/// 全画像を順に確認する
///
/// # Returns
/// 変更・削除した件数
pub fn run_review<C, T>(session: &mut Session<C, T>) -> Result<(usize, usize)>
where
    C: Captioner,
    T: Translator,
{
    let ids: Vec<ItemId> = session.store().snapshot().iter().map(|item| item.id).collect();

    if ids.is_empty() {
        println!("確認する画像がありません");
        return Ok((0, 0));
    }

    println!("---\n");

    let mut renamed = 0;
    let mut deleted = 0;

    for (count, id) in ids.iter().enumerate() {
        let Some(item) = session.store().get(*id) else {
            continue;
        };

        println!(
            "[{}/{}] #{} {} ({})",
            count + 1,
            ids.len(),
            item.id,
            item.original_name,
            item.state
        );
        println!("  名前: {}", item.file_name());
        if !item.raw_caption.is_empty() {
            println!("  AI認識: {}", item.raw_caption);
        }

        match prompt_review_action()? {
            ReviewAction::Keep => println!("  → そのまま\n"),
            ReviewAction::KeepAll => {
                println!("  → 残り全部そのまま\n");
                break;
            }
            ReviewAction::Rename(name) => match session.rename(*id, &name) {
                Ok(()) => {
                    renamed += 1;
                    let current = session.store().get(*id).map(|i| i.file_name()).unwrap_or_default();
                    println!("  → {}\n", current);
                }
                Err(e) => println!("  → {}、そのまま\n", e),
            },
            ReviewAction::Delete => {
                session.delete(*id)?;
                deleted += 1;
                println!("  → 削除\n");
            }
            ReviewAction::Quit => {
                println!("確認を終了します...");
                break;
            }
        }
    }

    Ok((renamed, deleted))
}

fn dialog_error(e: dialoguer::Error) -> RenameError {
    RenameError::CliExecution(e.to_string())
}

fn prompt_review_action() -> Result<ReviewAction> {
    let choice = Select::new()
        .with_prompt("操作")
        .items(REVIEW_CHOICES)
        .default(0)
        .interact()
        .map_err(dialog_error)?;

    review_action(choice, || {
        Input::new()
            .with_prompt("新しい名前 (拡張子なし)")
            .allow_empty(true)
            .interact_text()
            .map_err(dialog_error)
    })
}
