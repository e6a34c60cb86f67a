//! AI CLIレスポンスパーサー
//!
//! キャプション・翻訳は1文のテキストで返るが、
//! コードブロックや引用符で囲まれることがあるため取り除く。

use crate::error::{Error, Result};

/// レスポンスから本文の1行を抽出
///
/// 抽出手順:
/// 1. ``` ... ``` ブロックがあればその中身
/// 2. 最初の空でない行
/// 3. 前後の引用符を除去
///
/// # Examples
/// ```
/// use photo_rename_common::extract_text;
///
/// let text = extract_text("\"a man walking on the beach\"\n").unwrap();
/// assert_eq!(text, "a man walking on the beach");
/// ```
pub fn extract_text(response: &str) -> Result<String> {
    let mut body = response;

    if let Some(start_marker) = body.find("```") {
        let after = &body[start_marker + 3..];
        // 言語指定（```text 等）の行を飛ばす
        let content_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
        let content = &after[content_start..];
        if let Some(end) = content.find("```") {
            body = &content[..end];
        }
    }

    let line = body
        .lines()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .ok_or_else(|| Error::Parse("応答が空です".into()))?;

    let text = line
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '「' | '」' | '“' | '”'))
        .trim();

    if text.is_empty() {
        return Err(Error::Parse("応答が空です".into()));
    }

    Ok(text.to_string())
}
