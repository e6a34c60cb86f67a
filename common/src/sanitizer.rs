//! 動作フレーズのファイル名化モジュール
//!
//! 翻訳済みの動作フレーズを、ファイル名として安全な短いスラグに整える。
//! 各ステップは順序依存:
//! 1. 語尾・句読点の除去（末尾に限らず部分文字列として全削除）
//! 2. ファイル名禁止文字の削除
//! 3. 空白（全角含む）をアンダースコアに置換
//! 4. 最大文字数で切り詰め（単語境界は考慮しない）
//! 5. 残った空白を除去

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ILLEGAL_CHARS: Regex = Regex::new(r#"[\\/:*?"<>|]"#).unwrap();
}

/// 組み込みの除去語尾
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "しています",
    "している",
    "です",
    "ます",
    "。",
    "、",
    ".",
];

/// 翻訳失敗時の代替スラグ
pub const DEFAULT_PLACEHOLDER: &str = "動作";

/// 動作スラグの最大文字数
pub const DEFAULT_MAX_CHARS: usize = 20;

/// ファイル名禁止文字（\ / : * ? " < > |）を削除
pub fn strip_illegal_chars(text: &str) -> String {
    ILLEGAL_CHARS.replace_all(text, "").into_owned()
}

/// 動作フレーズのサニタイザ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSanitizer {
    pub suffixes: Vec<String>,
    pub max_chars: usize,
    pub placeholder: String,
}

impl Default for ActionSanitizer {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            max_chars: DEFAULT_MAX_CHARS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ActionSanitizer {
    pub fn new(max_chars: usize, placeholder: impl Into<String>) -> Self {
        Self {
            max_chars,
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// 翻訳済みフレーズをスラグ化する
    ///
    /// 結果が空になった場合は代替スラグを返す。
    ///
    /// # Examples
    /// ```
    /// use photo_rename_common::sanitizer::ActionSanitizer;
    ///
    /// let sanitizer = ActionSanitizer::default();
    /// assert_eq!(sanitizer.sanitize("海辺を歩く 男性。"), "海辺を歩く_男性");
    /// ```
    pub fn sanitize(&self, translated: &str) -> String {
        let mut text = translated.to_string();

        for suffix in &self.suffixes {
            if !suffix.is_empty() {
                text = text.replace(suffix.as_str(), "");
            }
        }

        text = strip_illegal_chars(&text);
        text = text.replace([' ', '　'], "_");
        text = text.chars().take(self.max_chars).collect();
        let text = text.trim();

        if text.is_empty() {
            self.placeholder.clone()
        } else {
            text.to_string()
        }
    }

    /// 翻訳失敗時の代替スラグ
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
