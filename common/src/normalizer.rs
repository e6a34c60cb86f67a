//! キャプション正規化モジュール
//!
//! 画像キャプションモデルが出力する定型句（"arafed" 等）を除去し、
//! 小文字化したテキストを分類器に渡す。

/// 組み込みの除去フレーズ（キャプションモデル特有の定型句）
pub const DEFAULT_FILLER_PHRASES: &[&str] = &[
    "arafed ",
    "araffe ",
    "arafed",
    "araffe",
    "there is ",
    "there are ",
    "an image of ",
    "a picture of ",
    "a photo of ",
    "a close up of ",
    "a blurry photo of ",
];

/// 除去フレーズ一覧（呼び出し側で追加可能）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerPhrases {
    phrases: Vec<String>,
}

impl Default for FillerPhrases {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_FILLER_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FillerPhrases {
    /// 空のリスト
    pub fn empty() -> Self {
        Self { phrases: Vec::new() }
    }

    /// フレーズを末尾に追加する（小文字化して保持、空文字は無視）
    pub fn push(&mut self, phrase: &str) {
        let phrase = phrase.to_lowercase();
        if !phrase.is_empty() {
            self.phrases.push(phrase);
        }
    }

    /// 複数フレーズを追加
    pub fn extend<'a>(&mut self, phrases: impl IntoIterator<Item = &'a str>) {
        for phrase in phrases {
            self.push(phrase);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// キャプションを正規化する
///
/// 1. 小文字化
/// 2. 除去フレーズをリスト順に部分文字列として削除
/// 3. 前後の空白を除去
///
/// 削除によって新たにフレーズが現れる場合があるため、
/// 変化がなくなるまでリスト全体を繰り返し適用する。
///
/// # Examples
/// ```
/// use photo_rename_common::normalizer::{normalize_caption, FillerPhrases};
///
/// let text = normalize_caption("Arafed man walking on the beach", &FillerPhrases::default());
/// assert_eq!(text, "man walking on the beach");
/// ```
pub fn normalize_caption(raw: &str, fillers: &FillerPhrases) -> String {
    let mut text = raw.to_lowercase();

    loop {
        let before = text.len();
        for phrase in fillers.iter() {
            while text.contains(phrase) {
                text = text.replace(phrase, "");
            }
        }
        if text.len() == before {
            break;
        }
    }

    text.trim().to_string()
}
