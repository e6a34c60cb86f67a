//! ファイル名生成モジュール
//!
//! `<ジャンル>_<性別>_<人数>_<動作>` 形式のファイル名（拡張子なし）を組み立てる。

use crate::classifier::{ClassificationResult, Gender, Headcount};
use serde::{Deserialize, Serialize};

/// 区分ラベルの表記形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    Japanese,
    English,
}

impl std::str::FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "japanese" | "ja" => Ok(LabelStyle::Japanese),
            "english" | "en" => Ok(LabelStyle::English),
            _ => Err(format!("Unknown label style: {}. Use japanese or english", s)),
        }
    }
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelStyle::Japanese => write!(f, "japanese"),
            LabelStyle::English => write!(f, "english"),
        }
    }
}

/// 性別区分のラベル
pub fn gender_label(gender: Gender, style: LabelStyle) -> &'static str {
    match (style, gender) {
        (LabelStyle::Japanese, Gender::Person) => "人物",
        (LabelStyle::Japanese, Gender::Family) => "家族",
        (LabelStyle::Japanese, Gender::MixedPair) => "男女",
        (LabelStyle::Japanese, Gender::Female) => "女性",
        (LabelStyle::Japanese, Gender::Male) => "男性",
        (LabelStyle::English, Gender::Person) => "person",
        (LabelStyle::English, Gender::Family) => "family",
        (LabelStyle::English, Gender::MixedPair) => "mixed",
        (LabelStyle::English, Gender::Female) => "female",
        (LabelStyle::English, Gender::Male) => "male",
    }
}

/// 人数区分のラベル
pub fn headcount_label(headcount: Headcount, style: LabelStyle) -> String {
    match (style, headcount) {
        (LabelStyle::Japanese, Headcount::Exact(n)) => format!("{}人", n),
        (LabelStyle::Japanese, Headcount::Multiple) => "複数".to_string(),
        (LabelStyle::English, count) => count.tag(),
    }
}

/// ファイル名（拡張子なし）を生成
///
/// # Examples
/// ```
/// use photo_rename_common::classifier::{ClassificationResult, Gender, Headcount};
/// use photo_rename_common::naming::{synthesize_name, LabelStyle};
///
/// let result = ClassificationResult { gender: Gender::Person, headcount: Headcount::Exact(1) };
/// let name = synthesize_name("diet", &result, "walking", LabelStyle::English);
/// assert_eq!(name, "diet_person_1_walking");
/// ```
pub fn synthesize_name(
    category: &str,
    result: &ClassificationResult,
    action: &str,
    style: LabelStyle,
) -> String {
    format!(
        "{}_{}_{}_{}",
        category,
        gender_label(result.gender, style),
        headcount_label(result.headcount, style),
        action
    )
}
