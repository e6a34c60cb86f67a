//! キャプション分類モジュール
//!
//! 正規化済みの英語キャプションから「性別区分」と「人数区分」を判定する。
//! 判定は閉じた語彙のキーワード照合で、規則表を上から順に評価し、
//! 最初に一致した規則を採用する。
//!
//! 性別のキーワードは部分文字列として照合する（"woman" は "man" も含む）。
//! 数詞と人物名詞は単語単位で照合する。

use std::collections::HashSet;
use std::fmt;

/// 性別区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Person,
    Family,
    MixedPair,
    Female,
    Male,
}

/// 人数区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Headcount {
    Exact(u8),
    Multiple,
}

impl Headcount {
    /// 区分タグ（"1", "2", "multiple"）
    pub fn tag(&self) -> String {
        match self {
            Headcount::Exact(n) => n.to_string(),
            Headcount::Multiple => "multiple".to_string(),
        }
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// 分類結果（正規化テキストの純関数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    pub gender: Gender,
    pub headcount: Headcount,
}

/// 性別判定規則
#[derive(Debug, Clone, Copy)]
pub enum GenderRule {
    /// いずれかの語が含まれる
    Any(&'static [&'static str], Gender),
    /// 両方の語群からそれぞれ1語以上含まれる
    Both(&'static [&'static str], &'static [&'static str], Gender),
}

impl GenderRule {
    fn matches(&self, text: &str) -> Option<Gender> {
        match self {
            GenderRule::Any(keys, gender) if contains_any(text, keys) => Some(*gender),
            GenderRule::Both(left, right, gender)
                if contains_any(text, left) && contains_any(text, right) =>
            {
                Some(*gender)
            }
            _ => None,
        }
    }
}

pub const FAMILY_WORDS: &[&str] = &[
    "family", "group", "crowd", "children", "kids", "people", "friends",
];
pub const MAN_OR_BOY_WORDS: &[&str] = &["man", "boy"];
pub const WOMAN_OR_GIRL_WORDS: &[&str] = &["woman", "girl"];
pub const FEMALE_WORDS: &[&str] = &["woman", "girl", "lady", "female"];
pub const MALE_WORDS: &[&str] = &["man", "boy", "guy", "male"];

/// 性別判定の規則表（上から順に評価）
pub const GENDER_RULES: &[GenderRule] = &[
    GenderRule::Any(FAMILY_WORDS, Gender::Family),
    GenderRule::Both(MAN_OR_BOY_WORDS, WOMAN_OR_GIRL_WORDS, Gender::MixedPair),
    GenderRule::Any(FEMALE_WORDS, Gender::Female),
    GenderRule::Any(MALE_WORDS, Gender::Male),
];

/// 数詞辞書（この順で探索し、最初に見つかった語を採用）
pub const NUMERAL_WORDS: &[(&str, Headcount)] = &[
    ("one", Headcount::Exact(1)),
    ("two", Headcount::Exact(2)),
    ("three", Headcount::Exact(3)),
    ("four", Headcount::Exact(4)),
    ("five", Headcount::Exact(5)),
    ("six", Headcount::Exact(6)),
    ("seven", Headcount::Exact(7)),
    ("eight", Headcount::Exact(8)),
    ("nine", Headcount::Exact(9)),
    ("ten", Headcount::Exact(10)),
    ("couple", Headcount::Exact(2)),
    ("pair", Headcount::Exact(2)),
    ("group", Headcount::Multiple),
    ("crowd", Headcount::Multiple),
];

/// 接続詞ヒューリスティック用の人物名詞
pub const PERSON_NOUNS: &[&str] = &[
    "man", "men", "woman", "women", "boy", "boys", "girl", "girls", "guy", "guys", "lady",
    "ladies", "person", "child", "baby",
];

fn contains_any(text: &str, keys: &[&str]) -> bool {
    keys.iter().any(|k| text.contains(k))
}

/// 単語に分割（英数字以外で区切る）
fn words_of(text: &str) -> HashSet<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// 性別区分を判定
pub fn classify_gender(text: &str) -> Gender {
    GENDER_RULES
        .iter()
        .find_map(|rule| rule.matches(text))
        .unwrap_or(Gender::Person)
}

/// 人数区分を判定
///
/// 1. 数詞辞書（単語単位で一致）
/// 2. " and " を含み、異なる人物名詞が2語以上 → 2
/// 3. 家族・男女、または "people" を含む → 複数、それ以外 → 1
pub fn classify_headcount(text: &str, gender: Gender) -> Headcount {
    let words = words_of(text);

    if let Some((_, count)) = NUMERAL_WORDS.iter().find(|(word, _)| words.contains(*word)) {
        return *count;
    }

    let person_nouns = PERSON_NOUNS.iter().filter(|n| words.contains(**n)).count();
    if text.contains(" and ") && person_nouns >= 2 {
        return Headcount::Exact(2);
    }

    if matches!(gender, Gender::Family | Gender::MixedPair) || words.contains("people") {
        Headcount::Multiple
    } else {
        Headcount::Exact(1)
    }
}

/// 正規化テキストを分類する
///
/// # Examples
/// ```
/// use photo_rename_common::classifier::{classify, Gender, Headcount};
///
/// let result = classify("a family of men walking");
/// assert_eq!(result.gender, Gender::Family);
/// assert_eq!(result.headcount, Headcount::Multiple);
/// ```
pub fn classify(text: &str) -> ClassificationResult {
    let gender = classify_gender(text);
    let headcount = classify_headcount(text, gender);
    ClassificationResult { gender, headcount }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_beats_male() {
        assert_eq!(classify_gender("a family of men walking"), Gender::Family);
        assert_eq!(classify_gender("a man with his kids"), Gender::Family);
    }

    #[test]
    fn test_mixed_pair() {
        assert_eq!(classify_gender("a man and a woman dancing"), Gender::MixedPair);
        assert_eq!(classify_gender("a boy and girls playing"), Gender::MixedPair);
    }

    #[test]
    fn test_female_and_male() {
        assert_eq!(classify_gender("a girl doing yoga"), Gender::Female);
        assert_eq!(classify_gender("a lady holding a cup"), Gender::Female);
        assert_eq!(classify_gender("a guy lifting weights"), Gender::Male);
        assert_eq!(classify_gender("a man lifting weights"), Gender::Male);
    }

    #[test]
    fn test_gender_substring_match() {
        // "woman" は "man" も含むので男女
        assert_eq!(classify_gender("a woman walking"), Gender::MixedPair);
        assert_eq!(classify_gender("a girlfriend smiling"), Gender::Female);
        assert_eq!(classify_gender("kidswear on a rack"), Gender::Family);
        // 女性の規則が男性より先
        assert_eq!(classify_gender("a female runner"), Gender::Female);
        assert_eq!(classify_gender("a mannequin in a shop"), Gender::Male);
    }

    #[test]
    fn test_default_person() {
        let result = classify("a cat sleeping");
        assert_eq!(result.gender, Gender::Person);
        assert_eq!(result.headcount, Headcount::Exact(1));
    }

    #[test]
    fn test_numeral_precedence() {
        let result = classify("two men fishing");
        assert_eq!(result.headcount.tag(), "2");
        assert_eq!(result.gender, Gender::Person);
        assert_eq!(classify("two dogs fishing").gender, Gender::Person);
        assert_eq!(classify("two dogs fishing").headcount, Headcount::Exact(2));
        // 家族でも数詞が優先
        assert_eq!(classify("a family of four").headcount, Headcount::Exact(4));
    }

    #[test]
    fn test_numeral_whole_word_only() {
        // "someone" や "often" は数詞ではない
        assert_eq!(classify("someone often runs").headcount, Headcount::Exact(1));
        assert_eq!(classify("a tent at the beach").headcount, Headcount::Exact(1));
    }

    #[test]
    fn test_numeral_dictionary_order() {
        // 辞書順で "one" が "three" より先
        assert_eq!(classify("three dogs and one cat").headcount, Headcount::Exact(1));
    }

    #[test]
    fn test_couple_and_group() {
        assert_eq!(classify("a couple sitting on a bench").headcount, Headcount::Exact(2));
        assert_eq!(classify("a pair of shoes").headcount, Headcount::Exact(2));
        assert_eq!(classify("a crowd at a concert").headcount, Headcount::Multiple);
    }

    #[test]
    fn test_conjunction_heuristic() {
        let result = classify("a man and a woman dancing");
        assert_eq!(result.gender, Gender::MixedPair);
        assert_eq!(result.headcount, Headcount::Exact(2));
        assert_eq!(classify("a man and a dog").headcount, Headcount::Exact(1));
        assert_eq!(classify("a girl with a baby").headcount, Headcount::Exact(1));
    }

    #[test]
    fn test_fallback_multiple() {
        assert_eq!(classify("a boy with girls").headcount, Headcount::Multiple);
        assert_eq!(classify("people on a street").headcount, Headcount::Multiple);
        assert_eq!(classify("a man walking").headcount, Headcount::Exact(1));
    }

    #[test]
    fn test_rule_table_order() {
        assert!(matches!(GENDER_RULES[0], GenderRule::Any(_, Gender::Family)));
        assert!(matches!(GENDER_RULES[1], GenderRule::Both(_, _, Gender::MixedPair)));
        assert!(matches!(GENDER_RULES[2], GenderRule::Any(_, Gender::Female)));
        assert!(matches!(GENDER_RULES[3], GenderRule::Any(_, Gender::Male)));
    }

    #[test]
    fn test_empty_text() {
        let result = classify("");
        assert_eq!(result.gender, Gender::Person);
        assert_eq!(result.headcount, Headcount::Exact(1));
    }
}
