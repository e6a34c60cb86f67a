//! 画像解析モジュール
//!
//! 1枚の画像について以下を行う:
//! 1. キャプション生成（外部AI）
//! 2. キャプション正規化・分類
//! 3. 正規化キャプションの翻訳（外部AI、失敗時は代替スラグ）
//! 4. 翻訳結果の動作スラグ化

pub mod ai_cli;

pub use ai_cli::{AiCli, AiCliCaptioner, AiCliTranslator};

use crate::config::Config;
use crate::error::Result;
use photo_rename_common::naming::LabelStyle;
use photo_rename_common::{classify, normalize_caption, ActionSanitizer, ClassificationResult, FillerPhrases};

/// 画像キャプション生成（外部）
pub trait Captioner: Send + Sync {
    fn caption(&self, image_bytes: &[u8]) -> Result<String>;
}

/// 翻訳（外部）
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

/// 命名に関する設定
#[derive(Debug, Clone)]
pub struct NamingOptions {
    pub fillers: FillerPhrases,
    pub sanitizer: ActionSanitizer,
    pub label_style: LabelStyle,
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for NamingOptions {
    fn from(config: &Config) -> Self {
        Self {
            fillers: config.filler_phrases(),
            sanitizer: config.action_sanitizer(),
            label_style: config.label_style,
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
        }
    }
}

/// 1枚分の解析結果（ストア反映前）
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub raw_caption: String,
    pub normalized: String,
    pub classification: ClassificationResult,
    pub action: String,
}

/// 画像を解析する
///
/// キャプション生成の失敗はエラーとして返す。
/// 翻訳の失敗は代替スラグで置き換え、エラーにはしない。
pub fn describe_image<C, T>(
    captioner: &C,
    translator: &T,
    options: &NamingOptions,
    image_bytes: &[u8],
) -> Result<Description>
where
    C: Captioner + ?Sized,
    T: Translator + ?Sized,
{
    let raw_caption = captioner.caption(image_bytes)?;
    Ok(describe_caption(translator, options, raw_caption))
}

/// キャプション文字列から分類・動作スラグを求める
pub fn describe_caption<T>(translator: &T, options: &NamingOptions, raw_caption: String) -> Description
where
    T: Translator + ?Sized,
{
    let normalized = normalize_caption(&raw_caption, &options.fillers);
    let classification = classify(&normalized);

    let action = match translator.translate(&normalized, &options.source_lang, &options.target_lang) {
        Ok(translated) => options.sanitizer.sanitize(&translated),
        Err(e) => {
            tracing::debug!("翻訳に失敗したため代替スラグを使用: {}", e);
            options.sanitizer.placeholder().to_string()
        }
    };

    Description {
        raw_caption,
        normalized,
        classification,
        action,
    }
}

/// 翻訳せずに動作スラグを求める（オフライン命名用）
pub fn action_without_translation(options: &NamingOptions, action: Option<&str>) -> String {
    match action {
        Some(text) => options.sanitizer.sanitize(text),
        None => options.sanitizer.placeholder().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use photo_rename_common::{Gender, Headcount};

    struct FixedCaptioner(&'static str);

    impl Captioner for FixedCaptioner {
        fn caption(&self, _image_bytes: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingCaptioner;

    impl Captioner for FailingCaptioner {
        fn caption(&self, _image_bytes: &[u8]) -> Result<String> {
            Err(RenameError::CaptionFailure("モデル未応答".into()))
        }
    }

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
            Ok(format!("{}。", text))
        }
    }

    struct BrokenTranslator;

    impl Translator for BrokenTranslator {
        fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
            Err(RenameError::TranslationFailure("timeout".into()))
        }
    }

    #[test]
    fn test_describe_image() {
        let options = NamingOptions::default();
        let description = describe_image(
            &FixedCaptioner("arafed two boys fishing"),
            &EchoTranslator,
            &options,
            &[],
        )
        .unwrap();

        assert_eq!(description.normalized, "two boys fishing");
        assert_eq!(description.classification.gender, Gender::Male);
        assert_eq!(description.classification.headcount, Headcount::Exact(2));
        assert_eq!(description.action, "two_boys_fishing");
    }

    #[test]
    fn test_translation_failure_uses_placeholder() {
        let options = NamingOptions::default();
        let description = describe_image(&FixedCaptioner("a cat"), &BrokenTranslator, &options, &[]).unwrap();
        assert_eq!(description.action, "動作");
    }

    #[test]
    fn test_caption_failure_is_error() {
        let options = NamingOptions::default();
        let result = describe_image(&FailingCaptioner, &EchoTranslator, &options, &[]);
        assert!(matches!(result, Err(RenameError::CaptionFailure(_))));
    }

    #[test]
    fn test_action_without_translation() {
        let options = NamingOptions::default();
        assert_eq!(action_without_translation(&options, Some("走る 男性")), "走る_男性");
        assert_eq!(action_without_translation(&options, None), "動作");
    }
}
