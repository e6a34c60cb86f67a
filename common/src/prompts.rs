//! プロンプト生成モジュール
//!
//! 外部AI CLIに渡すキャプション生成・翻訳用プロンプト

/// 画像ジャンル（命名の先頭に付くカテゴリ）
pub const CATEGORIES: &[&str] = &["ダイエット", "育毛", "美容", "ビジネス", "介護", "その他"];

/// キャプション生成プロンプト
///
/// # Arguments
/// * `image_path` - AI CLIが読み込む画像ファイルのパス
pub fn build_caption_prompt(image_path: &str) -> String {
    format!(
        "Read the image file {image_path} and describe it in one short English sentence, \
         in the style of an image captioning model (for example: \"a man walking on the beach\"). \
         Mention how many people appear and whether they are men, women, boys, girls or a family. \
         Output only the sentence."
    )
}

/// 翻訳プロンプト
///
/// # Arguments
/// * `text` - 翻訳対象テキスト
/// * `source_lang` - 翻訳元言語コード（例: en）
/// * `target_lang` - 翻訳先言語コード（例: ja）
pub fn build_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        "Translate the following text from {} to {}. \
         Output only the translation, without quotes or explanations. Text: {}",
        language_name(source_lang),
        language_name(target_lang),
        text
    )
}

fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "ja" => "Japanese",
        other => other,
    }
}
