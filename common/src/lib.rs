//! Photo Rename Common Library
//!
//! キャプションの正規化・分類とファイル名生成（ホスト非依存の純粋ロジック）

pub mod classifier;
pub mod collision;
pub mod error;
pub mod format;
pub mod naming;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod sanitizer;

pub use classifier::{classify, ClassificationResult, Gender, Headcount};
pub use collision::{entry_name, resolve_unique_names};
pub use error::{Error, Result};
pub use format::{EncodeFormat, FileFormat, ACCEPTED_EXTENSIONS};
pub use naming::{synthesize_name, LabelStyle};
pub use normalizer::{normalize_caption, FillerPhrases};
pub use parser::extract_text;
pub use prompts::{build_caption_prompt, build_translation_prompt, CATEGORIES};
pub use sanitizer::{strip_illegal_chars, ActionSanitizer};
