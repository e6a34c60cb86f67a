use crate::ai_provider::AiProvider;
use crate::error::{RenameError, Result};
use photo_rename_common::naming::LabelStyle;
use photo_rename_common::sanitizer::{ActionSanitizer, DEFAULT_MAX_CHARS, DEFAULT_PLACEHOLDER};
use photo_rename_common::FillerPhrases;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai_provider: AiProvider,
    pub default_category: String,
    pub source_lang: String,
    pub target_lang: String,
    pub max_action_chars: usize,
    pub action_placeholder: String,
    pub extra_filler_phrases: Vec<String>,
    pub label_style: LabelStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_provider: AiProvider::Claude,
            default_category: "その他".into(),
            source_lang: "en".into(),
            target_lang: "ja".into(),
            max_action_chars: DEFAULT_MAX_CHARS,
            action_placeholder: DEFAULT_PLACEHOLDER.into(),
            extra_filler_phrases: Vec::new(),
            label_style: LabelStyle::Japanese,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RenameError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-rename").join("config.json"))
    }

    /// 組み込みの除去フレーズ + 追加分
    pub fn filler_phrases(&self) -> FillerPhrases {
        let mut fillers = FillerPhrases::default();
        fillers.extend(self.extra_filler_phrases.iter().map(|s| s.as_str()));
        fillers
    }

    pub fn action_sanitizer(&self) -> ActionSanitizer {
        ActionSanitizer::new(self.max_action_chars, self.action_placeholder.clone())
    }

    pub fn add_filler_phrase(&mut self, phrase: String) -> Result<()> {
        if phrase.trim().is_empty() {
            return Err(RenameError::Config("空のフレーズは追加できません".into()));
        }
        if !self.extra_filler_phrases.contains(&phrase) {
            self.extra_filler_phrases.push(phrase);
        }
        self.save()
    }
}
