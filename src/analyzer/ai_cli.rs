//! AI CLI連携モジュール
//!
//! 外部のAI CLI（claude / codex / gemini）を呼び出して
//! キャプション生成と翻訳を行う。
//! プロンプト生成とレスポンス整形は photo_rename_common を使用。

use super::{Captioner, Translator};
use crate::ai_provider::AiProvider;
use crate::error::{RenameError, Result};
use photo_rename_common::{build_caption_prompt, build_translation_prompt, extract_text};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// AI CLIの呼び出し設定
#[derive(Debug, Clone)]
pub struct AiCli {
    pub provider: AiProvider,
    pub temp_dir: PathBuf,
}

impl AiCli {
    /// カレントディレクトリの temp-images を一時フォルダとして使う
    pub fn new(provider: AiProvider) -> Result<Self> {
        Ok(Self {
            provider,
            temp_dir: get_temp_dir()?,
        })
    }

    pub fn with_temp_dir(provider: AiProvider, temp_dir: PathBuf) -> Self {
        Self { provider, temp_dir }
    }

    /// プロンプトを渡して標準出力を取得
    pub fn run(&self, prompt: &str) -> Result<String> {
        let args = self.provider.prompt_args(prompt);
        let command = self.provider.command_name();

        // Windowsではcmd /c経由（改行と引用符をエスケープ）
        #[cfg(windows)]
        let output = Command::new("cmd")
            .arg("/c")
            .arg(command)
            .args(args.iter().map(|a| a.replace('\n', " ").replace('"', "\\\"")))
            .output();

        #[cfg(not(windows))]
        let output = Command::new(command).args(&args).output();

        let output = output
            .map_err(|e| RenameError::CliExecution(format!("{} 実行エラー: {}", command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenameError::CliExecution(format!(
                "{} failed (code {:?}): {}",
                command,
                output.status.code(),
                stderr
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();
        let preview: String = response.chars().take(200).collect();
        tracing::debug!(provider = %self.provider, "レスポンス: {}", preview);

        Ok(response)
    }

    /// 画像バイト列を一時ファイルに書き出す（内容のハッシュをファイル名にする）
    ///
    /// 並列に呼ばれても書きかけのファイルを返さないよう、
    /// 固有名の一時ファイルに書いてから最終名へ rename する。
    pub fn write_temp_image(&self, image_bytes: &[u8]) -> Result<PathBuf> {
        let ext = image::guess_format(image_bytes)
            .ok()
            .and_then(|f| f.extensions_str().first().copied())
            .unwrap_or("jpg");
        let hash = hex::encode(Sha256::digest(image_bytes));
        let dest = self.temp_dir.join(format!("{}.{}", hash, ext));

        if !dest.exists() {
            std::fs::create_dir_all(&self.temp_dir)?;
            let mut staging = tempfile::Builder::new()
                .prefix(&hash)
                .suffix(".part")
                .tempfile_in(&self.temp_dir)?;
            staging.write_all(image_bytes)?;
            staging.as_file().sync_all()?;
            staging.persist(&dest).map_err(|e| e.error)?;
        }

        // 絶対パスに変換
        Ok(std::fs::canonicalize(&dest)?)
    }
}

/// AI CLIによるキャプション生成
#[derive(Debug, Clone)]
pub struct AiCliCaptioner {
    cli: AiCli,
}

impl AiCliCaptioner {
    pub fn new(cli: AiCli) -> Self {
        Self { cli }
    }
}

impl Captioner for AiCliCaptioner {
    fn caption(&self, image_bytes: &[u8]) -> Result<String> {
        let path = self
            .cli
            .write_temp_image(image_bytes)
            .map_err(|e| RenameError::CaptionFailure(format!("一時ファイル作成エラー: {}", e)))?;

        let prompt = build_caption_prompt(&path_for_prompt(&path));
        let response = self
            .cli
            .run(&prompt)
            .map_err(|e| RenameError::CaptionFailure(e.to_string()))?;

        extract_text(&response).map_err(|e| RenameError::CaptionFailure(e.to_string()))
    }
}

/// AI CLIによる翻訳
#[derive(Debug, Clone)]
pub struct AiCliTranslator {
    cli: AiCli,
}

impl AiCliTranslator {
    pub fn new(cli: AiCli) -> Self {
        Self { cli }
    }
}

impl Translator for AiCliTranslator {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(RenameError::TranslationFailure("翻訳対象が空です".into()));
        }

        let prompt = build_translation_prompt(text, source_lang, target_lang);
        let response = self
            .cli
            .run(&prompt)
            .map_err(|e| RenameError::TranslationFailure(e.to_string()))?;

        extract_text(&response).map_err(|e| RenameError::TranslationFailure(e.to_string()))
    }
}

fn get_temp_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join("temp-images"))
}

fn path_for_prompt(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
