use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use photo_rename_common::naming::LabelStyle;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-rename")]
#[command(about = "画像キャプションAIによる画像リネーム・ZIP一括出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (claude/codex/gemini)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub ai_provider: Option<AiProvider>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダの画像を解析・命名してZIPに出力
    Run {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// ジャンル（ファイル名の先頭）。省略時は設定ファイルの値
        #[arg(short, long)]
        category: Option<String>,

        /// 出力ZIPファイル（デフォルト: renamed_images_<日時>.zip）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 出力前に対話式で名前を確認・編集
        #[arg(long)]
        review: bool,
    },

    /// 対話式セッション（画像の追加・解析・編集・出力を繰り返す）
    Session {
        /// 最初に取り込む画像フォルダ
        folder: Option<PathBuf>,

        /// ジャンル。省略時は設定ファイルの値
        #[arg(short, long)]
        category: Option<String>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 英語の説明文から命名をプレビュー（AIを呼ばない）
    Name {
        /// 画像の説明文（英語）
        #[arg(required = true)]
        description: String,

        /// ジャンル。省略時は設定ファイルの値
        #[arg(short, long)]
        category: Option<String>,

        /// 動作（翻訳済みフレーズ）。省略時は代替スラグ
        #[arg(short, long)]
        action: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトのジャンルを設定
        #[arg(long)]
        set_category: Option<String>,

        /// 除去フレーズを追加
        #[arg(long)]
        add_filler: Option<String>,

        /// ラベル形式 (japanese/english)
        #[arg(long)]
        label_style: Option<LabelStyle>,

        /// 動作スラグの最大文字数
        #[arg(long)]
        max_action_chars: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
