use clap::Parser;
use photo_rename_ai::analyzer::{self, AiCli, AiCliCaptioner, AiCliTranslator, NamingOptions};
use photo_rename_ai::review::run_review;
use photo_rename_ai::{cli, config, error, interactive, Session};
use photo_rename_common::naming::{gender_label, headcount_label, synthesize_name};
use photo_rename_common::{classify, normalize_caption};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    if let Some(provider) = cli.ai_provider {
        config.ai_provider = provider;
    }

    match cli.command {
        Commands::Run { folder, category, output, recursive, review } => {
            println!("📸 photo-rename - 画像リネーム\n");
            let category = category.unwrap_or_else(|| config.default_category.clone());
            let mut session = new_session(&config)?;

            // 1. スキャン・取り込み
            println!("[1/3] 画像を読み込み中...");
            let added = interactive::add_folder(&mut session, &folder, recursive)?;
            println!("✔ {}枚の画像を検出\n", added);

            // 2. 解析・命名
            println!("[2/3] AI解析中... (ジャンル: {}, AI: {})", category, config.ai_provider);
            let failures = interactive::classify_with_progress(&mut session, &category);
            println!();

            if review {
                let (renamed, deleted) = run_review(&mut session)?;
                println!("✔ 変更 {}件 / 削除 {}件\n", renamed, deleted);
            }

            // 3. ZIP出力
            println!("[3/3] ZIPに出力中...");
            let output = output.unwrap_or_else(|| PathBuf::from(photo_rename_ai::default_archive_name()));
            interactive::export_to(&session, &output)?;

            if failures.is_empty() {
                println!("\n✅ 完了");
            } else {
                println!("\n⚠ 完了 ({}枚は解析に失敗したため出力されていません)", failures.len());
            }
        }

        Commands::Session { folder, category, recursive } => {
            println!("🗂 photo-rename - 対話セッション");
            let category = category.unwrap_or_else(|| config.default_category.clone());
            let mut session = new_session(&config)?;

            if let Some(folder) = folder {
                let added = interactive::add_folder(&mut session, &folder, recursive)?;
                println!("✔ {}枚を追加", added);
            }

            interactive::run_session_menu(&mut session, category, recursive)?;
        }

        Commands::Name { description, category, action } => {
            let category = category.unwrap_or_else(|| config.default_category.clone());
            let options = NamingOptions::from(&config);

            let normalized = normalize_caption(&description, &options.fillers);
            let result = classify(&normalized);
            let action = analyzer::action_without_translation(&options, action.as_deref());
            let name = synthesize_name(&category, &result, &action, options.label_style);

            println!("正規化: {}", normalized);
            println!("性別:   {}", gender_label(result.gender, options.label_style));
            println!("人数:   {}", headcount_label(result.headcount, options.label_style));
            println!("動作:   {}", action);
            println!("名前:   {}", name);
        }

        Commands::Config { set_category, add_filler, label_style, max_action_chars, show } => {
            let mut changed = false;

            if let Some(category) = set_category {
                config.default_category = category;
                changed = true;
            }
            if let Some(style) = label_style {
                config.label_style = style;
                changed = true;
            }
            if let Some(max) = max_action_chars {
                config.max_action_chars = max;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }
            if let Some(phrase) = add_filler {
                config.add_filler_phrase(phrase)?;
                println!("✔ 除去フレーズを追加しました");
            }

            if show {
                println!("設定:");
                println!("  AIプロバイダ: {}", config.ai_provider);
                println!("  ジャンル: {}", config.default_category);
                println!("  翻訳: {} → {}", config.source_lang, config.target_lang);
                println!("  動作の最大文字数: {}", config.max_action_chars);
                println!("  翻訳失敗時: {}", config.action_placeholder);
                println!("  ラベル形式: {}", config.label_style);
                println!("  追加の除去フレーズ: {:?}", config.extra_filler_phrases);
            }
        }
    }

    Ok(())
}

fn new_session(config: &Config) -> Result<Session<AiCliCaptioner, AiCliTranslator>> {
    let cli = AiCli::new(config.ai_provider)?;
    Ok(Session::new(
        AiCliCaptioner::new(cli.clone()),
        AiCliTranslator::new(cli),
        NamingOptions::from(config),
    ))
}
