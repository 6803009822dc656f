use clap::Parser;
use model_cost_estimator::core::ConfigProvider;
use model_cost_estimator::utils::{logger, validation::Validate};
use model_cost_estimator::{render_screen, CliConfig, EstimationEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting 3D model cost estimator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證輸入
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let spec = config.project_spec();
    let storage = LocalStorage::new(settings.output_path().to_string());
    let engine = EstimationEngine::new(storage, settings);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no report will be written");
        let estimate = engine.estimate(&spec);
        print!("{}", render_screen(&engine.build_report(&spec, &estimate)));
        return Ok(());
    }

    let outcome = engine.run(&spec).await;
    print!(
        "{}",
        render_screen(&engine.build_report(&spec, &outcome.estimate))
    );

    // 報表失敗時估價結果仍然有效，不以錯誤碼結束
    match outcome.report {
        Ok(paths) => {
            for path in &paths {
                tracing::info!("📁 Report saved to: {}", path);
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
    }

    Ok(())
}
