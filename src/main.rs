use clap::Parser;
use literacy_predict::core::FormSource;
use literacy_predict::utils::error::ErrorSeverity;
use literacy_predict::utils::{logger, validation::Validate};
use literacy_predict::{
    ArgsForm, CliConfig, ConsoleSink, PredictEngine, SubmitHandler, TomlForm, Verdict,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting literacy-predict CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 表單來源：TOML 檔案或命令列參數
    let form: Box<dyn FormSource> = match &config.form_file {
        Some(path) => match TomlForm::from_path(path) {
            Ok(form) => Box::new(form),
            Err(e) => {
                tracing::error!("❌ Failed to load form file: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => Box::new(ArgsForm::from_config(&config)),
    };

    let sink = ConsoleSink::new();
    let handler = SubmitHandler::new(form, sink, config.clone());

    // 健康檢查模式：只打服務根路徑
    if config.health {
        match handler.check_health().await {
            Ok(message) => {
                tracing::info!("✅ Service is up");
                println!("✅ {}", message);
                return Ok(());
            }
            Err(e) => {
                // 與提交時 Unreachable 的退出碼一致
                tracing::error!("❌ Health check failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    let engine = PredictEngine::new_with_monitoring(handler, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            // 結果文字已由 ConsoleSink 輸出
            let exit_code = match outcome.verdict {
                Verdict::Predicted(_) => {
                    tracing::info!("✅ Prediction received");
                    0
                }
                Verdict::Unreachable => {
                    tracing::warn!("⚠️ Could not reach the prediction service");
                    1
                }
                Verdict::Rejected(_) => {
                    tracing::warn!("⚠️ Service rejected the request");
                    2
                }
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Submission failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
