use clap::Parser;
use single_number::utils::{logger, validation::Validate};
use single_number::{CliConfig, LocalInput, LocalOutput, SolverEngine, StreamPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting single-number");
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

    // 建立輸入輸出和管道
    let input = LocalInput::from_path(config.input.as_deref());
    let output = LocalOutput::from_path(config.output.as_deref());
    let pipeline = StreamPipeline::new(input, output, config);

    let engine = SolverEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(rendered) => {
            tracing::info!("✅ Result written: {}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                single_number::utils::error::ErrorSeverity::Low => 0,
                single_number::utils::error::ErrorSeverity::Medium => 2,
                single_number::utils::error::ErrorSeverity::High => 1,
                single_number::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
