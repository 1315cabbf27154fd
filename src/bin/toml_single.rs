use anyhow::Context;
use clap::Parser;
use single_number::config::toml_config::TomlConfig;
use single_number::core::ConfigProvider;
use single_number::utils::{logger, validation::Validate};
use single_number::{LocalInput, LocalOutput, SolverEngine, StreamPipeline};

#[derive(Parser)]
#[command(name = "toml-single")]
#[command(about = "single-number runner with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "single-number.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based single-number runner");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    tracing::info!(
        "Pipeline: {} v{} ({})",
        config.pipeline.name,
        config.pipeline.version,
        config.pipeline.description
    );
    tracing::info!(
        "Input: {}, format: {}",
        config.input_path().unwrap_or("<stdin>"),
        config.report_format()
    );

    if args.dry_run {
        tracing::info!("🔎 Dry run requested, not executing");
        println!("Would read {}", config.input_path().unwrap_or("<stdin>"));
        println!(
            "Would write a {} report to {}",
            config.report_format(),
            config.output_path().unwrap_or("<stdout>")
        );
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let input = LocalInput::from_path(config.input_path());
    let output = LocalOutput::from_path(config.output_path());
    let pipeline = StreamPipeline::new(input, output, config);

    let engine = SolverEngine::new_with_monitoring(pipeline, monitor_enabled);
    let rendered = engine.run().await.context("Pipeline run failed")?;

    tracing::info!("✅ Result written: {}", rendered);

    Ok(())
}
