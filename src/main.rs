use clap::Parser;
use rgolf::utils::error::ErrorSeverity;
use rgolf::utils::{logger, validation::Validate};
use rgolf::{AnalysisEngine, CliConfig, CsvPipeline, GolfError, LocalStorage};

fn report_failure(stage: &str, e: &GolfError) {
    tracing::error!(
        "{} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting rgolf {}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            report_failure("Configuration", &e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    let source = LocalStorage::new(".");
    let sink = LocalStorage::new(config.output_path.clone());
    let engine = AnalysisEngine::new(CsvPipeline::new(source, sink, config));

    match engine.run().await {
        Ok(artifacts) => {
            println!("✅ Analysis completed, {} figure files written:", artifacts.len());
            for path in &artifacts {
                println!("📁 {}", path);
            }
            Ok(())
        }
        Err(e) => {
            report_failure("Analysis", &e);
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}
