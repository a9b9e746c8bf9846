use clap::Parser;
use ingot::utils::{logger, validation::Validate};
use ingot::{FhirCliInstaller, PositionalConfig, SetupEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PositionalConfig::parse();

    logger::init_cli_logger(config.verbose);

    let options = config.into_options();
    if let Err(e) = options.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    tracing::info!("🚀 Setting up {} package(s)", options.packages.len());

    let engine = SetupEngine::new(FhirCliInstaller::new());
    match engine.run(&options).await {
        Ok(report) => {
            tracing::info!(
                "✅ Setup completed, {} package(s) installed into {}",
                report.installs.len(),
                report.import_directory.display()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Setup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
