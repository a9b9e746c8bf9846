use clap::Parser;
use ingot::domain::model::{SetupReport, WriteOutcome};
use ingot::utils::{logger, validation::Validate};
use ingot::{CliConfig, FhirCliInstaller, SetupEngine, SetupOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting ingot");
    tracing::debug!("CLI config: {:?}", config);

    let options = match config.resolve().and_then(|options| options.validate().map(|_| options)) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be touched");
        print_plan(&options);
        return Ok(());
    }

    let engine = SetupEngine::new(FhirCliInstaller::new());

    match engine.run(&options).await {
        Ok(report) => {
            tracing::info!("✅ Setup completed successfully!");
            print_report(&report);
        }
        Err(e) => {
            tracing::error!(
                "❌ Setup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn print_plan(options: &SetupOptions) {
    println!("📦 Packages:");
    for package in &options.packages {
        println!("   - {}", package);
    }
    println!("🐳 Container: {} on port {}", options.name, options.port);
    println!("🔑 License: {:?}", options.license);
    println!("📁 Import directory: {}", options.import_directory().display());
}

fn print_report(report: &SetupReport) {
    println!("✅ Setup completed successfully!");
    for install in &report.installs {
        let status = if install.succeeded() { "✔" } else { "⚠" };
        println!("   {} {} (exit {:?})", status, install.package, install.exit_code);
    }
    println!(
        "🧹 Removed {} core package(s), {} examples folder(s)",
        report.cleanup.removed_core_packages.len(),
        report.cleanup.removed_examples.len()
    );
    println!("🔑 License: {}", describe(report.license));
    println!("⚙️  App settings: {}", describe(report.app_settings));
    println!("🐳 Docker script: {}", describe(report.docker_script));
    println!("📁 Import directory: {}", report.import_directory.display());
}

fn describe(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Written => "written",
        WriteOutcome::Skipped => "skipped",
    }
}
