use clap::Parser;
use figprice::core::render;
use figprice::domain::model::LookupResult;
use figprice::domain::ports::Storage;
use figprice::utils::error::ErrorSeverity;
use figprice::utils::{logger, validation::Validate};
use figprice::{
    CliConfig, FinderError, HttpTabDriver, LocalStorage, LookupEngine, PriceLookupPipeline,
    RunReport, APP_NAME,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting {}", APP_NAME);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let storage = LocalStorage::new(config.output_path.clone());

    if config.show_saved {
        return show_saved(&storage, &config.storage_key).await;
    }

    match run(config, storage).await {
        Ok(report) => {
            println!("{}", report.table);
            println!();
            println!(
                "✅ Thank you for using {}! The price details are listed above..",
                APP_NAME
            );
            println!("📁 Results saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!("Price lookup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

async fn run(config: CliConfig, storage: LocalStorage) -> figprice::Result<RunReport> {
    let driver = HttpTabDriver::new(Duration::from_secs(config.timeout_secs))?;
    let pipeline = PriceLookupPipeline::new(driver, storage, config);
    LookupEngine::new(pipeline).run().await
}

/// Print the result set persisted by the previous run, without fetching.
async fn show_saved(
    storage: &LocalStorage,
    storage_key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match storage.read_file(&format!("{storage_key}.json")).await {
        Ok(data) => {
            let results: Vec<LookupResult> = serde_json::from_slice(&data)?;
            println!("{}", render::table(&results));
            Ok(())
        }
        Err(FinderError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No data found. Please try again..");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

fn exit_code(error: &FinderError) -> i32 {
    match error.severity() {
        ErrorSeverity::Input => 2,
        ErrorSeverity::Fetch => 1,
        ErrorSeverity::System => 3,
    }
}
