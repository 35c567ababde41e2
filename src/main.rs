use clap::Parser;
use inv_import::utils::logger;
use inv_import::{CliConfig, ImportError, Importer, JsonlStore};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting inv-import");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let store = JsonlStore::new(&config.store_path);
    let result = match Importer::with_timeout(store, config.timeout) {
        Ok(importer) => importer.import_from_url(&config.import_url).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(record_id) => {
            tracing::info!("Import completed, record id {}", record_id);
            println!("✅ Imported record {} into {}", record_id, config.store_path);
        }
        Err(e) => {
            tracing::error!("Import failed: {}", e);
            eprintln!("❌ {}", e);

            let exit_code = match e {
                ImportError::ValidationError { .. } | ImportError::ConfigError { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
