use clap::error::ErrorKind;
use clap::Parser;
use links_import::config::{CliArgs, Settings, DEFAULT_SETTINGS_FILE};
use links_import::utils::{logger, validation::Validate};
use links_import::{HttpLinkService, LinkImporter};

#[tokio::main]
async fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            // 參數不對：印出帶有目前設定的用法說明
            let settings = Settings::load(DEFAULT_SETTINGS_FILE).unwrap_or_default();
            print_usage(&settings);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting links-import");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證設定
    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load settings from '{}': {}", args.config, e);
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        println!("Error: {}", e);
        std::process::exit(1);
    }

    let service = match HttpLinkService::new(&settings) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let importer = LinkImporter::new(service, settings.api.base_url.clone());

    match importer.run(&args.csv_file).await {
        Ok(summary) => {
            tracing::info!(
                "Import finished: {} succeeded, {} failed",
                summary.success_count,
                summary.failed_count
            );
            if summary.failed_count > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("❌ Import aborted: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage(settings: &Settings) {
    println!("Usage: links-import <csv_file>");
    println!();
    println!("CSV format (no header):");
    println!("  slug,destination");
    println!();
    println!("Example:");
    println!("  gh,https://github.com");
    println!("  docs,https://example.com/docs");
    println!();
    println!("Configuration:");
    println!("  API_URL: {}", settings.api.base_url);
    println!("  API_TOKEN: {}...", settings.token_preview());
    println!();
    println!(
        "To change these, edit {} or set LINKS_API_URL / LINKS_API_TOKEN.",
        DEFAULT_SETTINGS_FILE
    );
}
