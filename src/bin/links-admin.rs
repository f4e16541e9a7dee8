use clap::{Parser, Subcommand};
use links_import::config::{Settings, DEFAULT_SETTINGS_FILE};
use links_import::utils::{logger, validation::Validate};
use links_import::HttpLinkService;

#[derive(Parser)]
#[command(name = "links-admin")]
#[command(about = "Inspect and remove short links on the remote shortener")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to settings file
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all links known to the remote API
    List,
    /// Delete one link by slug
    Delete { slug: String },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 載入並驗證設定
    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
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
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Command::List => match service.list_links().await {
            Ok(links) => {
                for link in &links {
                    println!("{} -> {}", link.slug, link.destination);
                }
                println!();
                println!("{} links on {}", links.len(), settings.api.base_url);
            }
            Err(e) => {
                tracing::error!("❌ Listing links failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                println!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Command::Delete { slug } => {
            print!("Deleting '{}'... ", slug);
            use std::io::Write;
            let _ = std::io::stdout().flush();

            let outcome = service.delete_link(&slug).await;
            if outcome.success && outcome.status == 200 {
                println!("✓");
            } else {
                println!("✗ (HTTP {})", outcome.status);
                println!("  Response: {}", outcome.message);
                std::process::exit(1);
            }
        }
    }
}
