use aoc_similarity::utils::logger;
use aoc_similarity::{run, CliConfig};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A local .env may supply SESSION; real environment variables take precedence.
    let dotenv = dotenvy::dotenv();
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting aoc-similarity");
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let report = match run(&config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    if config.json {
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                let e = aoc_similarity::AocError::from(e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.severity().exit_code());
            }
        }
    } else {
        println!("{}", report);
    }
}
