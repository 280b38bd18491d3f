use clap::Parser;
use link_audit::config::ReaderConfig;
use link_audit::records::MatchRecord;
use link_audit::{Audit, scanner, tables};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("Audit failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let urls = tables::load_site_urls(&args.urls)?;
    let keyword_targets = tables::load_keyword_targets(&args.keywords)?;

    ::log::info!(
        "Loaded {} site URLs and {} keyword targets",
        urls.len(),
        keyword_targets.len()
    );

    let config = build_reader_config(&args)?;
    let mut rx = Audit::new(urls).with_config(config).generate().await;

    // Pages arrive in input order; scan each as it lands and keep the raw
    // bodies for the content dump.
    let mut pages = Vec::new();
    let mut all_matches: Vec<MatchRecord> = Vec::new();
    let start_time = std::time::Instant::now();

    while let Some(page) = rx.recv().await {
        println!("Searching for unlinked keywords in {}...", page.source_url);
        let matches = scanner::scan(&page.source_url, &page.body_text, &keyword_targets);

        if matches.is_empty() {
            println!("No unlinked keywords found in {}", page.source_url);
        } else {
            println!(
                "Found {} unlinked keyword(s) in {}",
                matches.len(),
                page.source_url
            );
        }

        all_matches.extend(matches);
        pages.push(page);
    }

    ::log::info!(
        "Scanned {} pages in {:.2} seconds",
        pages.len(),
        start_time.elapsed().as_secs_f64()
    );

    tables::save_content(&args.content_out, &pages)?;
    println!("Body content saved to '{}'.", args.content_out.display());

    if all_matches.is_empty() {
        println!("No unlinked keywords found.");
    } else {
        tables::save_matches(&args.results_out, &all_matches)?;
        println!(
            "Unlinked keywords found and saved to '{}'.",
            args.results_out.display()
        );
    }

    Ok(())
}

/// Builds the fetcher configuration from the optional config file with CLI
/// flags taking precedence; the API key also falls back to READER_API_KEY.
fn build_reader_config(args: &Args) -> Result<ReaderConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ReaderConfig::from_file(path)?,
        None => ReaderConfig::default(),
    };

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    config.api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("READER_API_KEY").ok())
        .or(config.api_key);

    Ok(config)
}
