use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "link-audit")]
#[command(about = "Reports sentences that mention a keyword without linking to its target URL")]
#[command(version)]
pub struct Args {
    /// CSV of site URLs to audit (headerless, URLs in the first column)
    #[arg(long, default_value = "site_urls.csv")]
    pub urls: PathBuf,

    /// CSV of keyword targets (headerless, columns: target URL, keyword)
    #[arg(long, default_value = "target_keywords.csv")]
    pub keywords: PathBuf,

    /// Where to write fetched page bodies
    #[arg(long, default_value = "content.csv")]
    pub content_out: PathBuf,

    /// Where to write the unlinked keyword report
    #[arg(long, default_value = "unlinked_keywords.csv")]
    pub results_out: PathBuf,

    /// Reader API endpoint (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Reader API key (falls back to the READER_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Optional JSON fetcher configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
