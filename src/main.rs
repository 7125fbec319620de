use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use metascraper::{Page, config::Config, fetcher::Fetcher};
use tracing::info;

/// Extract title, text, meta tags and microdata from an HTML page.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// http(s) URL to fetch, or path to a local HTML file
    target: String,

    /// URL to record for a local file (defaults to a file:// URL)
    #[arg(long)]
    url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let page = if is_remote(&cli.target) {
        let config = Config::from_env()?;
        let fetcher = Fetcher::new(&config)?;
        let response = fetcher.fetch(&cli.target).await?;
        info!(url = %response.url_final, status = %response.status, "fetched");
        response.to_page()
    } else {
        let path = PathBuf::from(&cli.target);
        let body = tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let url = cli
            .url
            .clone()
            .unwrap_or_else(|| format!("file://{}", path.display()));
        Page::read(&url, &body)
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    println!("{json}");

    Ok(())
}

fn is_remote(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}
