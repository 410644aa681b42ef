//! ATV CLI - Command-line interface
//!
//! Searches the Apple TV catalog for movies and TV shows (unofficial).

mod output;

use std::time::Duration;

use atv_search::{
    AtvClient, ContentFilter, DEFAULT_STOREFRONT, HttpFetcher, SearchOptions, SearchResult,
};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "atv")]
#[command(version)]
#[command(about = "Search the Apple TV catalog for movies and TV shows (unofficial)")]
struct Cli {
    /// Search query (multiple words are joined)
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Storefront ID (e.g. 143441) or 2-letter region code (e.g. US, GB, DE)
    #[arg(short, long, visible_alias = "sf")]
    storefront: Option<String>,

    /// Locale (e.g. en-US, de-DE, fr-FR)
    #[arg(short, long, default_value = "en-US")]
    locale: String,

    /// Maximum number of results to show (default: all)
    #[arg(long)]
    max_results: Option<usize>,

    /// Filter only movies or shows
    #[arg(long = "type", value_enum)]
    filter_type: Option<TypeFilter>,

    /// Include people/person results in output
    #[arg(long)]
    include_people: bool,

    /// Output results as JSON only (no pretty text)
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

/// Content-type filter accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeFilter {
    Movie,
    Show,
    Series,
}

impl TypeFilter {
    fn to_content_filter(self) -> ContentFilter {
        match self {
            TypeFilter::Movie => ContentFilter::Movie,
            // "series" is an accepted alias for shows
            TypeFilter::Show | TypeFilter::Series => ContentFilter::Show,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout));
    let mut client = AtvClient::new(Box::new(fetcher), cli.locale.clone());

    let mut region = None;
    if let Some(storefront) = &cli.storefront {
        if is_storefront_id(storefront) {
            client.set_storefront(storefront.clone());
        } else {
            region = Some(storefront.to_uppercase());
            match client.storefront_for_region(storefront).await {
                Some(id) => client.set_storefront(id),
                None => eprintln!(
                    "[!] Warning: Could not find storefront for region '{}', \
                     falling back to US ({DEFAULT_STOREFRONT})",
                    storefront.to_uppercase()
                ),
            }
        }
    }

    if !cli.json {
        output::print_header(
            client.storefront_id(),
            region.as_deref(),
            &cli.locale,
            &query,
            cli.filter_type.map(|f| format!("{f:?}").to_lowercase()),
        );
    }

    let options = SearchOptions {
        max_results: cli.max_results,
        filter_type: cli.filter_type.map(TypeFilter::to_content_filter),
        include_people: cli.include_people,
    };

    // Network and decode failures are not fatal: warn and behave as an
    // empty result set, keeping exit code 0.
    let results: Vec<SearchResult> = match client.search(&query, &options).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("[!] Error: search failed - {e}");
            Vec::new()
        }
    };

    output::print_results(&results, cli.json)?;
    Ok(())
}

/// A storefront argument made of digits is an id; anything else is a region code.
fn is_storefront_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
