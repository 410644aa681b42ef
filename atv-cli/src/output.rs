//! Result printing in text and JSON modes.

use atv_search::SearchResult;

/// Print the human-friendly info header shown before text-mode results.
pub fn print_header(
    storefront_id: &str,
    region: Option<&str>,
    locale: &str,
    query: &str,
    filter_type: Option<String>,
) {
    println!("Storefront ID: {storefront_id}");
    if let Some(region) = region {
        println!("Region:       {region}");
    }
    println!("Locale:       {locale}");
    println!("Query:        {query}");
    if let Some(filter) = filter_type {
        println!("Filter type:  {filter}");
    }
    println!();
}

/// Print the ranked results.
///
/// JSON mode emits the result array (scores included), `[]` when empty.
/// Text mode prints a numbered block per result.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_results(results: &[SearchResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s):\n", results.len());

    for (index, result) in results.iter().enumerate() {
        println!("{}. {}", index + 1, result.title);
        println!("   Type:   {} ({})", result.localized_type, result.raw_type);
        println!("   ID:     {}", result.id);
        println!("   Score:  {}", result.score);
        println!("   URL:    {}", result.url);
        println!();
    }

    Ok(())
}
