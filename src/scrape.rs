use std::path::Path;

use crate::Result;
use crate::archiver;
use crate::extractor::{extract_page_count, extract_products};
use crate::fetcher::{Fetcher, Listing, PageSource};
use crate::models::Product;
use crate::parser::Document;

/// Reads every listing page and returns all products, page by page.
///
/// Page 1 is fetched without a page parameter and also tells how many pages
/// there are; pages 2..=N follow in order. The first failure aborts the run.
pub fn scrape_products(source: &impl PageSource) -> Result<Vec<Product>> {
    tracing::info!("Start parsing laptops");

    let first_page = Document::parse(&source.fetch_page(None)?)?;
    let num_pages = extract_page_count(&first_page)?;
    tracing::debug!("Listing has {} page(s)", num_pages);

    let mut all_products = extract_products(&first_page)?;

    for page_num in 2..=num_pages {
        tracing::info!("Start parsing page #{}", page_num);
        let page = Document::parse(&source.fetch_page(Some(page_num))?)?;
        all_products.extend(extract_products(&page)?);
    }

    Ok(all_products)
}

/// Scrapes the whole listing, then writes the CSV in one go.
/// Returns the number of products written.
pub fn run(source: &impl PageSource, output: impl AsRef<Path>) -> Result<usize> {
    let products = scrape_products(source)?;
    archiver::save_to_file(&products, output.as_ref())?;

    tracing::info!(
        "Saved {} products to {}",
        products.len(),
        output.as_ref().display()
    );
    Ok(products.len())
}

/// Scrapes the live listing at `listing_url` into `output`. Every failure,
/// building the HTTP client included, is logged before it is returned.
pub fn scrape_listing(listing_url: &str, output: impl AsRef<Path>) -> Result<usize> {
    let result = Fetcher::new()
        .and_then(|fetcher| run(&Listing::new(fetcher, listing_url), output));

    if let Err(e) = &result {
        tracing::error!("Scraping failed: {}", e);
    }
    result
}
