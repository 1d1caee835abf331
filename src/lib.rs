//! Laptop listing scraper for the webscraper.io e-commerce demo site.

pub mod archiver;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod parser;
pub mod scrape;

use thiserror::Error;

/// Main error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTML parse error: {0}")]
    Parse(String),

    #[error("Invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while turning a parsed page into product records
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no node matching `{selector}` for field `{field}`")]
    MissingNode {
        field: &'static str,
        selector: &'static str,
    },

    #[error("node `{selector}` has no `{attr}` attribute (field `{field}`)")]
    MissingAttribute {
        field: &'static str,
        selector: &'static str,
        attr: &'static str,
    },

    #[error("field `{field}` is empty")]
    Empty { field: &'static str },

    #[error("invalid value {value:?} for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

pub use fetcher::{Fetcher, Listing, PageSource};
pub use models::Product;
