use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header;

use crate::config::{PAGE_PARAM, USER_AGENT};
use crate::{Result, ScrapeError};

/// Something that can hand out the raw bytes of listing page `page`
/// (`None` is the first page, requested without a page parameter).
pub trait PageSource {
    fn fetch_page(&self, page: Option<u32>) -> Result<Vec<u8>>;
}

/// Builds the URL of one listing page. The page parameter is only added
/// when a page number is given.
pub fn page_url(listing_url: &str, page: Option<u32>) -> Result<Url> {
    let mut url = Url::parse(listing_url).map_err(|e| ScrapeError::InvalidUrl {
        url: listing_url.to_string(),
        message: e.to_string(),
    })?;

    if let Some(page) = page {
        url.query_pairs_mut().append_pair(PAGE_PARAM, &page.to_string());
    }

    Ok(url)
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// GETs `url` (plus the page parameter, if any) and returns the body.
    /// Non-2xx answers are errors; nothing is retried.
    pub fn fetch(&self, url: &str, page: Option<u32>) -> Result<Vec<u8>> {
        let url = page_url(url, page)?;
        tracing::debug!("GET {}", url);

        let network_err = |e: reqwest::Error| ScrapeError::Network {
            url: url.to_string(),
            source: e,
        };

        let body = self
            .client
            .get(url.clone())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(network_err)?;

        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/// The paginated listing served at a single base URL.
pub struct Listing {
    fetcher: Fetcher,
    url: String,
}

impl Listing {
    pub fn new(fetcher: Fetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

impl PageSource for Listing {
    fn fetch_page(&self, page: Option<u32>) -> Result<Vec<u8>> {
        self.fetcher.fetch(&self.url, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const LISTING: &str = "https://webscraper.io/test-sites/e-commerce/static/computers/laptops";

    #[test]
    fn test_first_page_has_no_query() {
        let url = page_url(LISTING, None).unwrap();
        assert_eq!(url.as_str(), LISTING);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_page_number_is_query_param() {
        let url = page_url(LISTING, Some(3)).unwrap();
        assert_eq!(url.query(), Some("page=3"));
    }

    #[test]
    fn test_invalid_listing_url() {
        let err = page_url("not a url", Some(2)).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl { .. }));
    }

    #[test]
    fn test_fetch_returns_body_bytes() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/laptops")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body("<html><body>page two</body></html>")
            .create();

        let fetcher = Fetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/laptops", server.url()), Some(2))
            .unwrap();

        assert_eq!(body, b"<html><body>page two</body></html>".to_vec());
        mock.assert();
    }

    #[test]
    fn test_listing_sends_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/laptops")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("ok")
            .create();

        let listing = Listing::new(Fetcher::new().unwrap(), format!("{}/laptops", server.url()));
        let body = listing.fetch_page(None).unwrap();

        assert_eq!(body, b"ok".to_vec());
        mock.assert();
    }

    #[test]
    fn test_non_success_status_is_network_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/laptops").with_status(500).create();

        let fetcher = Fetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/laptops", server.url()), None)
            .unwrap_err();

        match err {
            ScrapeError::Network { url, source } => {
                assert!(url.ends_with("/laptops"));
                assert_eq!(source.status().map(|s| s.as_u16()), Some(500));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
