pub const LAPTOP_URL: &str = "https://webscraper.io/test-sites/e-commerce/static/computers/laptops";

pub const PRODUCTS_OUTPUT_CSV_PATH: &str = "products.csv";
pub const LOG_FILE_PATH: &str = "parser.log";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Query parameter carrying the 1-based page number.
pub const PAGE_PARAM: &str = "page";

pub const PRODUCT_SELECTOR: &str = ".thumbnail";
pub const PAGINATION_SELECTOR: &str = ".pagination";
pub const PAGINATION_ITEM_SELECTOR: &str = "li";
