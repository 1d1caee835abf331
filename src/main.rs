use anyhow::Result;

use laptop_scraper::config::{LAPTOP_URL, LOG_FILE_PATH, PRODUCTS_OUTPUT_CSV_PATH};
use laptop_scraper::logging::init_logging;
use laptop_scraper::scrape;

fn main() -> Result<()> {
    let _logging = init_logging(LOG_FILE_PATH)?;

    scrape::scrape_listing(LAPTOP_URL, PRODUCTS_OUTPUT_CSV_PATH)?;
    Ok(())
}
