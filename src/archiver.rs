use std::path::Path;

use crate::Result;
use crate::models::Product;

/// Writes `products` as CSV to `path`, replacing whatever was there.
/// The header row is always written, even for an empty list.
pub fn save_to_file(products: &[Product], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path.as_ref())?;

    writer.write_record(Product::FIELDS)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", products.len(), path.as_ref().display());
    Ok(())
}
