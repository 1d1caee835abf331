use serde::{Deserialize, Serialize};

/// One product card of a listing page, in CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: u8,
    pub num_of_reviews: u32,
}

impl Product {
    /// Column names, same order as the struct fields.
    pub const FIELDS: [&'static str; 5] =
        ["title", "description", "price", "rating", "num_of_reviews"];
}
