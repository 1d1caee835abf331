use crate::config::{PAGINATION_ITEM_SELECTOR, PAGINATION_SELECTOR, PRODUCT_SELECTOR};
use crate::models::Product;
use crate::parser::{Document, Node};
use crate::{ExtractionError, Result};

/// Where a field's raw value lives on the matched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Visible text of the node.
    Text,
    /// Value of the named attribute.
    Attr(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub selector: &'static str,
    pub source: Source,
}

/// One rule per [`Product`] field, in column order.
pub const PRODUCT_FIELDS: [FieldRule; 5] = [
    // The visible title is ellipsized, the attribute is not.
    FieldRule {
        name: "title",
        selector: ".title",
        source: Source::Attr("title"),
    },
    FieldRule {
        name: "description",
        selector: ".description",
        source: Source::Text,
    },
    FieldRule {
        name: "price",
        selector: ".price",
        source: Source::Text,
    },
    FieldRule {
        name: "rating",
        selector: "p[data-rating]",
        source: Source::Attr("data-rating"),
    },
    FieldRule {
        name: "num_of_reviews",
        selector: ".ratings > p.pull-right",
        source: Source::Text,
    },
];

fn read_field(node: &Node<'_>, rule: &FieldRule) -> Result<String> {
    let target = node
        .select_one(rule.selector)?
        .ok_or(ExtractionError::MissingNode {
            field: rule.name,
            selector: rule.selector,
        })?;

    let value = match rule.source {
        Source::Text => target.text(),
        Source::Attr(attr) => target
            .attr(attr)
            .ok_or(ExtractionError::MissingAttribute {
                field: rule.name,
                selector: rule.selector,
                attr,
            })?
            .to_string(),
    };

    Ok(value)
}

fn invalid(field: &'static str, value: &str, reason: impl ToString) -> ExtractionError {
    ExtractionError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// `"$1299.99"` -> `1299.99`
pub fn parse_price(raw: &str) -> std::result::Result<f64, ExtractionError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    let price: f64 = number.parse().map_err(|e| invalid("price", raw, e))?;

    if !price.is_finite() || price < 0.0 {
        return Err(invalid("price", raw, "expected a non-negative amount"));
    }
    Ok(price)
}

pub fn parse_rating(raw: &str) -> std::result::Result<u8, ExtractionError> {
    raw.trim().parse().map_err(|e| invalid("rating", raw, e))
}

/// `"12 reviews"` -> `12`
pub fn parse_review_count(raw: &str) -> std::result::Result<u32, ExtractionError> {
    let token = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| invalid("num_of_reviews", raw, "no review count"))?;
    token.parse().map_err(|e| invalid("num_of_reviews", raw, e))
}

fn parse_product(node: &Node<'_>) -> Result<Product> {
    let [title, description, price, rating, reviews] =
        PRODUCT_FIELDS.map(|rule| read_field(node, &rule));
    let (title, description, price, rating, reviews) =
        (title?, description?, price?, rating?, reviews?);

    if title.trim().is_empty() {
        return Err(ExtractionError::Empty { field: "title" }.into());
    }

    Ok(Product {
        title,
        description,
        price: parse_price(&price)?,
        rating: parse_rating(&rating)?,
        num_of_reviews: parse_review_count(&reviews)?,
    })
}

/// Products of one page, in markup order. Any bad card fails the page.
pub fn extract_products(document: &Document) -> Result<Vec<Product>> {
    document
        .select(PRODUCT_SELECTOR)?
        .iter()
        .map(parse_product)
        .collect()
}

/// Number of listing pages announced by the pagination control.
///
/// The control is a list whose last item is the "next" arrow, so the
/// highest page number sits in the second-to-last item. No control, or one
/// with fewer than two items, means a single page.
pub fn extract_page_count(document: &Document) -> Result<u32> {
    let Some(pagination) = document.select_one(PAGINATION_SELECTOR)? else {
        return Ok(1);
    };

    let items = pagination.select(PAGINATION_ITEM_SELECTOR)?;
    if items.len() < 2 {
        return Ok(1);
    }

    let raw = items[items.len() - 2].text();
    let count: u32 = raw
        .trim()
        .parse()
        .map_err(|e| invalid("page_count", &raw, e))?;

    // Page 1 is always there, whatever the control claims.
    Ok(count.max(1))
}
