use scraper::{ElementRef, Html, Selector};

use crate::{Result, ScrapeError};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// A parsed listing page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw response bytes. The HTML parser itself never rejects
    /// markup, so the only failure is a body that is not UTF-8.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| ScrapeError::Parse(format!("response body is not valid UTF-8: {}", e)))?;

        Ok(Self {
            html: Html::parse_document(text),
        })
    }

    pub fn select_one(&self, css: &str) -> Result<Option<Node<'_>>> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).next().map(Node))
    }

    /// All matches in document order.
    pub fn select(&self, css: &str) -> Result<Vec<Node<'_>>> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).map(Node).collect())
    }
}

/// An element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First matching descendant.
    pub fn select_one(&self, css: &str) -> Result<Option<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    pub fn select(&self, css: &str) -> Result<Vec<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    /// Every descendant text node joined as-is, whitespace included.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}
