/// Product record definitions
///
/// A record always carries its source URL; each extracted field is either the
/// value found on the page or a marker that it was missing.
use std::fmt;

/// Placeholder written when no product image is present
pub const NO_IMAGE: &str = "no image found";

/// Placeholder written when no product title is present
pub const NO_TITLE: &str = "no title found";

/// Placeholder written when no price is present
pub const NO_PRICE: &str = "no price found";

/// Outcome of looking up a single field on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Found(String),
    NotFound,
}

impl Field {
    /// Returns the found value, or `sentinel` when missing
    pub fn or_sentinel<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Self::Found(value) => value,
            Self::NotFound => sentinel,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// One product extracted from a product-listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// The page the product was extracted from
    pub url: String,
    pub image: Field,
    pub name: Field,
    pub price: Field,
}

impl ProductRecord {
    pub fn image(&self) -> &str {
        self.image.or_sentinel(NO_IMAGE)
    }

    pub fn name(&self) -> &str {
        self.name.or_sentinel(NO_TITLE)
    }

    pub fn price(&self) -> &str {
        self.price.or_sentinel(NO_PRICE)
    }

    /// The record as an output row, in `url,image,name,price` order
    pub fn to_row(&self) -> [&str; 4] {
        [&self.url, self.image(), self.name(), self.price()]
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) from {}", self.name(), self.price(), self.url)
    }
}
