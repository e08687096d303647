//! Product extraction from listing pages
//!
//! Reads the first product image, title and price on a page. A missing
//! element becomes `Field::NotFound` (rendered as a placeholder in the
//! output); only a structurally broken element is an `ExtractionFault`.

use crate::config::{compile_selector, SelectorConfig};
use crate::state::{Field, ProductRecord};
use crate::{ConfigError, ExtractionFault};
use scraper::{Html, Selector};

/// Extracts product records using compiled selectors
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    image: Selector,
    title: Selector,
    price: Selector,
    image_source: String,
}

impl ProductExtractor {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(ProductExtractor)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - A selector is not valid CSS
    pub fn new(selectors: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            image: compile_selector(&selectors.image)?,
            title: compile_selector(&selectors.title)?,
            price: compile_selector(&selectors.price)?,
            image_source: selectors.image.clone(),
        })
    }

    /// Extracts one product record from `document`
    ///
    /// Lookups run in order image, title, price. Image yields the element's
    /// `src`; title and price yield trimmed text.
    ///
    /// # Returns
    ///
    /// * `Ok(ProductRecord)` - A record, possibly with `NotFound` fields
    /// * `Err(ExtractionFault)` - An image element without a `src`
    pub fn extract(
        &self,
        document: &Html,
        source_url: &str,
    ) -> Result<ProductRecord, ExtractionFault> {
        let image = match document.select(&self.image).next() {
            Some(element) => {
                let src = element.value().attr("src").ok_or_else(|| {
                    ExtractionFault::MissingAttribute {
                        url: source_url.to_string(),
                        selector: self.image_source.clone(),
                        attribute: "src",
                    }
                })?;
                Field::Found(src.to_string())
            }
            None => Field::NotFound,
        };

        let name = first_text(document, &self.title).into();
        let price = first_text(document, &self.price).into();

        Ok(ProductRecord {
            url: source_url.to_string(),
            image,
            name,
            price,
        })
    }
}

/// Trimmed text content of the first element matching `selector`
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}
