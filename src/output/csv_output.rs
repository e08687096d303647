//! CSV product output
//!
//! One header row `url,image,name,price`, then one row per record in the
//! order the session accumulated them. The header is written even for an
//! empty crawl.

use crate::output::traits::{OutputResult, ProductSink};
use crate::state::ProductRecord;
use std::io;
use std::path::{Path, PathBuf};

/// Column names of the products file
pub const CSV_HEADER: [&str; 4] = ["url", "image", "name", "price"];

/// Writes products as CSV to any writer
pub fn write_products_csv<W: io::Write>(writer: W, products: &[ProductRecord]) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for product in products {
        writer.write_record(product.to_row())?;
    }

    writer.flush()?;
    Ok(())
}

/// Product sink that (re)creates a CSV file
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSink for CsvSink {
    fn write_products(&mut self, products: &[ProductRecord]) -> OutputResult<()> {
        let file = std::fs::File::create(&self.path)?;
        write_products_csv(file, products)?;

        tracing::info!(
            "Wrote {} product(s) to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }
}
