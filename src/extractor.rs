use scraper::{Html, Selector};
use tracing::warn;

use crate::models::RowRecord;
use crate::utils::error::{AppError, Result};

/// Every selector literal the pipeline depends on, in one place.
///
/// These class names belong to the target site and change without notice;
/// when they do, this struct is the only thing that needs updating.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// CSS selector matching one table row per instrument.
    pub row: String,
    /// CSS selector for the instrument name inside a row.
    pub name: String,
    /// CSS selector for the price cell inside a row.
    pub price: String,
    /// XPath for the "Load More" control, used by the page loader.
    pub load_more_xpath: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            row: "tr.row-RdUXZpkv.listRow".to_string(),
            name: "sup.apply-common-tooltip.tickerDescription-GrtoTeat".to_string(),
            price: "td.cell-RLhfr_y4.right-RLhfr_y4".to_string(),
            load_more_xpath:
                "//span[@class='content-D4RPB3ZC' and contains(text(), 'Load More')]"
                    .to_string(),
        }
    }
}

/// Scans a document for instrument rows and yields `(name, price)` records.
pub struct RowExtractor {
    row_selector: Selector,
    name_selector: Selector,
    price_selector: Selector,
}

impl RowExtractor {
    pub fn new(selectors: &Selectors) -> Result<Self> {
        Ok(Self {
            row_selector: parse_selector(&selectors.row)?,
            name_selector: parse_selector(&selectors.name)?,
            price_selector: parse_selector(&selectors.price)?,
        })
    }

    /// Extract records from the given document, in document order.
    ///
    /// Rows missing their name or price sub-element are skipped with a
    /// warning; a single malformed row never aborts the extraction.
    pub fn extract(&self, html: &str) -> Vec<RowRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for (index, row) in document.select(&self.row_selector).enumerate() {
            let name = match row.select(&self.name_selector).next() {
                Some(element) => element_text(&element),
                None => {
                    warn!("Skipping row {}: name element not found", index);
                    continue;
                }
            };

            let price = match row.select(&self.price_selector).next() {
                Some(element) => normalize_price(&element_text(&element)),
                None => {
                    warn!("Skipping row {}: price element not found", index);
                    continue;
                }
            };

            records.push(RowRecord::new(name, price));
        }

        records
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::Parse {
        message: format!("Invalid CSS selector '{}': {:?}", selector, e),
    })
}

fn element_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Strip thousands-separator commas from a price string. No other
/// transformation is applied.
fn normalize_price(text: &str) -> String {
    text.replace(',', "")
}
