//! Product funnel catalogue for the lead form.
//!
//! The category → product mapping ships with the binary as embedded JSON
//! and is parsed once at startup. It only drives the dependent selects on
//! the lead form; the backend stores whatever strings were submitted.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Embedded funnel data.
const FUNNEL_PRODUCTS_JSON: &str = include_str!("../data/funnel_products.json");

/// Errors that can occur while loading the product catalogue.
#[derive(Debug, thiserror::Error)]
pub enum ProductCatalogError {
    /// The embedded JSON is malformed.
    #[error("invalid funnel product data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of a category's product list.
///
/// Historic data mixes bare strings with `{ "name": ... }` objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ProductEntry {
    Named { name: String },
    Text(String),
}

impl ProductEntry {
    fn into_name(self) -> String {
        match self {
            Self::Named { name } => name,
            Self::Text(text) => text,
        }
    }
}

/// The category → product-list mapping behind the lead form.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl ProductCatalog {
    /// Load the embedded funnel data.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON fails to parse.
    pub fn load() -> Result<Self, ProductCatalogError> {
        Self::from_json(FUNNEL_PRODUCTS_JSON)
    }

    /// Parse a catalogue from a JSON object of `category: [products]`.
    ///
    /// Empty product names are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON fails to parse.
    pub fn from_json(json: &str) -> Result<Self, ProductCatalogError> {
        let raw: BTreeMap<String, Vec<ProductEntry>> = serde_json::from_str(json)?;

        let categories = raw
            .into_iter()
            .map(|(category, entries)| {
                let products: Vec<String> = entries
                    .into_iter()
                    .map(ProductEntry::into_name)
                    .filter(|name| !name.is_empty())
                    .collect();
                (category, products)
            })
            .collect();

        Ok(Self { categories })
    }

    /// Category names in display order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Products available under a category; empty for unknown categories.
    #[must_use]
    pub fn products_for(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalogue has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let catalog = ProductCatalog::load().unwrap();
        assert!(!catalog.is_empty());
        // Every category must offer at least one product.
        for name in catalog.category_names() {
            assert!(!catalog.products_for(name).is_empty(), "empty category {name}");
        }
    }

    #[test]
    fn test_mixed_entry_shapes() {
        let catalog = ProductCatalog::from_json(
            r#"{ "Guardrails": ["W-Beam", { "name": "Thrie-Beam" }, ""] }"#,
        )
        .unwrap();
        // The empty entry is dropped, object and string forms both survive.
        assert_eq!(catalog.products_for("Guardrails"), ["W-Beam", "Thrie-Beam"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = ProductCatalog::from_json(r#"{ "A": ["x"] }"#).unwrap();
        assert!(catalog.products_for("B").is_empty());
    }
}
