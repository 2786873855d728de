use std::collections::HashSet;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RecommendError;

/// The demo catalog bundled with the crate, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// A single product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// An ordered, read-only list of products.
///
/// Order is presentation order only. Ids are unique, names and categories are
/// non-empty and prices are finite and non-negative.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, RecommendError> {
        if products.is_empty() {
            return Err(RecommendError::InvalidCatalog(
                "catalog has no products".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(RecommendError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(RecommendError::InvalidCatalog(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if product.category.trim().is_empty() {
                return Err(RecommendError::InvalidCatalog(format!(
                    "product {} has an empty category",
                    product.id
                )));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(RecommendError::InvalidCatalog(format!(
                    "product {} has an invalid price {}",
                    product.id, product.price
                )));
            }
        }

        Ok(Catalog { products })
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, RecommendError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of products
    pub fn from_json_str(json: &str) -> Result<Self, RecommendError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Read a JSON catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RecommendError> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Membership is keyed on product id
    pub fn contains(&self, product: &Product) -> bool {
        self.get(product.id).is_some()
    }

    /// Mean price rounded to the nearest whole unit
    pub fn average_price(&self) -> f64 {
        let total: f64 = self.products.iter().map(|p| p.price).sum();
        (total / self.products.len() as f64).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f64) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            category: "gadget".to_string(),
            price,
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 5);
        assert!(catalog.get(1).is_some());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(RecommendError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![product(1, 10.0), product(1, 20.0)]);
        match result {
            Err(RecommendError::InvalidCatalog(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected InvalidCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Catalog::new(vec![product(1, -1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_category() {
        let mut bad = product(1, 10.0);
        bad.category = " ".to_string();
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_average_price_is_rounded() {
        let catalog = Catalog::new(vec![product(1, 10.0), product(2, 15.0)]).unwrap();
        assert_eq!(catalog.average_price(), 13.0);
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let catalog =
            Catalog::from_json_str(r#"[{"id": 7, "name": "Lamp", "category": "home", "price": 25}]"#)
                .unwrap();
        let lamp = catalog.get(7).unwrap();
        assert_eq!(lamp.description, "");
        assert_eq!(lamp.price, 25.0);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = Catalog::from_json_str("not json");
        assert!(matches!(result, Err(RecommendError::Parse(_))));
    }
}
