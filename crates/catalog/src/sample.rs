//! Static sample catalog.
//!
//! Used when no network is available (and by tests); the cart operates on
//! sample data exactly as it would on fetched data.

use async_trait::async_trait;

use greencart_core::{Money, ProductId};

use crate::product::Product;
use crate::source::{CatalogError, CatalogSource};

/// The built-in six-product sample catalog.
pub fn sample_products() -> Vec<Product> {
    fn product(
        id: u64,
        name: &str,
        dollars: u64,
        image: &str,
        category: &str,
        description: &str,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Money::from_dollars(dollars),
            image: image.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    vec![
        product(
            1,
            "Smartphone Pro",
            299,
            "https://via.placeholder.com/150/4285F4/FFFFFF?text=Phone",
            "Electronics",
            "Latest smartphone with advanced features and excellent camera quality.",
        ),
        product(
            2,
            "Wireless Headphones",
            89,
            "https://via.placeholder.com/150/34A853/FFFFFF?text=Audio",
            "Electronics",
            "Premium wireless headphones with noise cancellation technology.",
        ),
        product(
            3,
            "Gaming Laptop",
            899,
            "https://via.placeholder.com/150/EA4335/FFFFFF?text=Laptop",
            "Electronics",
            "High-performance gaming laptop with dedicated graphics card.",
        ),
        product(
            4,
            "Smart Watch",
            199,
            "https://via.placeholder.com/150/FBBC04/FFFFFF?text=Watch",
            "Wearables",
            "Feature-rich smartwatch with health monitoring capabilities.",
        ),
        product(
            5,
            "Bluetooth Speaker",
            45,
            "https://via.placeholder.com/150/9C27B0/FFFFFF?text=Speaker",
            "Electronics",
            "Portable Bluetooth speaker with excellent sound quality.",
        ),
        product(
            6,
            "Tablet Pro",
            399,
            "https://via.placeholder.com/150/FF9800/FFFFFF?text=Tablet",
            "Electronics",
            "Professional tablet perfect for work and entertainment.",
        ),
    ]
}

/// Infallible catalog source over [`sample_products`].
#[derive(Debug, Clone, Default)]
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(sample_products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let products = sample_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable_by_key(|id| id.as_u64());
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[tokio::test]
    async fn sample_catalog_never_fails() {
        let products = SampleCatalog.fetch_products().await.unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].name, "Smartphone Pro");
        assert_eq!(products[0].price, Money::from_dollars(299));
    }
}
