//! HTTP catalog source (fakestore-style REST endpoint).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use greencart_core::{Money, ProductId};

use crate::product::Product;
use crate::source::{CatalogError, CatalogSource};

/// Wire representation of a product as the endpoint serves it.
///
/// The endpoint calls the display name `title` and sends the price as a
/// decimal number of whole currency units.
#[derive(Debug, Deserialize)]
struct ApiProduct {
    id: u64,
    title: String,
    price: f64,
    description: String,
    category: String,
    image: String,
}

impl From<ApiProduct> for Product {
    fn from(api: ApiProduct) -> Self {
        Product {
            id: ProductId::new(api.id),
            name: api.title,
            price: price_to_cents(api.price),
            image: api.image,
            category: api.category,
            description: api.description,
        }
    }
}

/// Convert a wire price (whole units, up to two decimals) to cents.
///
/// Rounds half away from zero; negative wire prices are treated as zero
/// rather than rejected, since the domain has no representation for them.
fn price_to_cents(price: f64) -> Money {
    if price.is_finite() && price > 0.0 {
        Money::from_cents((price * 100.0).round() as u64)
    } else {
        Money::ZERO
    }
}

/// Catalog backed by a remote REST endpoint (`GET {base}/products`).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        debug!(%url, "fetching catalog");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Http {
                status: response.status().as_u16(),
            });
        }

        let products: Vec<ApiProduct> = response.json().await?;
        debug!(count = products.len(), "catalog fetched");
        Ok(products.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_product_maps_title_and_price() {
        let api: ApiProduct = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "Wireless Headphones",
                "price": 89.0,
                "description": "Premium wireless headphones with noise cancellation technology.",
                "category": "Electronics",
                "image": "https://example.test/audio.jpg"
            }"#,
        )
        .unwrap();

        let product = Product::from(api);
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.name, "Wireless Headphones");
        assert_eq!(product.price, Money::from_dollars(89));
    }

    #[test]
    fn fractional_price_rounds_to_cents() {
        assert_eq!(price_to_cents(109.95), Money::from_cents(10995));
        assert_eq!(price_to_cents(22.3), Money::from_cents(2230));
    }

    #[test]
    fn degenerate_prices_collapse_to_zero() {
        assert_eq!(price_to_cents(-5.0), Money::ZERO);
        assert_eq!(price_to_cents(f64::NAN), Money::ZERO);
    }
}
