use serde::{Deserialize, Serialize};

use greencart_catalog::Product;
use greencart_core::{Money, ProductId};

/// Smallest quantity a live line item can have. A line that would drop below
/// this is removed (after confirmation) instead.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a line item can have; requests beyond it are clamped.
pub const MAX_QUANTITY: u32 = 99;

/// One product entry in the cart with its own quantity and captured price.
///
/// The unit price is copied from the catalog at add time and does not track
/// later catalog price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a catalog product into a line item at a clamped quantity.
    pub(crate) fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity: clamp_quantity(quantity),
        }
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.mul_quantity(self.quantity)
    }
}

pub(crate) fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_quantity(0), MIN_QUANTITY);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(42), 42);
        assert_eq!(clamp_quantity(99), 99);
        assert_eq!(clamp_quantity(1000), MAX_QUANTITY);
    }
}
