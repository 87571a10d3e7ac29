use serde::{Deserialize, Serialize};

use greencart_core::{Entity, Money, ProductId};

/// A purchasable product as supplied by the catalog.
///
/// Read-only to the cart core: the cart copies id/name/price/category/image
/// at the moment an item is added and never looks back, so a later catalog
/// price change does not retroactively reprice lines already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
