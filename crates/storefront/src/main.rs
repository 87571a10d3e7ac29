//! Scripted storefront session, standing in for the mobile UI.
//!
//! Loads the sample catalog, pokes the cart the way a user would (add,
//! increment, decrement to the confirmation prompt, confirm), then runs a
//! simulated checkout and logs the receipt.

use anyhow::Context;
use tracing::info;

use greencart_cart::DecrementOutcome;
use greencart_catalog::{CatalogSource, SampleCatalog};
use greencart_checkout::SimulatedGateway;
use greencart_storefront::StorefrontSession;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    greencart_observability::init();

    let products = SampleCatalog
        .fetch_products()
        .await
        .context("loading catalog")?;
    info!(count = products.len(), "catalog loaded");

    let mut session = StorefrontSession::new();

    let phone = &products[0];
    let headphones = &products[1];

    session.cart.add_or_set_quantity(phone, 2);
    session.cart.add_or_set_quantity(headphones, 1);
    session.cart.increment(headphones.id);
    info!(
        items = session.cart.item_count(),
        subtotal = %session.cart.subtotal(),
        "cart filled"
    );

    // Take the headphones back down to one, then off the cart entirely —
    // which requires confirming the removal prompt.
    session.cart.decrement(headphones.id);
    if let DecrementOutcome::ConfirmationRequired(request) = session.cart.decrement(headphones.id) {
        info!(product_id = %request.product_id, "confirming removal");
        session.cart.confirm_removal(request.id);
    }
    info!(
        items = session.cart.item_count(),
        subtotal = %session.cart.subtotal(),
        "cart after removal"
    );

    let receipt = session
        .check_out(&SimulatedGateway::default())
        .await
        .context("checkout")?;
    info!(
        confirmation = %receipt.confirmation,
        total = %receipt.total,
        "order placed"
    );

    Ok(())
}
