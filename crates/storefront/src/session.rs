use greencart_auth::AuthSession;
use greencart_cart::Cart;
use greencart_checkout::{CheckoutError, CheckoutFlow, SettlementGateway, SettlementReceipt};

/// Everything one user session owns.
///
/// Created empty at session start; each screen receives this by reference
/// instead of reaching into ambient context. Dropping it ends the session —
/// nothing persists.
#[derive(Debug, Default)]
pub struct StorefrontSession {
    pub cart: Cart,
    pub checkout: CheckoutFlow,
    pub auth: AuthSession,
}

impl StorefrontSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full checkout: begin over the current cart, then settle.
    ///
    /// On success the cart is empty and the flow is back at idle; on refusal
    /// or settlement failure the cart is untouched.
    pub async fn check_out(
        &mut self,
        gateway: &dyn SettlementGateway,
    ) -> Result<SettlementReceipt, CheckoutError> {
        let request = self.checkout.begin(&self.cart)?;
        self.checkout
            .settle(&mut self.cart, &request, gateway)
            .await
    }
}
