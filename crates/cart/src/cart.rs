use serde::{Deserialize, Serialize};

use greencart_catalog::Product;
use greencart_core::{Money, ProductId, RemovalRequestId};

use crate::line::{CartLine, MAX_QUANTITY, MIN_QUANTITY, clamp_quantity};

/// A pending "are you sure?" removal confirmation.
///
/// Issued when removing a line requires explicit user confirmation (the
/// remove button, or decrementing the last unit). The cart stays unchanged
/// until the request is confirmed; confirming a stale request is a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRequest {
    pub id: RemovalRequestId,
    pub product_id: ProductId,
}

/// Result of decrementing a line item's quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// Quantity was above the floor and went down by one.
    Decremented(u32),
    /// Quantity was exactly one. Removing the line needs explicit
    /// confirmation; the cart is unchanged.
    ConfirmationRequired(RemovalRequest),
    /// No line for that product.
    NotInCart,
}

/// The shopping cart: an ordered collection of line items, at most one per
/// product, insertion order preserved for display.
///
/// No operation fails under normal input: out-of-range quantities are
/// clamped, unknown ids are ignored. Totals are recomputed on every call —
/// correctness over micro-performance at this scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    pending_removals: Vec<RemovalRequest>,
}

impl Cart {
    /// Create an empty cart (session start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cart from existing line items (sample data or a prior session).
    ///
    /// Later entries for a duplicate product replace earlier ones;
    /// quantities are clamped on the way in.
    pub fn seeded(items: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for mut line in items {
            line.quantity = clamp_quantity(line.quantity);
            match cart.position(line.product_id) {
                Some(idx) => cart.lines[idx] = line,
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Quantity of the line for `product_id`, if present. Never zero.
    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.position(product_id).map(|idx| self.lines[idx].quantity)
    }

    /// Removal confirmations issued and not yet confirmed or invalidated.
    pub fn pending_removals(&self) -> &[RemovalRequest] {
        &self.pending_removals
    }

    /// Insert a product at the desired quantity, or set the quantity of its
    /// existing line.
    ///
    /// Set-to-N semantics, not add-N-more: this is what the quantity controls
    /// call. Quantity is clamped to `[MIN_QUANTITY, MAX_QUANTITY]`; the
    /// original insertion position is preserved on update.
    pub fn add_or_set_quantity(&mut self, product: &Product, quantity: u32) {
        match self.position(product.id) {
            Some(idx) => self.lines[idx].quantity = clamp_quantity(quantity),
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Increase a line's quantity by one. No-op at the ceiling or for an
    /// unknown id — hitting the cap is not an error.
    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(idx) = self.position(product_id) {
            let line = &mut self.lines[idx];
            if line.quantity < MAX_QUANTITY {
                line.quantity += 1;
            }
        }
    }

    /// Decrease a line's quantity by one.
    ///
    /// At quantity one this does **not** remove the line; it issues a
    /// [`RemovalRequest`] the caller must confirm. Two steps on purpose, so a
    /// stray tap cannot delete an item.
    pub fn decrement(&mut self, product_id: ProductId) -> DecrementOutcome {
        let Some(idx) = self.position(product_id) else {
            return DecrementOutcome::NotInCart;
        };

        let line = &mut self.lines[idx];
        if line.quantity > MIN_QUANTITY {
            line.quantity -= 1;
            DecrementOutcome::Decremented(line.quantity)
        } else {
            DecrementOutcome::ConfirmationRequired(self.issue_removal(product_id))
        }
    }

    /// Ask to remove a line (the trash button). Returns the confirmation
    /// request to put in front of the user, or `None` if the product is not
    /// in the cart.
    pub fn request_removal(&mut self, product_id: ProductId) -> Option<RemovalRequest> {
        self.position(product_id)
            .map(|_| self.issue_removal(product_id))
    }

    /// Confirm a previously issued removal request.
    ///
    /// Returns whether a line was removed. Unknown or stale request ids leave
    /// the cart unchanged.
    pub fn confirm_removal(&mut self, request_id: RemovalRequestId) -> bool {
        let Some(pos) = self
            .pending_removals
            .iter()
            .position(|r| r.id == request_id)
        else {
            return false;
        };

        let product_id = self.pending_removals[pos].product_id;
        let existed = self.position(product_id).is_some();
        self.remove(product_id);
        existed
    }

    /// Remove the line for `product_id` unconditionally.
    ///
    /// Idempotent: unknown ids are silently ignored. Any pending removal
    /// requests for the product are invalidated.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
        self.pending_removals.retain(|r| r.product_id != product_id);
    }

    /// Drop every line item (successful checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending_removals.clear();
    }

    /// Sum of `unit_price * quantity` over current items.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over current items.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    fn issue_removal(&mut self, product_id: ProductId) -> RemovalRequest {
        let request = RemovalRequest {
            id: RemovalRequestId::new(),
            product_id,
        };
        self.pending_removals.push(request);
        request
    }
}
