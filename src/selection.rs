//! The user's product selection
//!
//! A toggle-set over catalog products, unique by product id, kept in
//! insertion order for display.

use crate::catalog::Product;

/// Products the user has chosen from the recommendation list.
///
/// Owned by the wizard for one session and cleared on restart.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    members: Vec<Product>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product: insert if absent (by id), remove if present.
    ///
    /// Two identical toggles restore the prior state.
    pub fn toggle(&mut self, product: Product) {
        if let Some(pos) = self.members.iter().position(|p| p.id == product.id) {
            self.members.remove(pos);
        } else {
            self.members.push(product);
        }
    }

    /// Whether the product with the given id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.members.iter().any(|p| p.id == id)
    }

    /// Sum of the prices of all selected products.
    pub fn total(&self) -> u32 {
        self.members.iter().map(|p| p.price).sum()
    }

    /// Selected products in toggle/insertion order.
    pub fn members(&self) -> &[Product] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Remove all products.
    pub fn clear(&mut self) {
        self.members.clear();
    }
}
