//! Client-side session state — app-owned container in the style of the
//! domain state modules: catalog snapshot, live cart quantities, auth token.
//!
//! The session is mutated from several call sites (increase, decrease, clear,
//! remote refresh) with last-write-wins semantics; it assumes one user in one
//! session.

use crate::domain::cart::{CartLine, CartState};
use crate::domain::food::FoodItem;
use crate::shared::FoodId;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub catalog: Vec<FoodItem>,
    pub cart: CartState,
    pub token: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a catalog item by id.
    pub fn food(&self, id: &FoodId) -> Option<&FoodItem> {
        self.catalog.iter().find(|f| &f.id == id)
    }

    /// Join cart quantities with the catalog snapshot.
    ///
    /// Quantities whose id is missing from the catalog are skipped; they would
    /// fail checkout validation anyway, and the next catalog refresh heals the
    /// mapping.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self
            .cart
            .quantities()
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .filter_map(|(id, qty)| self.food(id).map(|item| CartLine::new(item, *qty)))
            .collect();
        // HashMap iteration order is arbitrary; keep the lines presentable.
        lines.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        lines
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
