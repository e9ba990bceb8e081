//! Cart state container — app-owned, SDK-provided update logic.
//!
//! Mutations are expressed as explicit [`CartDelta`] values so the optimistic
//! flow is speculative-apply/compensate: stage a delta, apply it locally, issue
//! the remote call, and apply `inverse()` if the remote call fails.
//!
//! Known race: overlapping mutations (e.g. a rapid double-click issuing two
//! increments) resolve last-write-wins. There is no sequence number; a
//! single-user session is assumed.

use crate::shared::FoodId;
use std::collections::HashMap;

/// One staged quantity change for a single food item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartDelta {
    pub food_id: FoodId,
    pub from: u32,
    pub to: u32,
}

impl CartDelta {
    /// The exact rollback of this delta.
    pub fn inverse(&self) -> CartDelta {
        CartDelta {
            food_id: self.food_id.clone(),
            from: self.to,
            to: self.from,
        }
    }
}

/// Mapping from food id to quantity. Absence of a key is quantity 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    quantities: HashMap<FoodId, u32>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, food_id: &FoodId) -> u32 {
        self.quantities.get(food_id).copied().unwrap_or(0)
    }

    pub fn quantities(&self) -> &HashMap<FoodId, u32> {
        &self.quantities
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|q| *q == 0)
    }

    /// Total number of units across all lines.
    pub fn total_items(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Stage a +1 for `food_id` against the current quantity.
    pub fn stage_increase(&self, food_id: &FoodId) -> CartDelta {
        let from = self.quantity(food_id);
        CartDelta {
            food_id: food_id.clone(),
            from,
            to: from + 1,
        }
    }

    /// Stage a -1 for `food_id`, floored at 0.
    pub fn stage_decrease(&self, food_id: &FoodId) -> CartDelta {
        let from = self.quantity(food_id);
        CartDelta {
            food_id: food_id.clone(),
            from,
            to: from.saturating_sub(1),
        }
    }

    /// Stage an absolute quantity for `food_id`.
    pub fn stage_set(&self, food_id: &FoodId, quantity: u32) -> CartDelta {
        CartDelta {
            food_id: food_id.clone(),
            from: self.quantity(food_id),
            to: quantity,
        }
    }

    /// Commit a staged delta. A resulting quantity of 0 removes the key.
    pub fn apply(&mut self, delta: &CartDelta) {
        if delta.to == 0 {
            self.quantities.remove(&delta.food_id);
        } else {
            self.quantities.insert(delta.food_id.clone(), delta.to);
        }
    }

    /// Replace the whole mapping with a remote snapshot.
    pub fn replace(&mut self, quantities: HashMap<FoodId, u32>) {
        self.quantities = quantities
            .into_iter()
            .filter(|(_, q)| *q > 0)
            .collect();
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_zero() {
        let cart = CartState::new();
        assert_eq!(cart.quantity(&FoodId::from("f1")), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_then_rollback_restores_prior_quantity() {
        let mut cart = CartState::new();
        let id = FoodId::from("f1");
        let d1 = cart.stage_increase(&id);
        cart.apply(&d1);
        let d2 = cart.stage_increase(&id);
        cart.apply(&d2);
        assert_eq!(cart.quantity(&id), 2);

        // Remote call failed: compensate with the exact inverse.
        cart.apply(&d2.inverse());
        assert_eq!(cart.quantity(&id), 1);
    }

    #[test]
    fn test_decrease_floors_at_zero() {
        let cart = CartState::new();
        let id = FoodId::from("f1");
        let delta = cart.stage_decrease(&id);
        assert_eq!(delta.from, 0);
        assert_eq!(delta.to, 0);
    }

    #[test]
    fn test_apply_zero_removes_key() {
        let mut cart = CartState::new();
        let id = FoodId::from("f1");
        cart.apply(&cart.stage_set(&id, 3));
        cart.apply(&cart.stage_set(&id, 0));
        assert!(cart.quantities().is_empty());
    }

    #[test]
    fn test_inverse_of_set_restores_previous_value() {
        let mut cart = CartState::new();
        let id = FoodId::from("f1");
        cart.apply(&cart.stage_set(&id, 4));
        let delta = cart.stage_set(&id, 9);
        cart.apply(&delta);
        assert_eq!(cart.quantity(&id), 9);
        cart.apply(&delta.inverse());
        assert_eq!(cart.quantity(&id), 4);
    }

    #[test]
    fn test_replace_drops_zero_quantities() {
        let mut cart = CartState::new();
        let mut snapshot = HashMap::new();
        snapshot.insert(FoodId::from("a"), 2);
        snapshot.insert(FoodId::from("b"), 0);
        cart.replace(snapshot);
        assert_eq!(cart.quantity(&FoodId::from("a")), 2);
        assert_eq!(cart.quantities().len(), 1);
        assert_eq!(cart.total_items(), 2);
    }
}
