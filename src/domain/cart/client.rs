//! Cart sub-client — optimistic quantity mutations with explicit rollback.
//!
//! Every mutation stages a [`CartDelta`](super::CartDelta), applies it locally,
//! issues the remote call, and applies the inverse delta if the call fails.
//! Overlapping calls are last-write-wins (single-user session).
//!
//! Only `increase` emits an affirmative notice: adding an item is the one
//! cart action the user takes from outside the cart view. The other mutations
//! happen on a screen that already re-renders the quantity, so success stays
//! quiet and only failures emit a notice.

use crate::client::FoodiesClient;
use crate::error::SdkError;
use crate::shared::FoodId;
use std::collections::HashMap;

/// Sub-client for cart operations.
pub struct Cart<'a> {
    pub(crate) client: &'a FoodiesClient,
}

impl<'a> Cart<'a> {
    /// Add one unit of `food_id`. Returns the new local quantity.
    pub async fn increase(&self, food_id: &FoodId) -> Result<u32, SdkError> {
        self.client.require_auth().await?;
        let delta = {
            let mut session = self.client.session.write().await;
            let delta = session.cart.stage_increase(food_id);
            session.cart.apply(&delta);
            delta
        };
        match self.client.http.add_to_cart(food_id).await {
            Ok(_) => {
                self.client.notify_success("Added to cart");
                Ok(delta.to)
            }
            Err(e) => {
                self.client.session.write().await.cart.apply(&delta.inverse());
                Err(self.client.gateway_failure(e, "Could not add item to cart"))
            }
        }
    }

    /// Remove one unit of `food_id`, floored at 0 locally. The decrement
    /// request is issued even at the floor. Returns the new local quantity.
    /// Quiet on success.
    pub async fn decrease(&self, food_id: &FoodId) -> Result<u32, SdkError> {
        self.client.require_auth().await?;
        let delta = {
            let mut session = self.client.session.write().await;
            let delta = session.cart.stage_decrease(food_id);
            session.cart.apply(&delta);
            delta
        };
        match self.client.http.remove_from_cart(food_id).await {
            Ok(_) => Ok(delta.to),
            Err(e) => {
                self.client.session.write().await.cart.apply(&delta.inverse());
                Err(self.client.gateway_failure(e, "Could not update cart"))
            }
        }
    }

    /// Set an absolute quantity for `food_id`. Quiet on success.
    pub async fn set_quantity(&self, food_id: &FoodId, quantity: u32) -> Result<u32, SdkError> {
        self.client.require_auth().await?;
        let delta = {
            let mut session = self.client.session.write().await;
            let delta = session.cart.stage_set(food_id, quantity);
            session.cart.apply(&delta);
            delta
        };
        match self.client.http.set_cart_quantity(food_id, quantity).await {
            Ok(_) => Ok(delta.to),
            Err(e) => {
                self.client.session.write().await.cart.apply(&delta.inverse());
                Err(self.client.gateway_failure(e, "Could not update cart"))
            }
        }
    }

    /// Replace the local mapping with the remote cart.
    pub async fn refresh(&self) -> Result<HashMap<FoodId, u32>, SdkError> {
        match self.client.http.get_cart().await {
            Ok(resp) => {
                self.client.session.write().await.cart.replace(resp.items.clone());
                Ok(resp.items)
            }
            Err(e) => Err(self.client.gateway_failure(e, "Could not load cart")),
        }
    }

    /// Clear the cart remotely, then locally on success. Quiet on success.
    pub async fn clear(&self) -> Result<(), SdkError> {
        self.client.require_auth().await?;
        match self.client.http.clear_cart().await {
            Ok(()) => {
                self.client.session.write().await.cart.clear();
                Ok(())
            }
            Err(e) => Err(self.client.gateway_failure(e, "Could not clear cart")),
        }
    }
}
