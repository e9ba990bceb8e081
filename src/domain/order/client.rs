//! Orders sub-client — checkout entry point, order history, deletion.

use crate::client::FoodiesClient;
use crate::domain::order::checkout::run_checkout;
use crate::domain::order::{CheckoutOutcome, Order, OrderDraft};
use crate::error::SdkError;
use crate::notify::Notice;
use crate::payment::{PaymentPrefill, PaymentSurface};

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a FoodiesClient,
}

impl<'a> Orders<'a> {
    /// Run the full checkout sequence for the current cart: draft, create,
    /// collect payment through `surface`, verify, clear the cart.
    ///
    /// Validation failures (empty or malformed cart) stop before any remote
    /// call is made.
    pub async fn checkout(
        &self,
        address: &str,
        phone: &str,
        prefill: PaymentPrefill,
        surface: &impl PaymentSurface,
    ) -> Result<CheckoutOutcome, SdkError> {
        self.client.require_auth().await?;

        let lines = self.client.cart_lines().await;
        let draft = match OrderDraft::from_cart(&lines, address, phone) {
            Ok(draft) => draft,
            Err(e) => {
                self.client
                    .notifier
                    .notify(Notice::error(e.to_string(), None));
                return Err(SdkError::Validation(e.to_string()));
            }
        };

        run_checkout(
            self.client,
            surface,
            self.client.notifier.as_ref(),
            draft,
            prefill,
        )
        .await
    }

    /// The caller's order history.
    pub async fn list_mine(&self) -> Result<Vec<Order>, SdkError> {
        self.client.require_auth().await?;
        match self.client.http.get_orders().await {
            Ok(raw) => Ok(raw.into_iter().map(Into::into).collect()),
            Err(e) => Err(self.client.gateway_failure(e, "Could not load orders")),
        }
    }

    /// Delete an order by server-assigned id.
    pub async fn delete(&self, order_id: &str) -> Result<(), SdkError> {
        self.client.require_auth().await?;
        match self.client.http.delete_order(order_id).await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.client.gateway_failure(e, "Could not delete the order")),
        }
    }
}
