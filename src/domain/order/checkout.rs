//! Checkout sequence — the one multi-step workflow in the SDK.
//!
//! States: `Drafted → PaymentPending → Verifying → Completed`, with terminal
//! `Cancelled` (user dismissed the payment surface) and terminal `Failed`
//! (reachable from any non-terminal state). The machine lives entirely inside
//! one [`run_checkout`] call; nothing is persisted across restarts.

use super::{CreatedOrder, Order, OrderDraft};
use crate::error::{HttpError, SdkError};
use crate::notify::{Notice, Notifier};
use crate::payment::{PaymentAction, PaymentConfirmation, PaymentPrefill, PaymentRequest, PaymentSurface};

/// Position in one checkout attempt. Used for transition logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Drafted,
    PaymentPending,
    Verifying,
    Completed,
    Cancelled,
    Failed,
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckoutState::Drafted => "drafted",
            CheckoutState::PaymentPending => "payment_pending",
            CheckoutState::Verifying => "verifying",
            CheckoutState::Completed => "completed",
            CheckoutState::Cancelled => "cancelled",
            CheckoutState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// How a checkout attempt ended, short of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Completed(Order),
    /// The user dismissed the payment surface; the compensating delete was
    /// issued for this order id (best-effort, no retry).
    Cancelled { order_id: String },
}

/// Remote operations the checkout sequence depends on.
///
/// `FoodiesClient` implements this against the real backend; tests drive the
/// sequence with in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait CheckoutGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<CreatedOrder, HttpError>;
    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<Order, HttpError>;
    async fn delete_order(&self, order_id: &str) -> Result<(), HttpError>;
    async fn clear_cart(&self) -> Result<(), HttpError>;
}

/// Drive one checkout attempt from draft to a terminal state.
///
/// Exactly one of the following happens per invocation: `Ok(Completed)`,
/// `Ok(Cancelled)`, or `Err` (the `Failed` terminal). Every failure emits one
/// notice; completion and cancellation each emit one notice.
pub async fn run_checkout<G, P>(
    gateway: &G,
    surface: &P,
    notifier: &dyn Notifier,
    draft: OrderDraft,
    prefill: PaymentPrefill,
) -> Result<CheckoutOutcome, SdkError>
where
    G: CheckoutGateway,
    P: PaymentSurface,
{
    tracing::debug!(state = %CheckoutState::Drafted, amount = %draft.amount, "checkout started");

    let created = match gateway.create_order(&draft).await {
        Ok(created) => created,
        Err(e) => {
            tracing::debug!(state = %CheckoutState::Failed, error = %e, "order creation failed");
            notifier.notify(Notice::error(
                e.message_or("Could not place the order"),
                e.status(),
            ));
            return Err(e.into());
        }
    };

    tracing::debug!(
        state = %CheckoutState::PaymentPending,
        order_id = %created.order_id,
        handle = %created.payment_order_id,
        "awaiting payment"
    );

    let request = PaymentRequest {
        amount_minor: created.amount_minor,
        currency: created.currency.clone(),
        order_handle: created.payment_order_id.clone(),
        prefill,
    };

    match surface.collect(request).await {
        PaymentAction::Dismissed => {
            // Compensating delete for the order created above. A failed delete
            // leaves an orphan; this codebase does not reconcile it.
            if let Err(e) = gateway.delete_order(&created.order_id).await {
                tracing::warn!(
                    order_id = %created.order_id,
                    error = %e,
                    "compensating order delete failed"
                );
            }
            tracing::debug!(state = %CheckoutState::Cancelled, order_id = %created.order_id, "payment dismissed");
            notifier.notify(Notice::error("Payment cancelled", None));
            Ok(CheckoutOutcome::Cancelled {
                order_id: created.order_id,
            })
        }
        PaymentAction::Confirmed(confirmation) => {
            tracing::debug!(state = %CheckoutState::Verifying, order_id = %created.order_id, "verifying payment");
            match gateway.verify_payment(&confirmation).await {
                Ok(order) => {
                    // Accepted inconsistency: verification already succeeded,
                    // so a failed cart clear does not revert completion. The
                    // stale cart is left for the next refresh.
                    if let Err(e) = gateway.clear_cart().await {
                        tracing::warn!(error = %e, "cart clear failed after verified payment");
                    }
                    tracing::debug!(state = %CheckoutState::Completed, order_id = %order.id, "checkout complete");
                    notifier.notify(Notice::success("Order placed successfully"));
                    Ok(CheckoutOutcome::Completed(order))
                }
                Err(e) => {
                    tracing::debug!(state = %CheckoutState::Failed, error = %e, "payment verification failed");
                    notifier.notify(Notice::error(
                        e.message_or("Payment verification failed"),
                        e.status(),
                    ));
                    Err(e.into())
                }
            }
        }
    }
}
