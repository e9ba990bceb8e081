//! Payment collection surface — the externally-hosted step of checkout.
//!
//! The SDK never talks to the payment provider itself. Checkout hands a
//! [`PaymentRequest`] to a [`PaymentSurface`] implementation (a hosted modal,
//! a terminal prompt, a test fake) which suspends until a human acts and
//! resolves to exactly one [`PaymentAction`].

use serde::{Deserialize, Serialize};

/// Contact fields used to prefill the payment surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Everything a payment surface needs to collect a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Amount in minor units (e.g. paise), as issued by the backend.
    pub amount_minor: u64,
    pub currency: String,
    /// Backend-issued payment-gateway order handle.
    pub order_handle: String,
    pub prefill: PaymentPrefill,
}

/// Proof of payment produced by the surface on confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub payment_order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// The single outcome of one payment collection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentAction {
    Confirmed(PaymentConfirmation),
    Dismissed,
}

/// An externally-hosted payment collection step.
#[allow(async_fn_in_trait)]
pub trait PaymentSurface {
    /// Present the request and suspend until the user confirms or dismisses.
    async fn collect(&self, request: PaymentRequest) -> PaymentAction;
}
