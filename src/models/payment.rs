use serde::Deserialize;
use std::collections::HashMap;

/// Envelope delivered by the payment provider's webhook. Only the fields
/// the relay inspects are modeled; everything else rides along untouched.
#[derive(Debug, Deserialize)]
pub struct PaymentEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: PaymentEventData,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentEventData {
    #[serde(default)]
    pub object: PaymentObject,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentObject {
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl PaymentObject {
    /// Checkout sessions carry the email under customer_details; invoice
    /// and subscription objects carry it at the top level.
    pub fn email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|d| d.email.as_deref())
            .or(self.customer_email.as_deref())
    }
}
