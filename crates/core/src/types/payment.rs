//! Payment and shipping domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BotId, PaymentMethodId, ShippingOptionId};

/// A payment method offered at checkout.
///
/// Seeded only; display-only in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    /// Free-form kind label, e.g. `crypto`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Receiving address or account details.
    pub address: String,
    /// Servable path of a payment QR code image.
    pub qr_code: String,
    pub enabled: bool,
    pub bot_id: BotId,
}

/// A shipping option offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub id: ShippingOptionId,
    pub name: String,
    pub price: Decimal,
    /// Display range, e.g. `5-7`.
    pub estimated_days: String,
    pub bot_id: BotId,
}
