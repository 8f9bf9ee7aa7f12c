//! The dashboard aggregate - every collection the admin panel manages.

use serde::{Deserialize, Serialize};

use super::bot::Bot;
use super::broadcast::Broadcast;
use super::catalog::{Category, Product};
use super::customer::{Contact, User};
use super::order::Order;
use super::payment::{PaymentMethod, ShippingOption};
use super::setting::Setting;

/// The full contents of the in-memory store.
///
/// This is both the store's backing data and the wire shape of the snapshot
/// endpoint: the whole record is serialized as one document, with no
/// pagination or projection. There is no relational integrity between
/// collections beyond the denormalized `botId`/`userId`/`productId` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub bots: Vec<Bot>,
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub categories: Vec<Category>,
    pub payment_methods: Vec<PaymentMethod>,
    pub shipping_options: Vec<ShippingOption>,
    pub broadcasts: Vec<Broadcast>,
    pub settings: Vec<Setting>,
    pub contacts: Vec<Contact>,
}
