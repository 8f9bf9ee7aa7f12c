//! Domain types for the admin panel.
//!
//! All records are flat, serde-serialized with camelCase wire names, and
//! carry a denormalized `bot_id` tying them to their owning bot. Monetary
//! amounts are `rust_decimal::Decimal` (decimal strings on the wire).

pub mod bot;
pub mod broadcast;
pub mod catalog;
pub mod customer;
pub mod dashboard;
pub mod id;
pub mod order;
pub mod payment;
pub mod setting;

pub use bot::{Bot, BotStatus};
pub use broadcast::{Broadcast, BroadcastStatus};
pub use catalog::{Category, Product, ProductForm};
pub use customer::{Contact, User};
pub use dashboard::Dashboard;
pub use id::{
    BotId, BroadcastId, CategoryId, ContactId, OrderId, PaymentMethodId, ProductId, SettingId,
    ShippingOptionId, UserId,
};
pub use order::{Order, OrderLine, OrderStatus};
pub use payment::{PaymentMethod, ShippingOption};
pub use setting::Setting;
