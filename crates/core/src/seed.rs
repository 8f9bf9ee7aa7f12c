//! Fixed demo data the in-memory store starts from.
//!
//! The admin panel ships with one supplement-store bot and a small set of
//! products, users, and checkout options so the dashboard has something to
//! show before any API mutation. Timestamps are captured once per call, so
//! repeated snapshot reads of an unmutated store are byte-identical.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::types::{
    Bot, BotId, BotStatus, Category, CategoryId, Contact, ContactId, Dashboard, Order, OrderId,
    OrderLine, OrderStatus, PaymentMethod, PaymentMethodId, Product, ProductId, Setting, SettingId,
    ShippingOption, ShippingOptionId, User, UserId,
};

/// The single seeded bot every entity belongs to.
///
/// New records minted by the API also get this bot ID; nothing validates it
/// against the Bot collection.
pub const SEED_BOT_ID: &str = "1";

/// Build the seeded dashboard.
#[must_use]
pub fn dashboard() -> Dashboard {
    let now = Utc::now();
    let bot_id = || BotId::new(SEED_BOT_ID);

    Dashboard {
        bots: vec![Bot {
            id: BotId::new("1"),
            name: "PremiumSupps_bot".to_owned(),
            token: "7203541968:AAFdemo-token-not-a-real-credential".to_owned(),
            status: BotStatus::Active,
            welcome_message: "Welcome to our premium supplement store! \u{1f3cb}\u{fe0f}\u{200d}\u{2642}\u{fe0f}\n\nBrowse our high-quality protein powders and supplements to fuel your fitness journey.".to_owned(),
            created_at: now,
        }],
        products: vec![
            Product {
                id: ProductId::new("1"),
                name: "Whey Protein Isolate".to_owned(),
                price: Decimal::new(4599, 2),
                description: "Premium whey protein isolate with 25g protein per serving. Fast-absorbing and perfect for post-workout recovery.".to_owned(),
                category: "Protein Powders".to_owned(),
                stock: 50,
                image: Some("/uploads/whey-protein.jpg".to_owned()),
                bot_id: bot_id(),
            },
            Product {
                id: ProductId::new("2"),
                name: "Creatine Monohydrate".to_owned(),
                price: Decimal::new(2499, 2),
                description: "Pure creatine monohydrate for increased strength, power, and muscle volume. 5g per serving.".to_owned(),
                category: "Supplements".to_owned(),
                stock: 40,
                image: Some("/uploads/creatine.jpg".to_owned()),
                bot_id: bot_id(),
            },
        ],
        users: vec![
            User {
                id: UserId::new("1"),
                username: "john_doe".to_owned(),
                first_name: "John".to_owned(),
                last_name: "Doe".to_owned(),
                last_active: now,
                bot_id: bot_id(),
            },
            User {
                id: UserId::new("2"),
                username: "jane_smith".to_owned(),
                first_name: "Jane".to_owned(),
                last_name: "Smith".to_owned(),
                last_active: now,
                bot_id: bot_id(),
            },
        ],
        orders: vec![Order {
            id: OrderId::new("1"),
            user_id: UserId::new("1"),
            products: vec![OrderLine {
                product_id: ProductId::new("1"),
                quantity: 2,
                price: Decimal::new(4599, 2),
            }],
            total: Decimal::new(9198, 2),
            status: OrderStatus::Completed,
            created_at: now,
            bot_id: bot_id(),
        }],
        categories: vec![
            Category {
                id: CategoryId::new("1"),
                name: "Protein Powders".to_owned(),
                bot_id: bot_id(),
            },
            Category {
                id: CategoryId::new("2"),
                name: "Supplements".to_owned(),
                bot_id: bot_id(),
            },
        ],
        payment_methods: vec![PaymentMethod {
            id: PaymentMethodId::new("1"),
            name: "Bitcoin".to_owned(),
            kind: "crypto".to_owned(),
            address: "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2".to_owned(),
            qr_code: "/uploads/bitcoin-qr.png".to_owned(),
            enabled: true,
            bot_id: bot_id(),
        }],
        shipping_options: vec![
            ShippingOption {
                id: ShippingOptionId::new("1"),
                name: "Standard Shipping".to_owned(),
                price: Decimal::new(599, 2),
                estimated_days: "5-7".to_owned(),
                bot_id: bot_id(),
            },
            ShippingOption {
                id: ShippingOptionId::new("2"),
                name: "Express Shipping".to_owned(),
                price: Decimal::new(1299, 2),
                estimated_days: "2-3".to_owned(),
                bot_id: bot_id(),
            },
        ],
        broadcasts: Vec::new(),
        settings: vec![
            Setting {
                id: SettingId::new("1"),
                key: "store_name".to_owned(),
                value: "Premium Supplements Store".to_owned(),
                bot_id: bot_id(),
            },
            Setting {
                id: SettingId::new("2"),
                key: "support_email".to_owned(),
                value: "support@supplements.example".to_owned(),
                bot_id: bot_id(),
            },
            Setting {
                id: SettingId::new("3"),
                key: "support_phone".to_owned(),
                value: "+1-555-0123".to_owned(),
                bot_id: bot_id(),
            },
        ],
        contacts: vec![Contact {
            id: ContactId::new("1"),
            name: "Customer Support".to_owned(),
            email: "support@supplements.example".to_owned(),
            phone: "+1-555-0123".to_owned(),
            telegram: "@support_bot".to_owned(),
            bot_id: bot_id(),
        }],
    }
}
