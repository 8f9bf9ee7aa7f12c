//! Product catalog domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BotId, CategoryId, ProductId};

/// A product sold through the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Long-form description shown in the bot.
    pub description: String,
    /// Category name (denormalized, not validated against the Category
    /// collection).
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    /// Servable image path under `/uploads`, if an image was uploaded.
    pub image: Option<String>,
    /// Owning bot.
    pub bot_id: BotId,
}

impl Product {
    /// Create an empty product owned by `bot_id`.
    ///
    /// Fields not supplied by the caller stay at their defaults; the API
    /// performs no presence validation.
    #[must_use]
    pub fn new(id: ProductId, bot_id: BotId) -> Self {
        Self {
            id,
            name: String::new(),
            price: Decimal::ZERO,
            description: String::new(),
            category: String::new(),
            stock: 0,
            image: None,
            bot_id,
        }
    }

    /// Shallow-merge `form` over this product.
    ///
    /// Only fields present in the form are overwritten; in particular the
    /// image path is replaced only when a new upload produced one.
    pub fn apply(&mut self, form: ProductForm) {
        if let Some(name) = form.name {
            self.name = name;
        }
        if let Some(price) = form.price {
            self.price = price;
        }
        if let Some(description) = form.description {
            self.description = description;
        }
        if let Some(category) = form.category {
            self.category = category;
        }
        if let Some(stock) = form.stock {
            self.stock = stock;
        }
        if let Some(image) = form.image {
            self.image = Some(image);
        }
    }
}

/// Fields accepted by the product create/update endpoints.
///
/// Every field is optional: create treats absent fields as defaults, update
/// leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    /// Servable path of a freshly stored upload.
    pub image: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub bot_id: BotId,
}
