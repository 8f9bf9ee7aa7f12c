//! Product catalog route handlers.
//!
//! Create and update accept `multipart/form-data` with text fields plus an
//! optional `image` file, mirroring the admin client's form submissions.
//! There is no server-side presence validation: absent fields default on
//! create and are left untouched on update.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use botshop_core::types::{Product, ProductForm, ProductId};

use crate::error::AppError;
use crate::services::upload::UploadStore;
use crate::state::AppState;

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Multipart field name the product image arrives under.
const IMAGE_FIELD: &str = "image";

/// Acknowledgment body for deletes.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Create a product from form fields and an optional image upload.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Product>, AppError> {
    let form = read_form(multipart, state.uploads()).await?;
    let product = state.store().insert_product(form)?;
    tracing::info!(id = %product.id, name = %product.name, "product created");
    Ok(Json(product))
}

/// Shallow-merge form fields over an existing product.
///
/// The stored image path is replaced only when this request carried a new
/// file. Unknown IDs yield a 404 without touching the collection.
#[instrument(skip(state, multipart), fields(id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    multipart: Multipart,
) -> Result<Json<Product>, AppError> {
    let form = read_form(multipart, state.uploads()).await?;
    match state.store().update_product(&id, form)? {
        Some(product) => {
            tracing::info!(id = %product.id, "product updated");
            Ok(Json(product))
        }
        None => Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_owned())),
    }
}

/// Delete a product by ID.
///
/// Deletion is unconditional: unknown IDs still get a success
/// acknowledgment.
#[instrument(skip(state), fields(id = %id))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<DeleteAck>, AppError> {
    state.store().remove_product(&id)?;
    tracing::info!(id = %id, "product deleted");
    Ok(Json(DeleteAck { success: true }))
}

/// Drain a multipart body into a product form.
///
/// At most one file is expected; it is stored immediately and the form
/// carries its servable path. Oversized files abort here, before any store
/// mutation.
async fn read_form(
    mut multipart: Multipart,
    uploads: &UploadStore,
) -> Result<ProductForm, AppError> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let file_name = field.file_name().map(str::to_owned);

        if name == IMAGE_FIELD {
            if let Some(file_name) = file_name {
                let bytes = field.bytes().await?;
                form.image = Some(uploads.save(IMAGE_FIELD, &file_name, &bytes).await?);
            }
            continue;
        }

        let value = field.text().await?;
        set_field(&mut form, &name, &value);
    }

    Ok(form)
}

/// Apply one text field to the form.
///
/// Numeric fields parse leniently: garbage falls back to zero rather than
/// erroring, matching the no-validation contract. Unknown field names are
/// accepted and dropped.
fn set_field(form: &mut ProductForm, name: &str, value: &str) {
    match name {
        "name" => form.name = Some(value.to_owned()),
        "price" => form.price = Some(value.trim().parse().unwrap_or(Decimal::ZERO)),
        "description" => form.description = Some(value.to_owned()),
        "category" => form.category = Some(value.to_owned()),
        "stock" => form.stock = Some(value.trim().parse().unwrap_or(0)),
        _ => {}
    }
}
