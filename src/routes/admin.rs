use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    catalog::featured_transition,
    error::{AppError, Result},
    models::{
        ensure_category_deletable, validate_category_name, Billboard, Category, Color,
        CreateAttributeRequest,
        CreateBillboardRequest, CreateCategoryRequest, CreateDiscountRequest,
        CreateProductRequest, Discount, DiscountResponse, ImageUploadUrl, Product,
        ProductImageUrlRequest, ProductImageUrlResponse, ProductResponse, Size,
        UpdateBillboardRequest, UpdateCategoryRequest, UpdateDiscountRequest,
        UpdateProductRequest,
    },
    queries::{
        attribute_queries, billboard_queries, category_queries, discount_queries, product_queries,
    },
    routes::products::build_product_response,
    services::image_url_service::{delete_objects_by_prefix, put_object_url},
    utils::slug::slugify,
    AppState,
};

const UPLOAD_URL_TTL_SECS: u64 = 900;

#[derive(serde::Serialize)]
pub struct PartitionedCatalog {
    pub featured: Vec<crate::catalog::CatalogProduct>,
    pub unfeatured: Vec<crate::catalog::CatalogProduct>,
}

/// Admin product listing, split into the featured and unfeatured views.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<PartitionedCatalog>> {
    let snapshot = state.catalog.snapshot(&state.db).await?;
    let (featured, unfeatured) = crate::catalog::partition_featured(&snapshot);

    Ok(Json(PartitionedCatalog {
        featured,
        unfeatured,
    }))
}

fn field_error(field: &str, message: &str) -> AppError {
    let mut errors = BTreeMap::new();
    errors.insert(field.to_string(), message.to_string());
    AppError::Validation(errors)
}

//PRODUCT ROUTES
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if payload.name.trim().is_empty() {
        return Err(field_error("name", "is required"));
    }

    if payload.price < Decimal::ZERO {
        return Err(field_error("price", "must not be negative"));
    }

    ensure_product_references(
        &state,
        Some(payload.category_id),
        payload.color_id,
        payload.size_id,
        payload.discount_id,
    )
    .await?;

    let product = product_queries::create_product(&state.db, &payload).await?;
    state.catalog.invalidate().await;

    let response = build_product_response(&state, product).await?;

    Ok(Json(response))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    if let Some(ref name) = payload.name {
        if name.trim().is_empty() {
            return Err(field_error("name", "must not be empty"));
        }
    }

    if let Some(price) = payload.price {
        if price < Decimal::ZERO {
            return Err(field_error("price", "must not be negative"));
        }
    }

    ensure_product_references(
        &state,
        payload.category_id,
        payload.color_id,
        payload.size_id,
        payload.discount_id,
    )
    .await?;

    let product = product_queries::update_product(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    state.catalog.invalidate().await;

    let response = build_product_response(&state, product).await?;

    Ok(Json(response))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let s3_prefix = format!("products/{}/", id);
    delete_objects_by_prefix(&state.s3_client, &state.s3_bucket, &s3_prefix).await?;

    product_queries::delete_product(&state.db, id).await?;
    state.catalog.invalidate().await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn generate_product_image_urls(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductImageUrlRequest>,
) -> Result<Json<ProductImageUrlResponse>> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    let mut images = Vec::with_capacity(payload.images.len());

    for req in payload.images {
        let image_uuid = Uuid::new_v4();
        let extension = match req.content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        };

        let key = format!("products/{}/{}.{}", id, image_uuid, extension);

        let upload_url = put_object_url(
            &state.s3_client,
            &state.s3_bucket,
            &key,
            &req.content_type,
            UPLOAD_URL_TTL_SECS,
        )
        .await?;

        let public_url = format!("{}/{}", state.assets_url, key);

        images.push(ImageUploadUrl {
            upload_url,
            public_url,
        });
    }

    Ok(Json(ProductImageUrlResponse { images }))
}

pub async fn add_featured(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    let Some((flag, stamp)) = featured_transition(product.is_featured, true, Utc::now()) else {
        // Already featured; the stamp stays as it was.
        return Ok(Json(product));
    };

    let mut staged = state.catalog.stage_featured(id, flag, stamp).await;

    match product_queries::set_featured(&state.db, id, flag, stamp).await {
        Ok(Some(updated)) => {
            staged.commit().await;
            Ok(Json(updated))
        }
        Ok(None) => {
            staged.rollback().await;
            Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )))
        }
        Err(e) => {
            staged.rollback().await;
            Err(e)
        }
    }
}

pub async fn remove_featured(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    let Some((flag, stamp)) = featured_transition(product.is_featured, false, Utc::now()) else {
        return Ok(Json(product));
    };

    let mut staged = state.catalog.stage_featured(id, flag, stamp).await;

    match product_queries::set_featured(&state.db, id, flag, stamp).await {
        Ok(Some(updated)) => {
            staged.commit().await;
            Ok(Json(updated))
        }
        Ok(None) => {
            staged.rollback().await;
            Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )))
        }
        Err(e) => {
            staged.rollback().await;
            Err(e)
        }
    }
}

async fn ensure_product_references(
    state: &AppState,
    category_id: Option<Uuid>,
    color_id: Option<Uuid>,
    size_id: Option<Uuid>,
    discount_id: Option<Uuid>,
) -> Result<()> {
    if let Some(category_id) = category_id {
        if category_queries::find_by_id(&state.db, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                category_id
            )));
        }
    }

    if let Some(color_id) = color_id {
        if attribute_queries::find_color_by_id(&state.db, color_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Color with id {} not found",
                color_id
            )));
        }
    }

    if let Some(size_id) = size_id {
        if attribute_queries::find_size_by_id(&state.db, size_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Size with id {} not found",
                size_id
            )));
        }
    }

    if let Some(discount_id) = discount_id {
        if discount_queries::find_by_id(&state.db, discount_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Discount with id {} not found",
                discount_id
            )));
        }
    }

    Ok(())
}

//CATEGORY ROUTES
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>> {
    validate_category_name(&payload.name)?;

    if category_queries::find_by_name(&state.db, payload.name.trim())
        .await?
        .is_some()
    {
        return Err(field_error("name", "a category with this name already exists"));
    }

    let slug = slugify(&payload.name);
    let category = category_queries::create_category(&state.db, &payload, &slug).await?;

    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>> {
    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Category with id {} not found",
            id
        )));
    }

    let slug = match payload.name {
        Some(ref name) => {
            validate_category_name(name)?;

            if let Some(existing) = category_queries::find_by_name(&state.db, name.trim()).await? {
                if existing.id != id {
                    return Err(field_error(
                        "name",
                        "a category with this name already exists",
                    ));
                }
            }

            Some(slugify(name))
        }
        None => None,
    };

    let category = category_queries::update_category(
        &state.db,
        id,
        payload.name.as_deref(),
        slug.as_deref(),
        payload.image_url.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

    state.catalog.invalidate().await;

    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Category with id {} not found",
            id
        )));
    }

    ensure_category_deletable(product_queries::any_references_category(&state.db, id).await?)?;

    category_queries::delete_category(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

//COLOR & SIZE ROUTES
pub async fn get_all_colors(State(state): State<AppState>) -> Result<Json<Vec<Color>>> {
    let colors = attribute_queries::get_all_colors(&state.db).await?;
    Ok(Json(colors))
}

pub async fn create_color(
    State(state): State<AppState>,
    Json(payload): Json<CreateAttributeRequest>,
) -> Result<Json<Color>> {
    validate_attribute(&payload)?;

    let color = attribute_queries::create_color(&state.db, &payload).await?;
    Ok(Json(color))
}

pub async fn delete_color(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if attribute_queries::find_color_by_id(&state.db, id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!("Color with id {} not found", id)));
    }

    if product_queries::any_references_color(&state.db, id).await? {
        return Err(AppError::Conflict(
            "Color is still referenced by products".to_string(),
        ));
    }

    attribute_queries::delete_color(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_all_sizes(State(state): State<AppState>) -> Result<Json<Vec<Size>>> {
    let sizes = attribute_queries::get_all_sizes(&state.db).await?;
    Ok(Json(sizes))
}

pub async fn create_size(
    State(state): State<AppState>,
    Json(payload): Json<CreateAttributeRequest>,
) -> Result<Json<Size>> {
    validate_attribute(&payload)?;

    let size = attribute_queries::create_size(&state.db, &payload).await?;
    Ok(Json(size))
}

pub async fn delete_size(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if attribute_queries::find_size_by_id(&state.db, id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!("Size with id {} not found", id)));
    }

    if product_queries::any_references_size(&state.db, id).await? {
        return Err(AppError::Conflict(
            "Size is still referenced by products".to_string(),
        ));
    }

    attribute_queries::delete_size(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn validate_attribute(payload: &CreateAttributeRequest) -> Result<()> {
    let mut errors = BTreeMap::new();
    if payload.name.trim().is_empty() {
        errors.insert("name".to_string(), "is required".to_string());
    }
    if payload.value.trim().is_empty() {
        errors.insert("value".to_string(), "is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

//DISCOUNT ROUTES
pub async fn get_all_discounts(State(state): State<AppState>) -> Result<Json<Vec<Discount>>> {
    let discounts = discount_queries::get_all(&state.db).await?;
    Ok(Json(discounts))
}

pub async fn get_discount(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiscountResponse>> {
    let discount = discount_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Discount with id {} not found", id)))?;

    let products = product_queries::find_by_discount_id(&state.db, id).await?;

    Ok(Json(DiscountResponse { discount, products }))
}

pub async fn create_discount(
    State(state): State<AppState>,
    Json(payload): Json<CreateDiscountRequest>,
) -> Result<Json<Discount>> {
    if payload.name.trim().is_empty() {
        return Err(field_error("name", "is required"));
    }

    validate_percentage(payload.percentage)?;

    let discount = discount_queries::create_discount(&state.db, &payload).await?;
    Ok(Json(discount))
}

pub async fn update_discount(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDiscountRequest>,
) -> Result<Json<Discount>> {
    if discount_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Discount with id {} not found",
            id
        )));
    }

    if let Some(percentage) = payload.percentage {
        validate_percentage(percentage)?;
    }

    let discount = discount_queries::update_discount(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Discount with id {} not found", id)))?;

    Ok(Json(discount))
}

pub async fn delete_discount(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if discount_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Discount with id {} not found",
            id
        )));
    }

    // Referencing products fall back to full price via ON DELETE SET NULL.
    discount_queries::delete_discount(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn validate_percentage(percentage: Decimal) -> Result<()> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(field_error("percentage", "must be between 0 and 100"));
    }
    Ok(())
}

//BILLBOARD ROUTES
pub async fn get_all_billboards(State(state): State<AppState>) -> Result<Json<Vec<Billboard>>> {
    let billboards = billboard_queries::get_all(&state.db, false).await?;
    Ok(Json(billboards))
}

pub async fn create_billboard(
    State(state): State<AppState>,
    Json(payload): Json<CreateBillboardRequest>,
) -> Result<Json<Billboard>> {
    let mut errors = BTreeMap::new();
    if payload.name.trim().is_empty() {
        errors.insert("name".to_string(), "is required".to_string());
    }
    if payload.image_url.trim().is_empty() {
        errors.insert("image_url".to_string(), "is required".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let billboard = billboard_queries::create_billboard(&state.db, &payload).await?;
    Ok(Json(billboard))
}

pub async fn update_billboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBillboardRequest>,
) -> Result<Json<Billboard>> {
    if billboard_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Billboard with id {} not found",
            id
        )));
    }

    let billboard = billboard_queries::update_billboard(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Billboard with id {} not found", id)))?;

    Ok(Json(billboard))
}

pub async fn delete_billboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if billboard_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Billboard with id {} not found",
            id
        )));
    }

    billboard_queries::delete_billboard(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
