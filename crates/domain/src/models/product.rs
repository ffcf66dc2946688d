//! Product catalog domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Product entity as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    /// Percentage, 0 to 100.
    pub tax_rate: Decimal,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

/// Request to create a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_create_product"))]
pub struct CreateProductRequest {
    #[validate(custom(function = "shared::validation::validate_sku"))]
    pub sku: String,
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: Decimal,
    pub tax_rate: Decimal,
    #[validate(range(min = 0, message = "Stock quantity must be non-negative"))]
    pub stock_quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    /// Applies client-side defaults before send: new products are active.
    pub fn with_defaults(mut self) -> Self {
        self.is_active.get_or_insert(true);
        self
    }
}

fn validate_create_product(req: &CreateProductRequest) -> Result<(), ValidationError> {
    shared::validation::validate_positive_amount(req.price)?;
    shared::validation::validate_tax_rate(req.tax_rate)?;
    Ok(())
}

/// Partial update for a product. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_update_product"))]
pub struct UpdateProductRequest {
    #[validate(custom(function = "validate_optional_sku"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    #[validate(range(min = 0, message = "Stock quantity must be non-negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn validate_optional_sku(sku: &str) -> Result<(), ValidationError> {
    shared::validation::validate_sku(sku)
}

fn validate_update_product(req: &UpdateProductRequest) -> Result<(), ValidationError> {
    if let Some(price) = req.price {
        shared::validation::validate_positive_amount(price)?;
    }
    if let Some(tax_rate) = req.tax_rate {
        shared::validation::validate_tax_rate(tax_rate)?;
    }
    Ok(())
}

impl From<&Product> for UpdateProductRequest {
    /// Pre-populates an edit form from a fetched product.
    fn from(product: &Product) -> Self {
        Self {
            sku: Some(product.sku.clone()),
            name: Some(product.name.clone()),
            description: product.description.clone(),
            category: product.category.clone(),
            price: Some(product.price),
            tax_rate: Some(product.tax_rate),
            stock_quantity: Some(product.stock_quantity),
            is_active: Some(product.is_active),
            image_url: product.image_url.clone(),
        }
    }
}
