use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a product.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewProductDto {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub description: Option<String>,
}
