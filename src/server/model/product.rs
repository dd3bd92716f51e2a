//! Product domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto},
    server::{error::validation::ValidationError, util::parse::require_text},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            created_at: self.created_at,
        }
    }
}

/// Validated parameters for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl CreateProductParams {
    /// Validates a creation DTO and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateProductParams)` - Name is non-blank, price and stock are not negative
    /// - `Err(ValidationError)` - The first rule the DTO violates
    pub fn from_dto(dto: CreateProductDto) -> Result<Self, ValidationError> {
        require_text("name", &dto.name)?;

        if dto.price.is_nan() || dto.price < 0.0 {
            return Err(ValidationError::NegativeField("price"));
        }
        if dto.stock < 0 {
            return Err(ValidationError::NegativeField("stock"));
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
        })
    }
}
