use serde::{Deserialize, Serialize};

use kelontong_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::category::CategoryCatalog;

/// Product identifier, assigned by the storefront API (or derived from the
/// numeric id of a local fallback record).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accept an identifier that can be addressed as one URL path segment.
    ///
    /// Blank ids, `.` and `..` are rejected: URL normalization removes those
    /// segments (even percent-encoded), so they would address the collection.
    pub fn parse(id: &str) -> DomainResult<Self> {
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("product id cannot be blank"));
        }
        if id == "." || id == ".." {
            return Err(DomainError::invalid_id(format!(
                "product id {id:?} is a relative path segment"
            )));
        }
        Ok(Self::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Physical dimensions of a catalog item.
///
/// Flattened on the wire: the four fields sit at the top level of the product
/// JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub weight: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    fn validate(&self) -> DomainResult<()> {
        for (label, value) in [
            ("weight", self.weight),
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{label} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// A catalog item as served by the storefront API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    id: ProductId,
    #[serde(rename = "CategoryId")]
    category_id: u8,
    #[serde(rename = "categoryName")]
    category_name: String,
    sku: String,
    name: String,
    description: String,
    #[serde(flatten)]
    dimensions: Dimensions,
    image: String,
    price: f64,
}

impl Product {
    /// Attach an identifier to creation data.
    pub fn from_input(id: ProductId, input: ProductCreateInput) -> Self {
        Self {
            id,
            category_id: input.category_id,
            category_name: input.category_name,
            sku: input.sku,
            name: input.name,
            description: input.description,
            dimensions: input.dimensions,
            image: input.image,
            price: input.price,
        }
    }

    pub fn category_id(&self) -> u8 {
        self.category_id
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// True when this product's identifier equals `id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_str() == id
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Payload for creating a product: every product attribute except the
/// identifier, which the API assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreateInput {
    #[serde(rename = "CategoryId")]
    pub category_id: u8,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub image: String,
    pub price: f64,
}

impl ProductCreateInput {
    /// Check the input against the catalog before it is sent anywhere.
    pub fn validate(&self, categories: &CategoryCatalog) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }

        self.dimensions.validate()?;

        match categories.name_of(self.category_id) {
            None => Err(DomainError::validation(format!(
                "unknown category id {}",
                self.category_id
            ))),
            Some(expected) if expected != self.category_name => {
                Err(DomainError::validation(format!(
                    "category {} is named {expected:?}, not {:?}",
                    self.category_id, self.category_name
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
