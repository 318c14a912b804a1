//! Resource shapes and the capability traits that parameterize the generic
//! list controller.
//!
//! Two concrete resources exist: [`Product`] and [`Customer`]. Everything
//! above this module (store, search, modal, gateway, controller) is generic
//! over the [`Resource`]/[`Draft`] trait pair, so adding a third resource
//! shape means implementing these two traits and nothing else.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShopdeskError};

/// Attribution recorded on create until real operator identities exist.
pub const SYSTEM_ACTOR: &str = "system";

/// Shown in place of a product image when no `imageUrl` is set.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x300?text=No+Image";

/// A domain entity exposed via a CRUD collection endpoint.
///
/// The associated constants and methods form the capability set the generic
/// controller is instantiated with: the collection path, the display name,
/// the searchable-field projection, and the value-copy used to seed an edit
/// draft.
pub trait Resource:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Draft;

    /// Singular display name ("product", "customer").
    const KIND: &'static str;

    /// Path segment of the collection endpoint.
    const COLLECTION: &'static str;

    /// Server-assigned identifier, immutable across edits.
    fn id(&self) -> &str;

    /// Fields the client-side search filter matches against.
    fn searchable_text(&self) -> Vec<&str>;

    /// Independent value copy for the edit modal. Mutating the returned
    /// draft must not be observable through the store.
    fn to_draft(&self) -> Self::Draft;
}

/// An in-memory, possibly incomplete copy of a resource under creation or
/// edit, independent of the store until submitted.
pub trait Draft:
    Clone + fmt::Debug + Default + PartialEq + Serialize + Send + Sync + 'static
{
    /// Replace exactly one field from raw form input. Numeric fields are
    /// coerced here; a coercion failure leaves the draft unchanged.
    fn set_field(&mut self, field: &str, value: &str) -> Result<()>;

    /// Required-field emptiness only. No schema or range validation.
    fn validate(&self) -> Result<()>;

    /// Stamp submission metadata and fill defaults before a create request:
    /// `createdAt`/`updatedAt` from the client clock, attribution fixed to
    /// [`SYSTEM_ACTOR`].
    fn prepare_create(&mut self);
}

fn invalid_field<K>(kind: &str, field: &str, valid: &[&str]) -> Result<K> {
    Err(ShopdeskError::Validation(format!(
        "unknown {} field '{}', expected one of: {}",
        kind,
        field,
        valid.join(", ")
    )))
}

fn coerce_quantity(value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        ShopdeskError::Validation(format!(
            "totalQuantity must be a non-negative integer, got '{}'",
            value
        ))
    })
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Stationary,
    Grocery,
    GeneralStore,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Stationary => write!(f, "STATIONARY"),
            Category::Grocery => write!(f, "GROCERY"),
            Category::GeneralStore => write!(f, "GENERAL_STORE"),
        }
    }
}

impl FromStr for Category {
    type Err = ShopdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "STATIONARY" => Ok(Category::Stationary),
            "GROCERY" => Ok(Category::Grocery),
            "GENERAL_STORE" => Ok(Category::GeneralStore),
            _ => Err(ShopdeskError::Validation(format!(
                "invalid category '{}', expected one of: {}",
                s,
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }
}

pub const VALID_CATEGORIES: &[&str] = &["STATIONARY", "GROCERY", "GENERAL_STORE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Available,
    OutOfStock,
    Discontinued,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Available => write!(f, "AVAILABLE"),
            ProductStatus::OutOfStock => write!(f, "OUT_OF_STOCK"),
            ProductStatus::Discontinued => write!(f, "DISCONTINUED"),
        }
    }
}

impl FromStr for ProductStatus {
    type Err = ShopdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(ProductStatus::Available),
            "OUT_OF_STOCK" => Ok(ProductStatus::OutOfStock),
            "DISCONTINUED" => Ok(ProductStatus::Discontinued),
            _ => Err(ShopdeskError::Validation(format!(
                "invalid status '{}', expected one of: {}",
                s,
                VALID_PRODUCT_STATUSES.join(", ")
            ))),
        }
    }
}

pub const VALID_PRODUCT_STATUSES: &[&str] = &["AVAILABLE", "OUT_OF_STOCK", "DISCONTINUED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitOfMeasure {
    #[default]
    Pieces,
    Kg,
    Grams,
    Liters,
    Packets,
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOfMeasure::Pieces => write!(f, "PIECES"),
            UnitOfMeasure::Kg => write!(f, "KG"),
            UnitOfMeasure::Grams => write!(f, "GRAMS"),
            UnitOfMeasure::Liters => write!(f, "LITERS"),
            UnitOfMeasure::Packets => write!(f, "PACKETS"),
        }
    }
}

impl FromStr for UnitOfMeasure {
    type Err = ShopdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PIECES" => Ok(UnitOfMeasure::Pieces),
            "KG" => Ok(UnitOfMeasure::Kg),
            "GRAMS" => Ok(UnitOfMeasure::Grams),
            "LITERS" => Ok(UnitOfMeasure::Liters),
            "PACKETS" => Ok(UnitOfMeasure::Packets),
            _ => Err(ShopdeskError::Validation(format!(
                "invalid unit '{}', expected one of: {}",
                s,
                VALID_UNITS.join(", ")
            ))),
        }
    }
}

pub const VALID_UNITS: &[&str] = &["PIECES", "KG", "GRAMS", "LITERS", "PACKETS"];

/// A catalog entry as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_or_weight: Option<String>,
    #[serde(default)]
    pub unit_of_measure: UnitOfMeasure,
    #[serde(default)]
    pub total_quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl Product {
    /// Image URI for display, falling back to the placeholder when unset.
    pub fn image_url_or_placeholder(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}

/// Form state for the product create/edit modal. Text inputs start empty,
/// selects start on their wire defaults, matching the form the operator sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub description: String,
    pub status: ProductStatus,
    pub size_or_weight: String,
    pub unit_of_measure: UnitOfMeasure,
    pub total_quantity: u64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

pub const PRODUCT_FIELDS: &[&str] = &[
    "name",
    "category",
    "description",
    "status",
    "sizeOrWeight",
    "unitOfMeasure",
    "totalQuantity",
    "imageUrl",
];

impl Draft for ProductDraft {
    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "name" => self.name = value.to_string(),
            "category" => self.category = Some(value.parse()?),
            "description" => self.description = value.to_string(),
            "status" => self.status = value.parse()?,
            "sizeOrWeight" => self.size_or_weight = value.to_string(),
            "unitOfMeasure" => self.unit_of_measure = value.parse()?,
            "totalQuantity" => self.total_quantity = coerce_quantity(value)?,
            "imageUrl" => self.image_url = value.to_string(),
            _ => return invalid_field("product", field, PRODUCT_FIELDS),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShopdeskError::Validation("name is required".to_string()));
        }
        if self.category.is_none() {
            return Err(ShopdeskError::Validation(
                "category is required".to_string(),
            ));
        }
        Ok(())
    }

    fn prepare_create(&mut self) {
        let now = jiff::Timestamp::now().to_string();
        self.created_at = Some(now.clone());
        self.updated_at = Some(now);
        self.created_by = Some(SYSTEM_ACTOR.to_string());
        self.updated_by = Some(SYSTEM_ACTOR.to_string());
    }
}

impl Resource for Product {
    type Draft = ProductDraft;

    const KIND: &'static str = "product";
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), category_search_key(self.category)];
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: Some(self.category),
            description: self.description.clone().unwrap_or_default(),
            status: self.status,
            size_or_weight: self.size_or_weight.clone().unwrap_or_default(),
            unit_of_measure: self.unit_of_measure,
            total_quantity: self.total_quantity,
            image_url: self.image_url.clone().unwrap_or_default(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            created_by: self.created_by.clone(),
            updated_by: self.updated_by.clone(),
        }
    }
}

fn category_search_key(category: Category) -> &'static str {
    match category {
        Category::Stationary => "STATIONARY",
        Category::Grocery => "GROCERY",
        Category::GeneralStore => "GENERAL_STORE",
    }
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

pub const CUSTOMER_FIELDS: &[&str] = &["name", "email", "phone", "address"];

impl Draft for CustomerDraft {
    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "address" => self.address = value.to_string(),
            _ => return invalid_field("customer", field, CUSTOMER_FIELDS),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(ShopdeskError::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    fn prepare_create(&mut self) {
        // Customers carry no server metadata beyond the id.
    }
}

impl Resource for Customer {
    type Draft = CustomerDraft;

    const KIND: &'static str = "customer";
    const COLLECTION: &'static str = "customers";

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone().unwrap_or_default(),
        }
    }
}
