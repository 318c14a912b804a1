//! Shared fixtures for integration tests: the in-memory collection API and
//! builders for seed data.

pub mod mock_api;

pub use mock_api::{ApiCall, InMemoryApi, Op};

use std::sync::Arc;

use shopdesk::{
    Category, CollectionApi, Customer, Product, ProductStatus, Resource, ResourceController,
    UnitOfMeasure,
};

/// Build a controller backed by the given fake API.
pub fn controller<R: Resource>(api: &Arc<InMemoryApi<R>>) -> ResourceController<R> {
    let api: Arc<dyn CollectionApi<R>> = api.clone();
    ResourceController::new(api)
}

/// Build a product with sensible defaults for seeding
pub fn make_product(id: &str, name: &str, category: Category) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: None,
        status: ProductStatus::Available,
        size_or_weight: None,
        unit_of_measure: UnitOfMeasure::Pieces,
        total_quantity: 0,
        image_url: None,
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
        updated_at: Some("2024-01-01T00:00:00Z".to_string()),
        created_by: Some("system".to_string()),
        updated_by: Some("system".to_string()),
    }
}

/// Build a customer for seeding
pub fn make_customer(id: &str, name: &str, email: &str, phone: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: None,
    }
}
