pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod modal;
pub mod notify;
pub mod search;
pub mod store;
pub mod types;

pub use api::{CollectionApi, HttpCollectionApi, MutationGateway};
pub use config::Config;
pub use confirm::{ConfirmationGate, ConsoleGate, StaticGate};
pub use controller::ResourceController;
pub use error::{Result, ShopdeskError};
pub use modal::{ModalController, ModalMode, ModalState};
pub use notify::{Notification, NotificationLevel, NotificationQueue};
pub use search::{filter_items, filter_resources};
pub use store::{LoadPhase, LoadToken, ResourceStore};
pub use types::{
    Category, Customer, CustomerDraft, Draft, Product, ProductDraft, ProductStatus, Resource,
    UnitOfMeasure, PLACEHOLDER_IMAGE_URL, SYSTEM_ACTOR,
};
