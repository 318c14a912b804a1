mod add;
mod config;
mod edit;
mod ls;
mod rm;

pub use add::{cmd_customer_add, cmd_product_add, CustomerAddOptions, ProductAddOptions};
pub use config::{cmd_config_set_url, cmd_config_show};
pub use edit::{cmd_customer_edit, cmd_product_edit};
pub use ls::{cmd_customer_ls, cmd_product_ls};
pub use rm::{cmd_customer_rm, cmd_product_rm};

use std::sync::Arc;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::api::{CollectionApi, HttpCollectionApi};
use crate::config::Config;
use crate::controller::ResourceController;
use crate::error::{Result, ShopdeskError};
use crate::notify::{NotificationLevel, NotificationQueue};
use crate::store::LoadPhase;
use crate::types::{Customer, Product, Resource};

/// Build a product controller against the configured API.
pub fn product_controller(config: &Config) -> Result<ResourceController<Product>> {
    let api: Arc<dyn CollectionApi<Product>> = Arc::new(HttpCollectionApi::from_config(config)?);
    Ok(ResourceController::new(api))
}

/// Build a customer controller against the configured API.
pub fn customer_controller(config: &Config) -> Result<ResourceController<Customer>> {
    let api: Arc<dyn CollectionApi<Customer>> = Arc::new(HttpCollectionApi::from_config(config)?);
    Ok(ResourceController::new(api))
}

/// Load the collection, surfacing a load failure as a terminal error
/// instead of a partial list.
pub async fn load_or_fail<R: Resource>(ctrl: &mut ResourceController<R>) -> Result<()> {
    ctrl.load().await;
    if let LoadPhase::Error(message) = ctrl.store().phase() {
        return Err(ShopdeskError::Other(message.clone()));
    }
    Ok(())
}

/// Print everything pending in the notification queue, color-coded by level.
pub fn flush_notifications(queue: &mut NotificationQueue) {
    for notification in queue.drain() {
        match notification.level {
            NotificationLevel::Error => eprintln!("{}", notification.message.red()),
            NotificationLevel::Success => println!("{}", notification.message.green()),
            NotificationLevel::Info => println!("{}", notification.message.cyan()),
        }
    }
}

/// Pretty-print a value as JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Collapse a reported mutation failure into a one-line summary for the
/// process exit path; the detail already went out through the queue.
pub fn operation_failed<T>(action: &str, kind: &str) -> Result<T> {
    Err(ShopdeskError::Other(format!("failed to {} {}", action, kind)))
}
