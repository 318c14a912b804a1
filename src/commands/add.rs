use owo_colors::OwoColorize;

use crate::commands::{flush_notifications, operation_failed};
use crate::config::Config;
use crate::controller::ResourceController;
use crate::error::{Result, ShopdeskError};
use crate::types::{Customer, Product, Resource};

/// Options for creating a new product
#[derive(Debug, Default)]
pub struct ProductAddOptions {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub size_or_weight: Option<String>,
    pub unit: Option<String>,
    /// Raw form input; coerced to a number by the draft.
    pub quantity: Option<String>,
    pub image_url: Option<String>,
}

/// Options for creating a new customer
#[derive(Debug, Default)]
pub struct CustomerAddOptions {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Fill the open draft from the provided form fields, skipping the absent
/// ones so the draft's defaults stand.
fn fill_draft<R: Resource>(
    ctrl: &mut ResourceController<R>,
    fields: &[(&str, Option<&str>)],
) -> Result<()> {
    for (field, value) in fields {
        if let Some(value) = value {
            ctrl.edit_field(field, value)?;
        }
    }
    Ok(())
}

async fn submit_new<R: Resource>(ctrl: &mut ResourceController<R>, label: &str) -> Result<()> {
    let result = ctrl.submit().await;
    flush_notifications(ctrl.notifications_mut());

    match result {
        Ok(()) => {
            println!("{} {}", format!("Created {}", R::KIND).green(), label);
            Ok(())
        }
        // Validation never reached the wire; report it directly.
        Err(e @ ShopdeskError::Validation(_)) => Err(e),
        Err(_) => operation_failed("create", R::KIND),
    }
}

/// Create a new product and print its name
pub async fn cmd_product_add(config: &Config, options: ProductAddOptions) -> Result<()> {
    let mut ctrl = crate::commands::product_controller(config)?;

    ctrl.open_create();
    fill_draft(
        &mut ctrl,
        &[
            ("name", Some(options.name.as_str())),
            ("category", Some(options.category.as_str())),
            ("description", options.description.as_deref()),
            ("sizeOrWeight", options.size_or_weight.as_deref()),
            ("unitOfMeasure", options.unit.as_deref()),
            ("totalQuantity", options.quantity.as_deref()),
            ("imageUrl", options.image_url.as_deref()),
        ],
    )?;

    let label = format!("\"{}\"", options.name);
    submit_new::<Product>(&mut ctrl, &label).await
}

/// Create a new customer and print their name
pub async fn cmd_customer_add(config: &Config, options: CustomerAddOptions) -> Result<()> {
    let mut ctrl = crate::commands::customer_controller(config)?;

    ctrl.open_create();
    fill_draft(
        &mut ctrl,
        &[
            ("name", Some(options.name.as_str())),
            ("email", Some(options.email.as_str())),
            ("phone", Some(options.phone.as_str())),
            ("address", options.address.as_deref()),
        ],
    )?;

    let label = format!("\"{}\"", options.name);
    submit_new::<Customer>(&mut ctrl, &label).await
}
