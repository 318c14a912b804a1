use owo_colors::OwoColorize;

use crate::commands::{flush_notifications, load_or_fail, operation_failed};
use crate::config::Config;
use crate::controller::ResourceController;
use crate::error::{Result, ShopdeskError};
use crate::types::Resource;

/// Parse a `FIELD=VALUE` assignment from `--set`
fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=').ok_or_else(|| {
        ShopdeskError::Validation(format!("invalid --set '{}', expected FIELD=VALUE", raw))
    })
}

/// Load the list, open an edit draft on `id`, apply each assignment, and
/// submit the full record.
async fn edit_resource<R: Resource>(
    ctrl: &mut ResourceController<R>,
    id: &str,
    sets: &[String],
) -> Result<()> {
    load_or_fail(ctrl).await?;
    ctrl.open_edit(id)?;

    for raw in sets {
        let (field, value) = parse_assignment(raw)?;
        ctrl.edit_field(field, value)?;
    }

    let result = ctrl.submit().await;
    flush_notifications(ctrl.notifications_mut());

    match result {
        Ok(()) => {
            println!("{} {}", format!("Updated {}", R::KIND).green(), id);
            Ok(())
        }
        Err(e @ ShopdeskError::Validation(_)) => Err(e),
        Err(_) => operation_failed("update", R::KIND),
    }
}

/// Edit a product by id with `FIELD=VALUE` assignments
pub async fn cmd_product_edit(config: &Config, id: &str, sets: &[String]) -> Result<()> {
    let mut ctrl = crate::commands::product_controller(config)?;
    edit_resource(&mut ctrl, id, sets).await
}

/// Edit a customer by id with `FIELD=VALUE` assignments
pub async fn cmd_customer_edit(config: &Config, id: &str, sets: &[String]) -> Result<()> {
    let mut ctrl = crate::commands::customer_controller(config)?;
    edit_resource(&mut ctrl, id, sets).await
}
