use owo_colors::OwoColorize;

use crate::commands::{flush_notifications, operation_failed};
use crate::config::Config;
use crate::confirm::{ConsoleGate, StaticGate};
use crate::controller::ResourceController;
use crate::error::Result;
use crate::types::Resource;

async fn delete_resource<R: Resource>(
    ctrl: &mut ResourceController<R>,
    id: &str,
    yes: bool,
) -> Result<()> {
    let result = if yes {
        ctrl.delete(id, &StaticGate::approve()).await
    } else {
        ctrl.delete(id, &ConsoleGate).await
    };
    flush_notifications(ctrl.notifications_mut());

    match result {
        Ok(true) => {
            println!("{} {}", format!("Deleted {}", R::KIND).green(), id);
            Ok(())
        }
        Ok(false) => {
            println!("Aborted.");
            Ok(())
        }
        Err(_) => operation_failed("delete", R::KIND),
    }
}

/// Delete a product by id, after confirmation
pub async fn cmd_product_rm(config: &Config, id: &str, yes: bool) -> Result<()> {
    let mut ctrl = crate::commands::product_controller(config)?;
    delete_resource(&mut ctrl, id, yes).await
}

/// Delete a customer by id, after confirmation
pub async fn cmd_customer_rm(config: &Config, id: &str, yes: bool) -> Result<()> {
    let mut ctrl = crate::commands::customer_controller(config)?;
    delete_resource(&mut ctrl, id, yes).await
}
