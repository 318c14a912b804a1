use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{load_or_fail, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::types::{Customer, Product};

/// A row in the product list table
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Size / Weight")]
    size_or_weight: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Total Quantity")]
    total_quantity: u64,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "Created By")]
    created_by: String,
    #[tabled(rename = "Created At")]
    created_at: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.to_string(),
            description: product.description.clone().unwrap_or_default(),
            status: product.status.to_string(),
            size_or_weight: product
                .size_or_weight
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            unit: product.unit_of_measure.to_string(),
            total_quantity: product.total_quantity,
            image: product.image_url_or_placeholder().to_string(),
            created_by: product.created_by.clone().unwrap_or_else(|| "-".to_string()),
            created_at: product.created_at.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// A row in the customer list table
#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        CustomerRow {
            id: customer.id.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// List products, optionally narrowed by a search query
pub async fn cmd_product_ls(
    config: &Config,
    search: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let mut ctrl = crate::commands::product_controller(config)?;
    load_or_fail(&mut ctrl).await?;

    if let Some(query) = search {
        ctrl.set_query(query);
    }
    let visible = ctrl.visible();

    if output_json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let rows: Vec<ProductRow> = visible.iter().map(|p| ProductRow::from(*p)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} product(s)", visible.len());
    Ok(())
}

/// List customers, optionally narrowed by a search query
pub async fn cmd_customer_ls(
    config: &Config,
    search: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let mut ctrl = crate::commands::customer_controller(config)?;
    load_or_fail(&mut ctrl).await?;

    if let Some(query) = search {
        ctrl.set_query(query);
    }
    let visible = ctrl.visible();

    if output_json {
        return print_json(&visible);
    }

    if visible.is_empty() {
        println!("No customers found.");
        return Ok(());
    }

    let rows: Vec<CustomerRow> = visible.iter().map(|c| CustomerRow::from(*c)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} customer(s)", visible.len());
    Ok(())
}
