use clap::{Parser, Subcommand};
use std::process::ExitCode;

use shopdesk::commands::{
    cmd_config_set_url, cmd_config_show, cmd_customer_add, cmd_customer_edit, cmd_customer_ls,
    cmd_customer_rm, cmd_product_add, cmd_product_edit, cmd_product_ls, cmd_product_rm,
    CustomerAddOptions, ProductAddOptions,
};
use shopdesk::Config;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(about = "Terminal admin console for a storefront collection API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products
    #[command(subcommand, visible_alias = "p")]
    Product(ProductAction),

    /// Manage customer accounts
    #[command(subcommand, visible_alias = "c")]
    Customer(CustomerAction),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigAction),
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    #[command(visible_alias = "ls")]
    List {
        /// Filter by name, category, or description
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new product
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Category: STATIONARY, GROCERY, GENERAL_STORE
        #[arg(long)]
        category: String,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// Size or weight label (e.g. "500g")
        #[arg(long = "size-or-weight")]
        size_or_weight: Option<String>,

        /// Unit of measure: PIECES, KG, GRAMS, LITERS, PACKETS
        #[arg(long)]
        unit: Option<String>,

        /// Total quantity in stock
        #[arg(short, long)]
        quantity: Option<String>,

        /// Image URL
        #[arg(long = "image-url")]
        image_url: Option<String>,
    },
    /// Edit a product field by field
    Edit {
        /// Product ID
        id: String,

        /// Field assignment (repeatable), e.g. --set totalQuantity=25
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,
    },
    /// Delete a product
    #[command(visible_alias = "rm")]
    Delete {
        /// Product ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List customer accounts
    #[command(visible_alias = "ls")]
    List {
        /// Filter by name, email, or phone
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new customer account
    Add {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Edit a customer field by field
    Edit {
        /// Customer ID
        id: String,

        /// Field assignment (repeatable), e.g. --set phone=555-0199
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,
    },
    /// Delete a customer account
    #[command(visible_alias = "rm")]
    Delete {
        /// Customer ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the API base URL
    SetUrl {
        /// Base URL of the collection API
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Product(action) => match action {
            ProductAction::List { search, json } => {
                cmd_product_ls(&config, search.as_deref(), json).await
            }
            ProductAction::Add {
                name,
                category,
                description,
                size_or_weight,
                unit,
                quantity,
                image_url,
            } => {
                cmd_product_add(
                    &config,
                    ProductAddOptions {
                        name,
                        category,
                        description,
                        size_or_weight,
                        unit,
                        quantity,
                        image_url,
                    },
                )
                .await
            }
            ProductAction::Edit { id, sets } => cmd_product_edit(&config, &id, &sets).await,
            ProductAction::Delete { id, yes } => cmd_product_rm(&config, &id, yes).await,
        },

        Commands::Customer(action) => match action {
            CustomerAction::List { search, json } => {
                cmd_customer_ls(&config, search.as_deref(), json).await
            }
            CustomerAction::Add {
                name,
                email,
                phone,
                address,
            } => {
                cmd_customer_add(
                    &config,
                    CustomerAddOptions {
                        name,
                        email,
                        phone,
                        address,
                    },
                )
                .await
            }
            CustomerAction::Edit { id, sets } => cmd_customer_edit(&config, &id, &sets).await,
            CustomerAction::Delete { id, yes } => cmd_customer_rm(&config, &id, yes).await,
        },

        Commands::Config(action) => match action {
            ConfigAction::Show { json } => cmd_config_show(&config, json),
            ConfigAction::SetUrl { url } => cmd_config_set_url(&url),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
