//! Configuration commands for managing shopdesk settings.
//!
//! - `config show`: Display the effective API endpoint and where it came from
//! - `config set-url`: Set the API base URL in the config file

use serde_json::json;

use crate::commands::print_json;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(config: &Config, output_json: bool) -> Result<()> {
    let base_url = config.base_url()?;
    let source = config.api_url_source();

    if output_json {
        return print_json(&json!({
            "api_url": base_url.as_str(),
            "source": source,
        }));
    }

    println!("api_url: {} ({})", base_url, source);
    Ok(())
}

/// Set the API base URL and persist it
pub fn cmd_config_set_url(url: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_api_url(url)?;
    config.save()?;
    println!("api_url set to {}", url);
    Ok(())
}
