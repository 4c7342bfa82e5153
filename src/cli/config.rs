//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "geocoder.api_key")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        (None, None) => {
            show_all_config(&config);
        }

        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", display_value(key, &value));
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, display_value(key, value));
        }

        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn mask_secret(value: &str) -> &'static str {
    if value.trim().is_empty() {
        "\"\" # not configured"
    } else {
        "\"***\" # configured"
    }
}

/// Value as printed to the terminal; secrets are masked
fn display_value(key: &str, value: &str) -> String {
    if key == "geocoder.api_key" {
        mask_secret(value).to_string()
    } else {
        value.to_string()
    }
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[geocoder]");
    println!("provider = \"{}\"", config.geocoder.provider);
    println!("api_key = {}", mask_secret(&config.geocoder.api_key));
    println!("region = \"{}\"", config.geocoder.region);
    println!("language = \"{}\"", config.geocoder.language);
    println!("base_url = \"{}\"", config.geocoder.base_url);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!();

    println!("[output]");
    println!("format = \"{}\"", config.output.format);
    println!();

    println!("[url]");
    println!("default = \"{}\"", config.url.default);
    println!();

    println!("[url.providers]");
    let mut providers: Vec<_> = config.url.providers.iter().collect();
    providers.sort();
    for (name, template) in providers {
        println!("{} = \"{}\"", name, template);
    }
}
