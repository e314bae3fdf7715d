use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

/// Application display name; defined once at startup, read-only thereafter.
pub const APP_NAME: &str = "BrickLink Price Finder";

pub const DEFAULT_BASE_URL: &str = "https://www.bricklink.com";
pub const DEFAULT_STORAGE_KEY: &str = "savedData";

#[derive(Debug, Clone, Parser)]
#[command(name = "figprice")]
#[command(about = "Look up BrickLink prices for a list of minifigure IDs")]
pub struct CliConfig {
    /// Comma-separated minifigure IDs; ranges expand, e.g. "elf001...elf003"
    #[arg(value_name = "IDS", default_value = "")]
    pub ids: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Also export the results as CSV")]
    pub export_csv: bool,

    #[arg(long, help = "Print the previously saved results and exit")]
    pub show_saved: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("storage_key", &self.storage_key)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn raw_ids(&self) -> &str {
        &self.ids
    }

    fn catalog_base_url(&self) -> &str {
        &self.base_url
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn export_csv(&self) -> bool {
        self.export_csv
    }
}
