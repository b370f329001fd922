//! File locations and business settings

use std::path::PathBuf;

/// Default store file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/shop_data.csv";
/// Default CSV export target
pub const DEFAULT_EXPORT_CSV: &str = "shop_export.csv";
/// Default JSON export target
pub const DEFAULT_EXPORT_JSON: &str = "shop_export.json";
/// Quantity below which a product counts as low stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Runtime configuration, assembled from CLI arguments and defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV store file
    pub data_file: PathBuf,
    /// Low-stock threshold used by statistics
    pub low_stock_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_relative_store_path() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data/shop_data.csv"));
        assert_eq!(config.low_stock_threshold, 10);
    }
}
