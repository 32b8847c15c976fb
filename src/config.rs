//! Command-line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::receipt::ReceiptStyle;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line records
    #[default]
    Compact,

    /// Structured JSON records
    Json,
}

/// Price a basket of items and print the receipt
#[derive(Debug, Parser)]
#[command(name = "pricebasket", about = "Price a shopping basket", long_about = None)]
pub struct Config {
    /// Items to add to the basket, by name or SKU (`Apples`, `soup`, `Bread*2`)
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Directory holding `products/` and `offers/` fixture sets
    ///
    /// The built-in catalog and offers are used when omitted.
    #[arg(short, long, env = "PRICEBASKET_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Fixture set to load from the fixtures directory
    #[arg(short, long, env = "PRICEBASKET_SET", default_value = "default")]
    pub set: String,

    /// Receipt layout
    #[arg(long, value_enum, default_value_t)]
    pub format: ReceiptStyle,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, env = "PRICEBASKET_LOG_FORMAT", default_value_t)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_items_and_defaults() -> TestResult {
        let config = Config::try_parse_from(["pricebasket", "Apples", "Milk", "Bread"])?;

        assert_eq!(config.items, ["Apples", "Milk", "Bread"]);
        assert_eq!(config.set, "default");
        assert_eq!(config.format, ReceiptStyle::Plain);
        assert_eq!(config.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn parses_fixture_options() -> TestResult {
        let config = Config::try_parse_from([
            "pricebasket",
            "--fixtures",
            "fixtures",
            "--set",
            "deli",
            "--format",
            "table",
            "--log-format",
            "json",
            "Coffee",
        ])?;

        assert_eq!(config.fixtures, Some(PathBuf::from("fixtures")));
        assert_eq!(config.set, "deli");
        assert_eq!(config.format, ReceiptStyle::Table);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.items, ["Coffee"]);

        Ok(())
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Config::try_parse_from(["pricebasket", "--format", "xml"]);

        assert!(result.is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
