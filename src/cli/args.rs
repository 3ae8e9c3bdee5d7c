use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;
use std::{fmt, str::FromStr};

#[derive(Parser)]
#[command(name = "restaurant-order")]
#[command(about = "Build a restaurant order from a fixed menu and print its summary")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an order interactively (default)
    Order {
        /// Summary format used when the order is submitted
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Show the menu with unit prices
    Menu,
    /// Show the unit price of a single item
    Price {
        /// Item name, as listed by `menu`
        item: String,
    },
    /// Price a complete order in one go
    Quote {
        /// Customer name
        #[arg(short, long, default_value = "")]
        customer: String,
        /// Item and quantity, e.g. --item "Burger=2" (repeatable)
        #[arg(short, long = "item", value_name = "ITEM=QTY", required = true)]
        items: Vec<ItemSpec>,
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Write the summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

lazy_static::lazy_static! {
    static ref ITEM_SPEC_REGEX: Regex =
        Regex::new(r"^\s*(?P<item>[^=]*[^=\s])\s*=\s*(?P<quantity>[^=]*?)\s*$").unwrap();
}

/// One `ITEM=QTY` pair from the command line. The quantity stays as typed so
/// the order service can judge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub item: String,
    pub quantity: String,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = ITEM_SPEC_REGEX
            .captures(s)
            .ok_or_else(|| format!("expected ITEM=QTY, got '{}'", s))?;

        Ok(ItemSpec {
            item: captures["item"].to_string(),
            quantity: captures["quantity"].to_string(),
        })
    }
}
