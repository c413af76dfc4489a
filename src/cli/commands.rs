//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(about = "Terminal small-business record keeper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage sales records
    Sales {
        #[command(subcommand)]
        command: SalesCommand,
    },

    /// Manage the product inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },

    /// Manage delivery records
    Deliveries {
        #[command(subcommand)]
        command: DeliveriesCommand,
    },

    /// Customer view derived from sales
    Customers {
        #[command(subcommand)]
        command: Option<CustomersCommand>,
    },

    /// Print totals, top customers, low stock and monthly sales
    Report,

    /// Export every collection as CSV files
    ExportAll {
        /// Directory to write the files into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Write the whole store to a JSON snapshot file
    Backup {
        /// Snapshot file to write
        file: PathBuf,
    },

    /// Replace collections from a JSON snapshot file
    Restore {
        /// Snapshot file to read
        file: PathBuf,
    },

    /// Delete every record in every collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SalesCommand {
    /// Record a new sale
    Add {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        customer: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        amount: f64,
        /// Sale date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// paid, overdue or pending
        #[arg(long, default_value = "paid")]
        status: String,
    },

    /// List sales
    List {
        /// Only show records containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Replace a sale's fields (unset flags keep their current values)
    Edit {
        /// Record id (any unique prefix)
        id: String,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a sale
    Remove {
        /// Record id (any unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write sales to a CSV file (sales.csv by default)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge sales from a CSV file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value_t = 0)]
        stock: u32,
        #[arg(long, default_value_t = 0)]
        reorder: u32,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },

    /// List products
    List {
        /// Only show records containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Replace a product's fields (unset flags keep their current values)
    Edit {
        /// Record id (any unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        stock: Option<u32>,
        #[arg(long)]
        reorder: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
    },

    /// Delete a product
    Remove {
        /// Record id (any unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write products to a CSV file (products.csv by default)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge products from a CSV file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeliveriesCommand {
    /// Record a new delivery
    Add {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        customer: String,
        /// Delivery mode (van, bike, pickup, ...)
        #[arg(long, default_value = "")]
        mode: String,
        #[arg(long, default_value_t = 0.0)]
        worth: f64,
        /// Delivery date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// pending or completed
        #[arg(long, default_value = "pending")]
        status: String,
    },

    /// List deliveries
    List {
        /// Only show records containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Replace a delivery's fields (unset flags keep their current values)
    Edit {
        /// Record id (any unique prefix)
        id: String,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        worth: Option<f64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a delivery
    Remove {
        /// Record id (any unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write deliveries to a CSV file (deliveries.csv by default)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge deliveries from a CSV file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CustomersCommand {
    /// List customers with balances and last order dates
    List,

    /// Write the customer view to a CSV file (customers.csv by default)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
