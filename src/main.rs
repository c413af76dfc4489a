use clap::Parser;
use shopkeep::application::{
    customers, init::init, list_records, manage_records, report, transfer, ConfigService,
};
use shopkeep::cli::output;
use shopkeep::cli::{Cli, Commands, CustomersCommand, DeliveriesCommand, InventoryCommand, SalesCommand};
use shopkeep::domain::codec::parse_date;
use shopkeep::domain::{Delivery, DeliveryStatus, Product, RecordId, Sale, SaleStatus};
use shopkeep::error::{Result, ShopkeepError};
use shopkeep::infrastructure::{Config, DataStore, FileSystemRepository, StoreRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("currency = {}", config.currency);
                println!("expense_ratio = {}", config.expense_ratio);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: shopkeep config [--list | <key> [<value>]]");
                println!("Valid keys: currency, expense_ratio, created");
                Ok(())
            }
        }
        Some(Commands::Sales { command }) => run_sales(command),
        Some(Commands::Inventory { command }) => run_inventory(command),
        Some(Commands::Deliveries { command }) => run_deliveries(command),
        Some(Commands::Customers { command }) => run_customers(command),
        Some(Commands::Report) => {
            let store = open_store()?;
            let config = load_config(&store)?;
            let report = report::dashboard(&store, config.expense_ratio);
            print!("{}", output::format_report(&report, &config.currency));
            Ok(())
        }
        Some(Commands::ExportAll { dir }) => {
            let store = open_store()?;
            transfer::export_all(&store, &dir)
        }
        Some(Commands::Backup { file }) => {
            let store = open_store()?;
            transfer::backup(&store, &file)
        }
        Some(Commands::Restore { file }) => {
            let mut store = open_store()?;
            transfer::restore(&mut store, &file)
        }
        Some(Commands::Clear { yes }) => {
            let mut store = open_store()?;
            let proceed = yes || output::confirm("Clear all data?");
            manage_records::clear_store(&mut store, proceed)
        }
        None => {
            println!("shopkeep - Terminal small-business record keeper");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_store() -> Result<DataStore> {
    let repo = FileSystemRepository::discover()?;
    Ok(DataStore::load(repo))
}

fn load_config(store: &DataStore) -> Result<Config> {
    store.repository().load_config()
}

/// Parse an optional --date argument
fn parse_date_arg(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(text) => parse_date(text).map(Some).ok_or_else(|| {
            ShopkeepError::Config(format!("Invalid date: '{}'", text))
        }),
    }
}

/// Parse a status argument with the status type's own error message
fn parse_status<T: FromStr<Err = String>>(raw: &str) -> Result<T> {
    T::from_str(raw).map_err(ShopkeepError::Config)
}

fn run_sales(command: SalesCommand) -> Result<()> {
    let mut store = open_store()?;

    match command {
        SalesCommand::Add {
            order_id,
            customer,
            product,
            amount,
            date,
            status,
        } => {
            let sale = Sale {
                id: RecordId::new(),
                order_id,
                customer,
                product,
                amount,
                date: parse_date_arg(date.as_deref())?,
                status: parse_status::<SaleStatus>(&status)?,
            };
            manage_records::add_record(&mut store, sale)
        }
        SalesCommand::List { search } => {
            let config = load_config(&store)?;
            let records = list_records::filter::<Sale>(&store, search.as_deref());
            print!("{}", output::format_sales(&records, &config.currency));
            Ok(())
        }
        SalesCommand::Edit {
            id,
            order_id,
            customer,
            product,
            amount,
            date,
            status,
        } => {
            let target = store.find_id::<Sale>(&id)?;
            let current = store
                .get::<Sale>(target)
                .cloned()
                .ok_or(ShopkeepError::UnknownRecord(id))?;

            let updated = Sale {
                id: current.id,
                order_id: order_id.unwrap_or(current.order_id),
                customer: customer.unwrap_or(current.customer),
                product: product.unwrap_or(current.product),
                amount: amount.unwrap_or(current.amount),
                date: match date {
                    Some(text) => parse_date_arg(Some(&text))?,
                    None => current.date,
                },
                status: match status {
                    Some(text) => parse_status::<SaleStatus>(&text)?,
                    None => current.status,
                },
            };
            manage_records::edit_record(&mut store, updated)
        }
        SalesCommand::Remove { id, yes } => {
            let proceed = yes || output::confirm("Delete this sale?");
            manage_records::remove_record::<Sale>(&mut store, &id, proceed)
        }
        SalesCommand::Export { output: path } => transfer::export_collection::<Sale>(&store, path),
        SalesCommand::Import { file } => transfer::import_collection::<Sale>(&mut store, &file),
    }
}

fn run_inventory(command: InventoryCommand) -> Result<()> {
    let mut store = open_store()?;

    match command {
        InventoryCommand::Add {
            name,
            category,
            stock,
            reorder,
            price,
        } => {
            let product = Product {
                id: RecordId::new(),
                name,
                category,
                stock,
                reorder,
                price,
            };
            manage_records::add_record(&mut store, product)
        }
        InventoryCommand::List { search } => {
            let config = load_config(&store)?;
            let records = list_records::filter::<Product>(&store, search.as_deref());
            print!("{}", output::format_products(&records, &config.currency));
            Ok(())
        }
        InventoryCommand::Edit {
            id,
            name,
            category,
            stock,
            reorder,
            price,
        } => {
            let target = store.find_id::<Product>(&id)?;
            let current = store
                .get::<Product>(target)
                .cloned()
                .ok_or(ShopkeepError::UnknownRecord(id))?;

            let updated = Product {
                id: current.id,
                name: name.unwrap_or(current.name),
                category: category.unwrap_or(current.category),
                stock: stock.unwrap_or(current.stock),
                reorder: reorder.unwrap_or(current.reorder),
                price: price.unwrap_or(current.price),
            };
            manage_records::edit_record(&mut store, updated)
        }
        InventoryCommand::Remove { id, yes } => {
            let proceed = yes || output::confirm("Delete this product?");
            manage_records::remove_record::<Product>(&mut store, &id, proceed)
        }
        InventoryCommand::Export { output: path } => {
            transfer::export_collection::<Product>(&store, path)
        }
        InventoryCommand::Import { file } => {
            transfer::import_collection::<Product>(&mut store, &file)
        }
    }
}

fn run_deliveries(command: DeliveriesCommand) -> Result<()> {
    let mut store = open_store()?;

    match command {
        DeliveriesCommand::Add {
            order_id,
            customer,
            mode,
            worth,
            date,
            status,
        } => {
            let delivery = Delivery {
                id: RecordId::new(),
                order_id,
                customer,
                mode,
                worth,
                date: parse_date_arg(date.as_deref())?,
                status: parse_status::<DeliveryStatus>(&status)?,
            };
            manage_records::add_record(&mut store, delivery)
        }
        DeliveriesCommand::List { search } => {
            let config = load_config(&store)?;
            let records = list_records::filter::<Delivery>(&store, search.as_deref());
            print!("{}", output::format_deliveries(&records, &config.currency));
            Ok(())
        }
        DeliveriesCommand::Edit {
            id,
            order_id,
            customer,
            mode,
            worth,
            date,
            status,
        } => {
            let target = store.find_id::<Delivery>(&id)?;
            let current = store
                .get::<Delivery>(target)
                .cloned()
                .ok_or(ShopkeepError::UnknownRecord(id))?;

            let updated = Delivery {
                id: current.id,
                order_id: order_id.unwrap_or(current.order_id),
                customer: customer.unwrap_or(current.customer),
                mode: mode.unwrap_or(current.mode),
                worth: worth.unwrap_or(current.worth),
                date: match date {
                    Some(text) => parse_date_arg(Some(&text))?,
                    None => current.date,
                },
                status: match status {
                    Some(text) => parse_status::<DeliveryStatus>(&text)?,
                    None => current.status,
                },
            };
            manage_records::edit_record(&mut store, updated)
        }
        DeliveriesCommand::Remove { id, yes } => {
            let proceed = yes || output::confirm("Delete this delivery?");
            manage_records::remove_record::<Delivery>(&mut store, &id, proceed)
        }
        DeliveriesCommand::Export { output: path } => {
            transfer::export_collection::<Delivery>(&store, path)
        }
        DeliveriesCommand::Import { file } => {
            transfer::import_collection::<Delivery>(&mut store, &file)
        }
    }
}

fn run_customers(command: Option<CustomersCommand>) -> Result<()> {
    let store = open_store()?;

    match command.unwrap_or(CustomersCommand::List) {
        CustomersCommand::List => {
            let config = load_config(&store)?;
            let view = customers::derive(&store);
            print!("{}", output::format_customers(&view, &config.currency));
            Ok(())
        }
        CustomersCommand::Export { output: path } => customers::export(&store, path),
    }
}
