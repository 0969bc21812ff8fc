use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pizzeria::application::order::OrderService;
use pizzeria::config::StockConfig;
use pizzeria::domain::factory::{PizzaFactoryBox, SimplePizzaFactory};
use pizzeria::domain::ports::InventoryStoreBox;
use pizzeria::infrastructure::in_memory::InMemoryInventoryStore;
use pizzeria::interfaces::console::Console;
use pizzeria::interfaces::csv::order_reader::OrderReader;
use pizzeria::interfaces::csv::receipt_writer::ReceiptWriter;
use pizzeria::logging::init_logger;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (`pizza, toppings, payment`). Without it, runs the interactive menu.
    orders: Option<PathBuf>,

    /// TOML file overriding opening stock levels.
    #[arg(long)]
    stock: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.stock {
        Some(path) => StockConfig::from_file(path).into_diagnostic()?,
        None => StockConfig::default(),
    };

    let factory: PizzaFactoryBox = Box::new(SimplePizzaFactory::new());
    let inventory: InventoryStoreBox = Box::new(InMemoryInventoryStore::with_levels(config.stock));
    let service = OrderService::new(factory, inventory);

    let Some(orders) = cli.orders else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return Console::new(stdin.lock(), stdout.lock())
            .run(&service)
            .await
            .into_diagnostic();
    };

    let file = File::open(orders).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    for (index, order) in reader.orders().enumerate() {
        let number = index + 1;
        match order {
            Ok(request) => match service.place(&request).await {
                Ok(receipt) => writer.write(number, &receipt).into_diagnostic()?,
                Err(e) => warn!(order = number, "Error processing order: {}", e),
            },
            Err(e) => warn!(order = number, "Error reading order: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    let remaining = service.inventory().await.into_diagnostic()?;
    info!(
        "Remaining inventory: {}",
        serde_json::to_string(&remaining).into_diagnostic()?
    );

    Ok(())
}
