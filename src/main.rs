use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stock_ledger::config::{self, AppConfig, CliConfig, FileConfig};
use stock_ledger::demo_data;
use stock_ledger::ledger::{BrandProduct, StockListingRow, WarehouseBalance};
use stock_ledger::{SqliteStockLedger, StockLedger};

const SECTION_SEPARATOR: &str = "*******************";

#[derive(Parser, Debug)]
#[command(about = "Fills a stock ledger with demo records and prints its reports")]
struct CliArgs {
    /// Path to the SQLite ledger database file.
    #[clap(long, default_value = config::DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Path to a TOML config file. Its values override the flags.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Number of random demo records to insert.
    #[clap(long, default_value_t = config::DEFAULT_DEMO_RECORDS)]
    pub records: usize,

    /// Seed for the demo record generator, for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Keep existing tables and data instead of recreating them.
    #[clap(long)]
    pub no_reset: bool,

    /// How long a call waits on a locked database before failing.
    #[clap(long, default_value_t = config::DEFAULT_BUSY_TIMEOUT_MS)]
    pub busy_timeout_ms: u64,

    /// Print the reports as a single JSON document.
    #[clap(long)]
    pub json: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_path: self.db_path.clone(),
            busy_timeout_ms: self.busy_timeout_ms,
            records: self.records,
            seed: self.seed,
            no_reset: self.no_reset,
        }
    }
}

struct Reports {
    listing: Vec<StockListingRow>,
    balances: Vec<(String, Vec<WarehouseBalance>)>,
    unknown: Vec<BrandProduct>,
}

fn collect_reports(ledger: &dyn StockLedger, countries: &[String]) -> Result<Reports> {
    let listing = ledger.full_listing().context("Failed to list stock")?;
    let mut balances = Vec::with_capacity(countries.len());
    for country in countries {
        let balance = ledger
            .country_balance(country)
            .with_context(|| format!("Failed to compute balance for {}", country))?;
        balances.push((country.clone(), balance));
    }
    let unknown = ledger
        .unknown_quantity_products()
        .context("Failed to list products with unknown quantity")?;
    Ok(Reports {
        listing,
        balances,
        unknown,
    })
}

fn print_reports(reports: &Reports) {
    for row in &reports.listing {
        println!("{}", row);
    }
    println!("{}", SECTION_SEPARATOR);
    for (index, (country, balance)) in reports.balances.iter().enumerate() {
        if index > 0 {
            println!("****");
        }
        println!("{}:", country);
        for row in balance {
            println!("{}", row);
        }
    }
    println!("{}", SECTION_SEPARATOR);
    for row in &reports.unknown {
        println!("{}", row);
    }
}

fn print_reports_json(reports: &Reports) -> Result<()> {
    let balances: serde_json::Map<String, serde_json::Value> = reports
        .balances
        .iter()
        .map(|(country, balance)| -> serde_json::Result<_> {
            Ok((country.clone(), serde_json::to_value(balance)?))
        })
        .collect::<serde_json::Result<_>>()?;
    let document = serde_json::json!({
        "listing": reports.listing,
        "balances": balances,
        "unknown_quantity": reports.unknown,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    info!(
        "stock-ledger {}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let ledger = SqliteStockLedger::with_busy_timeout(&app_config.db_path, app_config.busy_timeout);
    ledger
        .init_db(app_config.demo.reset)
        .with_context(|| format!("Failed to initialize ledger at {:?}", app_config.db_path))?;

    let mut rng = demo_data::demo_rng(app_config.demo.seed);
    info!("Inserting {} demo records...", app_config.demo.records);
    for record in demo_data::random_records(&mut rng, app_config.demo.records) {
        ledger
            .add_record(
                record.brand,
                record.country,
                record.product,
                record.warehouse,
                record.quantity,
            )
            .with_context(|| format!("Failed to add demo record {:?}", record))?;
    }

    let counts = ledger.counts()?;
    info!(
        "Ledger has {} warehouses, {} brands, {} products, {} stock rows",
        counts.warehouses, counts.brands, counts.products, counts.goods
    );

    let reports = collect_reports(&ledger, &app_config.demo.countries)?;
    if cli_args.json {
        print_reports_json(&reports)?;
    } else {
        print_reports(&reports);
    }
    Ok(())
}
