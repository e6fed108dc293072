use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use pricing_backend::config::AppConfig;
use pricing_backend::data_setup::seed_test_data;
use pricing_backend::db::DatabaseHandle;
use pricing_backend::logger;
use pricing_backend::meta::{render_declaration, PaymentMethodTable, Table, PAYMENT_METHOD};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pricing database CLI", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Database to connect to.
    /// If not provided, the DATABASE_URL environment variable will be used.
    #[arg(long, global = true, value_name = "URL", env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the tables and fill them with test data
    Setup,

    /// List payment methods
    PaymentMethods {
        /// Only list these ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<i64>,

        /// Print the results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List pricing details with their rates and preferred payment method
    PricingDetails {
        /// Only list these ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<i64>,

        /// Print the results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the PAYMENT_METHOD table descriptor
    Describe {
        /// Describe an aliased reference
        #[arg(long, conflicts_with = "rename")]
        alias: Option<String>,

        /// Describe a renamed reference
        #[arg(long)]
        rename: Option<String>,
    },
}

fn describe(table: &PaymentMethodTable) {
    println!("{}", render_declaration(table));
    for field in table.fields() {
        println!("  {} {}", field.qualified_name(), field.data_type());
    }
    if let Some(pk) = table.primary_key() {
        println!("  primary key {} ({})", pk.name, pk.columns.join(", "));
    }
    if let Some(identity) = table.identity() {
        println!("  identity {}", identity.column);
    }
    for index in table.indexes() {
        println!("  index {} ({})", index.name, index.columns.join(", "));
    }
}

fn open_db(config: &AppConfig) -> Result<DatabaseHandle> {
    let db = DatabaseHandle::from_config(config)?;
    db.run_migrations()?;
    Ok(db)
}

fn run(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Describe { alias, rename } => {
            let table = match (alias, rename) {
                (Some(a), _) => PAYMENT_METHOD.as_(a),
                (None, Some(r)) => PAYMENT_METHOD.rename(r),
                (None, None) => PaymentMethodTable::new(),
            };
            describe(&table);
        }

        Commands::Setup => {
            let db = open_db(config)?;
            let summary = seed_test_data(&db)?;
            println!(
                "Created {} vat rates, {} discount rates, {} payment methods, {} pricing details",
                summary.vat_rates, summary.discount_rates, summary.payment_methods, summary.pricing_details
            );
        }

        Commands::PaymentMethods { ids, json } => {
            let db = open_db(config)?;
            let methods = if ids.is_empty() {
                db.find_all_payment_methods()?
            } else {
                db.find_payment_methods_by_ids(&ids)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&methods)?);
            } else {
                for m in methods.iter() {
                    println!("{}: {} ({:.2})", m.id, m.description, m.charge);
                }
            }
        }

        Commands::PricingDetails { ids, json } => {
            let db = open_db(config)?;
            let details = if ids.is_empty() {
                db.find_all_pricing_details()?
            } else {
                db.find_pricing_details_by_ids(&ids)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                for d in details.iter() {
                    println!(
                        "{}: {} vat={} discount={} payment={}",
                        d.id,
                        d.description,
                        d.vat_rate.description,
                        d.discount_rate.description,
                        d.preferred_payment_method.description
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    // Clap picks up DATABASE_URL from the .env file via `env = "DATABASE_URL"`.
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    logger::init_logger(&config);

    if let Err(e) = run(cli.command, &config) {
        logger::error(&format!("{:#}", e));
        eprintln!("Error executing command: {:#}", e);
        exit(1);
    }
}
