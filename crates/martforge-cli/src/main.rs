mod loader;

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use martforge_export::{csv as csv_export, json as json_export, sql as sql_export, xml as xml_export};
use martforge_export::ExportError;
use martforge_generate::{Engine, GenerationError, GeneratorConfig};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("loader error: {0}")]
    Loader(#[from] loader::LoaderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile: {0}")]
    Profile(#[from] toml::de::Error),
}

#[derive(Parser, Debug)]
#[command(name = "martforge", version, about = "Reproducible e-commerce star-schema generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the dataset and export every table.
    Generate(GenerateArgs),
    /// Load dim_customer and fact_sales into a relational database.
    Load(LoadArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Optional TOML profile; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Inclusive range start (YYYY-MM-DD).
    #[arg(long)]
    start_date: Option<NaiveDate>,
    /// Inclusive range end (YYYY-MM-DD).
    #[arg(long)]
    end_date: Option<NaiveDate>,
    /// Customer dimension target (before duplicate injection).
    #[arg(long)]
    customers: Option<u32>,
    /// Product dimension target; the produced count matches exactly.
    #[arg(long)]
    products: Option<u32>,
    /// Sales fact row count.
    #[arg(long)]
    transactions: Option<u32>,
    /// Web session fact row count.
    #[arg(long)]
    sessions: Option<u32>,
    /// Output directory for exported tables.
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Database connection string.
    #[arg(long, value_name = "CONNECTION_STRING")]
    conn: String,
    /// Directory holding the exported tables and schema script.
    #[arg(long, default_value = "out")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Load(args) => loader::run(&args.conn, &args.data_dir).await.map_err(CliError::from),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => toml::from_str::<GeneratorConfig>(&fs::read_to_string(path)?)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(start_date) = args.start_date {
        config.start_date = start_date;
    }
    if let Some(end_date) = args.end_date {
        config.end_date = end_date;
    }
    if let Some(customers) = args.customers {
        config.customers = customers;
    }
    if let Some(products) = args.products {
        config.products = products;
    }
    if let Some(transactions) = args.transactions {
        config.transactions = transactions;
    }
    if let Some(sessions) = args.sessions {
        config.web_sessions = sessions;
    }

    let run_id = Uuid::new_v4().to_string();
    info!(run_id = %run_id, out = %args.out.display(), "export run starting");

    let engine = Engine::new(config)?;
    let dataset = engine.run()?;
    let tables = dataset.tables()?;

    fs::create_dir_all(&args.out)?;
    for table in &tables {
        let name = table.name.as_str();
        match name {
            "dim_date" | "dim_promotion" | "dim_customer" | "fact_sales" | "fact_returns"
            | "fact_inventory" | "fact_monthly_targets" => {
                csv_export::write_table_csv(&args.out.join(format!("{name}.csv")), table)?;
            }
            "dim_channel" | "dim_carrier" | "fact_web_sessions" => {
                json_export::write_table_json(&args.out.join(format!("{name}.json")), table)?;
            }
            "dim_product" => {
                xml_export::write_table_xml(&args.out.join("dim_product.xml"), table, "product")?;
            }
            "dim_return_reason" => {
                xml_export::write_table_xml(
                    &args.out.join("dim_return_reason.xml"),
                    table,
                    "reason",
                )?;
            }
            "dim_geography" => {
                xml_export::write_table_xml(&args.out.join("dim_geography.xml"), table, "city")?;
            }
            other => {
                return Err(CliError::Export(ExportError::Io(std::io::Error::other(
                    format!("no export mapping for table '{other}'"),
                ))));
            }
        }
        info!(table = name, rows = table.rows.len(), "table exported");
    }

    sql_export::write_schema_script(&args.out.join("mart_schema.sql"), &tables)?;
    info!(run_id = %run_id, tables = tables.len(), "export run completed");
    Ok(())
}
