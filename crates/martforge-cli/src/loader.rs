//! Loads the exported customer dimension and sales fact into Postgres.
//!
//! The loader is idempotent: the schema script only creates missing tables,
//! and both target tables are cleared before the bulk insert so repeated runs
//! end in the same state.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, QueryBuilder};
use thiserror::Error;
use tracing::{info, warn};

const INSERT_BATCH: usize = 500;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("bad timestamp '{0}'")]
    Timestamp(String),
}

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    customer_id: i64,
    customer_code: String,
    first_name: String,
    last_name: String,
    full_name: String,
    email: String,
    phone: Option<String>,
    registered_on: NaiveDate,
    city: Option<String>,
    country: String,
    age: i64,
    gender: String,
    segment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaleRecord {
    sale_id: i64,
    customer_id: i64,
    product_id: i64,
    date_id: i64,
    sale_date: NaiveDate,
    sale_hour: i64,
    sold_at: String,
    channel_id: i64,
    promotion_id: i64,
    carrier_id: Option<i64>,
    quantity: i64,
    gross_amount: f64,
    total_amount: f64,
    product_cost: f64,
    margin: f64,
    discount_amount: f64,
}

impl SaleRecord {
    fn sold_at(&self) -> Result<NaiveDateTime, LoaderError> {
        NaiveDateTime::parse_from_str(&self.sold_at, "%Y-%m-%d %H:%M:%S")
            .map_err(|_| LoaderError::Timestamp(self.sold_at.clone()))
    }
}

pub async fn run(conn: &str, data_dir: &Path) -> Result<(), LoaderError> {
    let pool = PgPoolOptions::new().max_connections(4).connect(conn).await?;
    info!("database connection established");

    apply_schema(&pool, &data_dir.join("mart_schema.sql")).await?;
    clear_targets(&pool).await?;

    let customers = read_customers(&data_dir.join("dim_customer.csv"))?;
    let sales = read_sales(&data_dir.join("fact_sales.csv"))?;
    info!(customers = customers.len(), sales = sales.len(), "input files parsed");

    insert_customers(&pool, &customers).await?;
    insert_sales(&pool, &sales).await?;
    check_referential_integrity(&pool).await?;

    info!("load completed");
    Ok(())
}

async fn apply_schema(pool: &PgPool, path: &Path) -> Result<(), LoaderError> {
    let script = fs::read_to_string(path)?;
    let without_comments: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut applied = 0_u32;
    for statement in without_comments.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
        applied += 1;
    }
    info!(statements = applied, "schema applied");
    Ok(())
}

/// Facts first so the delete never strands rows pointing at missing customers.
async fn clear_targets(pool: &PgPool) -> Result<(), LoaderError> {
    sqlx::query("DELETE FROM fact_sales").execute(pool).await?;
    sqlx::query("DELETE FROM dim_customer").execute(pool).await?;
    info!("target tables cleared");
    Ok(())
}

fn read_customers(path: &Path) -> Result<Vec<CustomerRecord>, LoaderError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

fn read_sales(path: &Path) -> Result<Vec<SaleRecord>, LoaderError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

async fn insert_customers(pool: &PgPool, customers: &[CustomerRecord]) -> Result<(), LoaderError> {
    for chunk in customers.chunks(INSERT_BATCH) {
        let mut builder = QueryBuilder::new(
            "INSERT INTO dim_customer (customer_id, customer_code, first_name, last_name, \
             full_name, email, phone, registered_on, city, country, age, gender, segment) ",
        );
        builder.push_values(chunk, |mut row, customer| {
            row.push_bind(customer.customer_id)
                .push_bind(&customer.customer_code)
                .push_bind(&customer.first_name)
                .push_bind(&customer.last_name)
                .push_bind(&customer.full_name)
                .push_bind(&customer.email)
                .push_bind(&customer.phone)
                .push_bind(customer.registered_on)
                .push_bind(&customer.city)
                .push_bind(&customer.country)
                .push_bind(customer.age)
                .push_bind(&customer.gender)
                .push_bind(&customer.segment);
        });
        builder.build().execute(pool).await?;
    }
    info!(rows = customers.len(), "dim_customer loaded");
    Ok(())
}

async fn insert_sales(pool: &PgPool, sales: &[SaleRecord]) -> Result<(), LoaderError> {
    for chunk in sales.chunks(INSERT_BATCH) {
        let timestamps = chunk
            .iter()
            .map(SaleRecord::sold_at)
            .collect::<Result<Vec<NaiveDateTime>, LoaderError>>()?;
        let mut builder = QueryBuilder::new(
            "INSERT INTO fact_sales (sale_id, customer_id, product_id, date_id, sale_date, \
             sale_hour, sold_at, channel_id, promotion_id, carrier_id, quantity, gross_amount, \
             total_amount, product_cost, margin, discount_amount) ",
        );
        builder.push_values(chunk.iter().zip(timestamps), |mut row, (sale, sold_at)| {
            row.push_bind(sale.sale_id)
                .push_bind(sale.customer_id)
                .push_bind(sale.product_id)
                .push_bind(sale.date_id)
                .push_bind(sale.sale_date)
                .push_bind(sale.sale_hour)
                .push_bind(sold_at)
                .push_bind(sale.channel_id)
                .push_bind(sale.promotion_id)
                .push_bind(sale.carrier_id)
                .push_bind(sale.quantity)
                .push_bind(sale.gross_amount)
                .push_bind(sale.total_amount)
                .push_bind(sale.product_cost)
                .push_bind(sale.margin)
                .push_bind(sale.discount_amount);
        });
        builder.build().execute(pool).await?;
    }
    info!(rows = sales.len(), "fact_sales loaded");
    Ok(())
}

/// Count fact rows whose customer key resolves to no dimension row.
async fn check_referential_integrity(pool: &PgPool) -> Result<(), LoaderError> {
    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM fact_sales s \
         LEFT JOIN dim_customer c ON s.customer_id = c.customer_id \
         WHERE c.customer_id IS NULL",
    )
    .fetch_one(pool)
    .await?;
    if orphans == 0 {
        info!("referential check passed: every sale resolves to a customer");
    } else {
        warn!(orphans, "referential check found sales without a matching customer");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exported_timestamp_format() {
        let record = SaleRecord {
            sale_id: 1,
            customer_id: 1,
            product_id: 1,
            date_id: 1,
            sale_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            sale_hour: 14,
            sold_at: "2023-06-01 14:30:00".to_string(),
            channel_id: 1,
            promotion_id: 5,
            carrier_id: None,
            quantity: 1,
            gross_amount: 100.0,
            total_amount: 120.0,
            product_cost: 70.0,
            margin: 30.0,
            discount_amount: 0.0,
        };
        let parsed = record.sold_at().unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-06-01 14:30:00");
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let record = SaleRecord {
            sold_at: "2023-06-01T14:30:00Z".to_string(),
            sale_id: 1,
            customer_id: 1,
            product_id: 1,
            date_id: 1,
            sale_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            sale_hour: 14,
            channel_id: 1,
            promotion_id: 5,
            carrier_id: None,
            quantity: 1,
            gross_amount: 0.0,
            total_amount: 0.0,
            product_cost: 0.0,
            margin: 0.0,
            discount_amount: 0.0,
        };
        assert!(matches!(record.sold_at(), Err(LoaderError::Timestamp(_))));
    }

    #[test]
    fn deserializes_semicolon_csv_with_empty_optionals() {
        let data = "customer_id;customer_code;first_name;last_name;full_name;email;phone;\
                    registered_on;city;country;age;gender;segment\n\
                    7;CUST-00007;Ahmed;Alami;Ahmed Alami;ahmed.alami7@email.ma;;\
                    2023-03-15;;Morocco;34;M;Silver\n";
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(data.as_bytes());
        let record: CustomerRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record.customer_id, 7);
        assert!(record.phone.is_none());
        assert!(record.city.is_none());
        assert_eq!(record.segment.as_deref(), Some("Silver"));
    }
}
