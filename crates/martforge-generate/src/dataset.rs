use martforge_core::{ColumnKind as K, Table, Value};

use crate::calendar::Calendar;
use crate::customers::Customer;
use crate::errors::GenerationError;
use crate::inventory::InventorySnapshot;
use crate::products::Product;
use crate::reference::{Carrier, Channel, Geography, Promotion, ReturnReason};
use crate::returns::Return;
use crate::sales::Sale;
use crate::sessions::WebSession;
use crate::targets::MonthlyTarget;

/// The finished star schema: every dimension and fact of one run.
///
/// Immutable once returned by the engine; [`Dataset::tables`] flattens each
/// entity into the stable, documented column set consumed by exporters and
/// the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub calendar: Calendar,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub channels: Vec<Channel>,
    pub promotions: Vec<Promotion>,
    pub carriers: Vec<Carrier>,
    pub return_reasons: Vec<ReturnReason>,
    pub geography: Vec<Geography>,
    pub sales: Vec<Sale>,
    pub returns: Vec<Return>,
    pub sessions: Vec<WebSession>,
    pub inventory: Vec<InventorySnapshot>,
    pub targets: Vec<MonthlyTarget>,
}

fn flag(value: bool) -> Value {
    Value::Int(value as i64)
}

impl Dataset {
    /// All tables in dimension-before-fact order.
    pub fn tables(&self) -> Result<Vec<Table>, GenerationError> {
        Ok(vec![
            self.dim_date()?,
            self.dim_customer()?,
            self.dim_product()?,
            self.dim_channel()?,
            self.dim_promotion()?,
            self.dim_carrier()?,
            self.dim_return_reason()?,
            self.dim_geography()?,
            self.fact_sales()?,
            self.fact_returns()?,
            self.fact_web_sessions()?,
            self.fact_inventory()?,
            self.fact_monthly_targets()?,
        ])
    }

    pub fn dim_date(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_date",
            "date_id",
            &[
                ("date_id", K::Int),
                ("full_date", K::Date),
                ("year", K::Int),
                ("quarter", K::Int),
                ("month", K::Int),
                ("month_name", K::Text),
                ("iso_week", K::Int),
                ("day", K::Int),
                ("weekday", K::Text),
                ("is_weekend", K::Int),
                ("is_holiday", K::Int),
                ("season", K::Text),
            ],
        );
        for day in self.calendar.days() {
            table.push_row(vec![
                Value::Int(day.date_id as i64),
                Value::Date(day.date),
                Value::Int(day.year as i64),
                Value::Int(day.quarter as i64),
                Value::Int(day.month as i64),
                Value::Text(day.month_name.clone()),
                Value::Int(day.iso_week as i64),
                Value::Int(day.day as i64),
                Value::Text(day.weekday_name.clone()),
                flag(day.is_weekend),
                flag(day.is_holiday),
                Value::Text(day.season.label().to_string()),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_customer(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_customer",
            "customer_id",
            &[
                ("customer_id", K::Int),
                ("customer_code", K::Text),
                ("first_name", K::Text),
                ("last_name", K::Text),
                ("full_name", K::Text),
                ("email", K::Text),
                ("phone", K::Text),
                ("registered_on", K::Date),
                ("city", K::Text),
                ("country", K::Text),
                ("age", K::Int),
                ("gender", K::Text),
                ("segment", K::Text),
            ],
        );
        for customer in &self.customers {
            table.push_row(vec![
                Value::Int(customer.customer_id as i64),
                Value::Text(customer.code.clone()),
                Value::Text(customer.first_name.clone()),
                Value::Text(customer.last_name.clone()),
                Value::Text(customer.full_name()),
                Value::Text(customer.email.clone()),
                Value::from(customer.phone.clone()),
                Value::Date(customer.registered_on),
                Value::from(customer.city.clone()),
                Value::Text(customer.country.clone()),
                Value::Int(customer.age as i64),
                Value::Text(customer.gender.clone()),
                customer
                    .segment
                    .map_or(Value::Null, |segment| Value::Text(segment.as_str().into())),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_product(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_product",
            "product_id",
            &[
                ("product_id", K::Int),
                ("sku", K::Text),
                ("product_name", K::Text),
                ("category", K::Text),
                ("subcategory", K::Text),
                ("brand", K::Text),
                ("unit_price", K::Numeric),
                ("unit_cost", K::Numeric),
                ("weight_kg", K::Numeric),
                ("is_active", K::Int),
            ],
        );
        for product in &self.products {
            table.push_row(vec![
                Value::Int(product.product_id as i64),
                Value::Text(product.sku.clone()),
                Value::Text(product.name.clone()),
                Value::Text(product.category.clone()),
                Value::Text(product.subcategory.clone()),
                Value::Text(product.brand.clone()),
                Value::Float(product.unit_price),
                Value::Float(product.unit_cost),
                Value::Float(product.weight_kg),
                flag(product.is_active),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_channel(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_channel",
            "channel_id",
            &[
                ("channel_id", K::Int),
                ("channel_name", K::Text),
                ("channel_type", K::Text),
            ],
        );
        for channel in &self.channels {
            table.push_row(vec![
                Value::Int(channel.channel_id as i64),
                Value::Text(channel.name.to_string()),
                Value::Text(channel.kind.to_string()),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_promotion(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_promotion",
            "promotion_id",
            &[
                ("promotion_id", K::Int),
                ("promo_code", K::Text),
                ("campaign", K::Text),
                ("discount_kind", K::Text),
                ("discount_pct", K::Numeric),
                ("starts_on", K::Date),
                ("ends_on", K::Date),
            ],
        );
        for promotion in &self.promotions {
            table.push_row(vec![
                Value::Int(promotion.promotion_id as i64),
                promotion
                    .code
                    .map_or(Value::Null, |code| Value::Text(code.to_string())),
                Value::Text(promotion.campaign.to_string()),
                promotion
                    .discount_kind
                    .map_or(Value::Null, |kind| Value::Text(kind.to_string())),
                Value::Float(promotion.discount_pct),
                promotion.starts_on.map_or(Value::Null, Value::Date),
                promotion.ends_on.map_or(Value::Null, Value::Date),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_carrier(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_carrier",
            "carrier_id",
            &[
                ("carrier_id", K::Int),
                ("carrier_name", K::Text),
                ("service_level", K::Text),
                ("promised_days", K::Int),
            ],
        );
        for carrier in &self.carriers {
            table.push_row(vec![
                Value::Int(carrier.carrier_id as i64),
                Value::Text(carrier.name.to_string()),
                Value::Text(carrier.service_level.to_string()),
                Value::Int(carrier.promised_days as i64),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_return_reason(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_return_reason",
            "reason_id",
            &[
                ("reason_id", K::Int),
                ("reason", K::Text),
                ("reason_category", K::Text),
            ],
        );
        for reason in &self.return_reasons {
            table.push_row(vec![
                Value::Int(reason.reason_id as i64),
                Value::Text(reason.reason.to_string()),
                Value::Text(reason.category.to_string()),
            ])?;
        }
        Ok(table)
    }

    pub fn dim_geography(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "dim_geography",
            "geo_id",
            &[
                ("geo_id", K::Int),
                ("city", K::Text),
                ("region", K::Text),
            ],
        );
        for geo in &self.geography {
            table.push_row(vec![
                Value::Int(geo.geo_id as i64),
                Value::Text(geo.city.to_string()),
                Value::Text(geo.region.to_string()),
            ])?;
        }
        Ok(table)
    }

    pub fn fact_sales(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "fact_sales",
            "sale_id",
            &[
                ("sale_id", K::Int),
                ("customer_id", K::Int),
                ("product_id", K::Int),
                ("date_id", K::Int),
                ("sale_date", K::Date),
                ("sale_hour", K::Int),
                ("sold_at", K::Timestamp),
                ("channel_id", K::Int),
                ("promotion_id", K::Int),
                ("carrier_id", K::Int),
                ("quantity", K::Int),
                ("gross_amount", K::Numeric),
                ("total_amount", K::Numeric),
                ("product_cost", K::Numeric),
                ("margin", K::Numeric),
                ("discount_amount", K::Numeric),
            ],
        );
        for sale in &self.sales {
            table.push_row(vec![
                Value::Int(sale.sale_id as i64),
                Value::Int(sale.customer_id as i64),
                Value::Int(sale.product_id as i64),
                Value::Int(sale.date_id as i64),
                Value::Date(sale.sale_date),
                Value::Int(sale.hour as i64),
                Value::Timestamp(sale.sold_at),
                Value::Int(sale.channel_id as i64),
                Value::Int(sale.promotion_id as i64),
                Value::from(sale.carrier_id.map(i64::from)),
                Value::Int(sale.quantity as i64),
                Value::Float(sale.gross_amount),
                Value::Float(sale.total_amount),
                Value::Float(sale.product_cost),
                Value::Float(sale.margin),
                Value::Float(sale.discount_amount),
            ])?;
        }
        Ok(table)
    }

    pub fn fact_returns(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "fact_returns",
            "return_id",
            &[
                ("return_id", K::Int),
                ("sale_id", K::Int),
                ("return_date_id", K::Int),
                ("return_date", K::Date),
                ("reason_id", K::Int),
                ("refunded_amount", K::Numeric),
                ("days_to_return", K::Int),
            ],
        );
        for ret in &self.returns {
            table.push_row(vec![
                Value::Int(ret.return_id as i64),
                Value::Int(ret.sale_id as i64),
                Value::Int(ret.return_date_id as i64),
                Value::Date(ret.return_date),
                Value::Int(ret.reason_id as i64),
                Value::Float(ret.refunded_amount),
                Value::Int(ret.days_to_return as i64),
            ])?;
        }
        Ok(table)
    }

    pub fn fact_web_sessions(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "fact_web_sessions",
            "session_id",
            &[
                ("session_id", K::Int),
                ("customer_id", K::Int),
                ("date_id", K::Int),
                ("pages_viewed", K::Int),
                ("duration_seconds", K::Int),
                ("purchased", K::Int),
                ("cart_abandoned", K::Int),
            ],
        );
        for session in &self.sessions {
            table.push_row(vec![
                Value::Int(session.session_id as i64),
                Value::from(session.customer_id.map(i64::from)),
                Value::Int(session.date_id as i64),
                Value::Int(session.pages_viewed as i64),
                Value::Int(session.duration_seconds as i64),
                flag(session.purchased),
                flag(session.cart_abandoned),
            ])?;
        }
        Ok(table)
    }

    pub fn fact_inventory(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "fact_inventory",
            "snapshot_id",
            &[
                ("snapshot_id", K::Int),
                ("product_id", K::Int),
                ("date_id", K::Int),
                ("snapshot_date", K::Date),
                ("quantity_available", K::Int),
                ("quantity_reserved", K::Int),
                ("stock_value", K::Numeric),
            ],
        );
        for snapshot in &self.inventory {
            table.push_row(vec![
                Value::Int(snapshot.snapshot_id as i64),
                Value::Int(snapshot.product_id as i64),
                Value::Int(snapshot.date_id as i64),
                Value::Date(snapshot.snapshot_date),
                Value::Int(snapshot.quantity_available as i64),
                Value::Int(snapshot.quantity_reserved as i64),
                Value::Float(snapshot.stock_value),
            ])?;
        }
        Ok(table)
    }

    pub fn fact_monthly_targets(&self) -> Result<Table, GenerationError> {
        let mut table = Table::new(
            "fact_monthly_targets",
            "target_id",
            &[
                ("target_id", K::Int),
                ("year", K::Int),
                ("month", K::Int),
                ("revenue_target", K::Int),
                ("marketing_budget", K::Int),
            ],
        );
        for target in &self.targets {
            table.push_row(vec![
                Value::Int(target.target_id as i64),
                Value::Int(target.year as i64),
                Value::Int(target.month as i64),
                Value::Int(target.revenue_target),
                Value::Int(target.marketing_budget),
            ])?;
        }
        Ok(table)
    }
}
