use chrono::NaiveDate;

use crate::calendar::Calendar;
use crate::products::Product;
use crate::sampler::Sampler;

/// One weekly stock snapshot for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySnapshot {
    pub snapshot_id: u32,
    pub product_id: u32,
    pub date_id: u32,
    pub snapshot_date: NaiveDate,
    pub quantity_available: u32,
    pub quantity_reserved: u32,
    pub stock_value: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row per (product, weekly snapshot day). Reserved stock never exceeds
/// available stock.
pub fn generate(
    calendar: &Calendar,
    products: &[Product],
    sampler: &mut Sampler,
) -> Vec<InventorySnapshot> {
    let snapshot_days = calendar.snapshot_days();
    let mut snapshots = Vec::with_capacity(snapshot_days.len() * products.len());

    for day in snapshot_days {
        for product in products {
            let quantity_available = sampler.int_between(0, 500) as u32;
            let reserved_cap = quantity_available.min(50);
            let quantity_reserved = sampler.int_between(0, reserved_cap as i64) as u32;
            snapshots.push(InventorySnapshot {
                snapshot_id: snapshots.len() as u32 + 1,
                product_id: product.product_id,
                date_id: day.date_id,
                snapshot_date: day.date,
                quantity_available,
                quantity_reserved,
                stock_value: round2(quantity_available as f64 * product.unit_price),
            });
        }
    }

    snapshots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::products;

    fn fixture() -> (Calendar, Vec<Product>) {
        let config = GeneratorConfig {
            products: 20,
            ..GeneratorConfig::default()
        };
        let calendar = Calendar::build(config.start_date, config.end_date);
        let catalog = products::generate(&config, &mut Sampler::new(config.seed));
        (calendar, catalog)
    }

    #[test]
    fn reserved_never_exceeds_available() {
        let (calendar, catalog) = fixture();
        let snapshots = generate(&calendar, &catalog, &mut Sampler::new(4));
        for snapshot in &snapshots {
            assert!(snapshot.quantity_reserved <= snapshot.quantity_available);
            assert!(snapshot.quantity_reserved <= 50);
        }
    }

    #[test]
    fn covers_every_product_for_every_weekly_day() {
        let (calendar, catalog) = fixture();
        let snapshots = generate(&calendar, &catalog, &mut Sampler::new(4));
        let weeks = calendar.snapshot_days().len();
        assert_eq!(snapshots.len(), weeks * catalog.len());
    }

    #[test]
    fn stock_value_is_available_times_unit_price() {
        let (calendar, catalog) = fixture();
        let snapshots = generate(&calendar, &catalog, &mut Sampler::new(4));
        for snapshot in snapshots.iter().take(500) {
            let product = &catalog[snapshot.product_id as usize - 1];
            let expected = snapshot.quantity_available as f64 * product.unit_price;
            assert!((snapshot.stock_value - expected).abs() < 0.01);
        }
    }
}
