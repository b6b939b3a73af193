use chrono::{NaiveDate, NaiveDateTime};
use rand::distr::weighted::WeightedIndex;

use crate::calendar::Calendar;
use crate::config::GeneratorConfig;
use crate::products::Product;
use crate::reference::{self, Promotion, MOBILE, STORE, WEB};
use crate::sampler::Sampler;

/// Hour-of-day traffic profile: low overnight, peaks around midday and the
/// early evening. One bucket per hour, 00..23.
const HOUR_WEIGHTS: [f64; 24] = [
    0.02, 0.01, 0.01, 0.01, 0.01, 0.02, // 00-05
    0.03, 0.04, 0.05, 0.06, 0.06, 0.06, // 06-11
    0.06, 0.06, 0.06, 0.06, 0.06, 0.06, // 12-17
    0.07, 0.07, 0.06, 0.05, 0.04, 0.03, // 18-23
];

const CHANNEL_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];
const CARRIER_WEIGHTS: [f64; 3] = [0.7, 0.2, 0.1];

/// One row of the sales fact table. All monetary fields are rounded to two
/// decimal places at computation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub sale_id: u32,
    pub customer_id: u32,
    pub product_id: u32,
    pub date_id: u32,
    pub sale_date: NaiveDate,
    pub hour: u32,
    pub sold_at: NaiveDateTime,
    pub channel_id: u32,
    pub promotion_id: u32,
    pub carrier_id: Option<u32>,
    pub quantity: u32,
    pub gross_amount: f64,
    pub total_amount: f64,
    pub product_cost: f64,
    pub margin: f64,
    pub discount_amount: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the sales fact table. Requires a finished calendar, customer count,
/// product dimension and promotion set.
pub fn generate(
    config: &GeneratorConfig,
    calendar: &Calendar,
    products: &[Product],
    promotions: &[Promotion],
    sampler: &mut Sampler,
) -> Vec<Sale> {
    // Higher-traffic seasons are proportionally over-represented, not just
    // descriptively labeled.
    let day_weights: Vec<f64> = calendar
        .days()
        .iter()
        .map(|day| day.season.sales_weight())
        .collect();
    let day_picker = WeightedIndex::new(&day_weights).expect("valid day weights");
    let hour_picker = WeightedIndex::new(HOUR_WEIGHTS).expect("valid hour weights");

    let heavy_buyers = (config.customers / 5).max(1) as i64;
    let mut sales = Vec::with_capacity(config.transactions as usize);

    for sale_id in 1..=config.transactions {
        let day = &calendar.days()[sampler.weighted(&day_picker)];

        let hour = sampler.weighted(&hour_picker) as u32;
        let minute = sampler.int_between(0, 59) as u32;
        let second = sampler.int_between(0, 59) as u32;
        let sold_at = day
            .date
            .and_hms_opt(hour, minute, second)
            .expect("valid time of day");

        // 80/20 rule: most transactions come from the first fifth of the
        // base id range.
        let customer_id = if sampler.chance(0.8) {
            sampler.int_between(1, heavy_buyers) as u32
        } else {
            sampler.int_between(1, config.customers as i64) as u32
        };

        let product = &products[sampler.int_between(0, products.len() as i64 - 1) as usize];
        let channel_id = sampler.weighted_choice(&CHANNEL_WEIGHTS) as u32 + 1;

        let quantity: u32 = match channel_id {
            WEB => [1, 2, 3][sampler.weighted_choice(&[0.7, 0.2, 0.1])],
            MOBILE => 1,
            _ => [1, 2, 3, 4][sampler.weighted_choice(&[0.5, 0.3, 0.15, 0.05])],
        };

        let promotion_id = reference::promotion_for_season(day.season, sampler);
        let discount_pct = promotions
            .iter()
            .find(|promo| promo.promotion_id == promotion_id)
            .map(|promo| promo.discount_pct)
            .unwrap_or(0.0);

        let gross_amount = round2(product.unit_price * quantity as f64);
        let discount_amount = round2(gross_amount * discount_pct / 100.0);
        let net = gross_amount - discount_amount;
        let total_amount = round2(net * 1.20);
        let product_cost = round2(product.unit_cost * quantity as f64);
        let margin = round2(net - product_cost);

        // Store sales are picked up in person; only online channels ship.
        let carrier_id = if channel_id == STORE {
            None
        } else {
            Some(sampler.weighted_choice(&CARRIER_WEIGHTS) as u32 + 1)
        };

        sales.push(Sale {
            sale_id,
            customer_id,
            product_id: product.product_id,
            date_id: day.date_id,
            sale_date: day.date,
            hour,
            sold_at,
            channel_id,
            promotion_id,
            carrier_id,
            quantity,
            gross_amount,
            total_amount,
            product_cost,
            margin,
            discount_amount,
        });
    }

    sales
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;
    use crate::products;
    use crate::reference::{BLACK_FRIDAY, WELCOME};

    fn fixture(transactions: u32) -> (GeneratorConfig, Calendar, Vec<Product>, Vec<Promotion>) {
        let config = GeneratorConfig {
            customers: 200,
            products: 50,
            transactions,
            ..GeneratorConfig::default()
        };
        let calendar = Calendar::build(config.start_date, config.end_date);
        let mut sampler = Sampler::new(config.seed);
        let catalog = products::generate(&config, &mut sampler);
        let promotions = reference::promotions(&config);
        (config, calendar, catalog, promotions)
    }

    #[test]
    fn amounts_obey_the_derivation_formulas() {
        let (config, calendar, catalog, promotions) = fixture(2000);
        let mut sampler = Sampler::new(99);
        let sales = generate(&config, &calendar, &catalog, &promotions, &mut sampler);
        for sale in &sales {
            assert!(sale.discount_amount >= 0.0);
            assert!(sale.discount_amount <= sale.gross_amount);
            let net = sale.gross_amount - sale.discount_amount;
            assert!((sale.total_amount - net * 1.20).abs() < 0.01, "tax mismatch");
            assert!((sale.margin - (net - sale.product_cost)).abs() < 0.01);
        }
    }

    #[test]
    fn black_friday_days_always_carry_the_black_friday_promotion() {
        let (config, calendar, catalog, promotions) = fixture(3000);
        let mut sampler = Sampler::new(5);
        let sales = generate(&config, &calendar, &catalog, &promotions, &mut sampler);
        let mut seen = 0;
        for sale in &sales {
            let day = calendar.day(sale.date_id).unwrap();
            if day.season == Season::BlackFriday {
                seen += 1;
                assert_eq!(sale.promotion_id, BLACK_FRIDAY);
                assert_ne!(sale.promotion_id, WELCOME);
            }
        }
        assert!(seen > 0, "weighted day pick never hit November");
    }

    #[test]
    fn mobile_sales_have_quantity_one_and_store_sales_no_carrier() {
        let (config, calendar, catalog, promotions) = fixture(2000);
        let mut sampler = Sampler::new(13);
        let sales = generate(&config, &calendar, &catalog, &promotions, &mut sampler);
        for sale in &sales {
            match sale.channel_id {
                MOBILE => assert_eq!(sale.quantity, 1),
                STORE => assert!(sale.carrier_id.is_none()),
                _ => assert!(sale.carrier_id.is_some()),
            }
            assert!((1..=4).contains(&sale.quantity));
        }
    }

    #[test]
    fn timestamps_agree_with_the_chosen_day_and_hour() {
        let (config, calendar, catalog, promotions) = fixture(500);
        let mut sampler = Sampler::new(21);
        let sales = generate(&config, &calendar, &catalog, &promotions, &mut sampler);
        for sale in &sales {
            assert_eq!(sale.sold_at.date(), sale.sale_date);
            assert_eq!(chrono::Timelike::hour(&sale.sold_at), sale.hour);
        }
    }
}
