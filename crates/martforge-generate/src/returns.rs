use chrono::{Duration, NaiveDate};

use crate::calendar::Calendar;
use crate::sales::Sale;
use crate::sampler::Sampler;

/// Fraction of sales that come back.
pub const RETURN_RATE: f64 = 0.05;

/// One row of the returns fact table.
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub return_id: u32,
    pub sale_id: u32,
    pub return_date_id: u32,
    pub return_date: NaiveDate,
    pub reason_id: u32,
    pub refunded_amount: f64,
    pub days_to_return: u32,
}

/// Sample a fixed fraction of sales without replacement and derive a return
/// row for each. A return date falling past the calendar range drops the row
/// silently; it is not retried.
pub fn generate(
    sales: &[Sale],
    calendar: &Calendar,
    reason_count: u32,
    sampler: &mut Sampler,
) -> Vec<Return> {
    let amount = (sales.len() as f64 * RETURN_RATE) as usize;
    let sampled = sampler.sample_indices(sales.len(), amount);

    let mut returns = Vec::with_capacity(amount);
    for index in sampled {
        let sale = &sales[index];
        let days_to_return = sampler.int_between(1, 14) as u32;
        let return_date = sale.sale_date + Duration::days(days_to_return as i64);
        let reason_id = sampler.int_between(1, reason_count as i64) as u32;

        let Some(return_date_id) = calendar.date_id(return_date) else {
            continue;
        };

        returns.push(Return {
            return_id: returns.len() as u32 + 1,
            sale_id: sale.sale_id,
            return_date_id,
            return_date,
            reason_id,
            refunded_amount: sale.total_amount,
            days_to_return,
        });
    }

    returns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::{products, reference, sales};

    fn fixture() -> (Calendar, Vec<Sale>) {
        let config = GeneratorConfig {
            customers: 100,
            products: 30,
            transactions: 4000,
            ..GeneratorConfig::default()
        };
        let calendar = Calendar::build(config.start_date, config.end_date);
        let mut sampler = Sampler::new(config.seed);
        let catalog = products::generate(&config, &mut sampler);
        let promotions = reference::promotions(&config);
        let sales = sales::generate(&config, &calendar, &catalog, &promotions, &mut sampler);
        (calendar, sales)
    }

    #[test]
    fn delays_stay_in_the_one_to_fourteen_window() {
        let (calendar, sales) = fixture();
        let returns = generate(&sales, &calendar, 7, &mut Sampler::new(3));
        assert!(!returns.is_empty());
        for ret in &returns {
            assert!((1..=14).contains(&ret.days_to_return));
        }
    }

    #[test]
    fn return_dates_resolve_after_their_sale() {
        let (calendar, sales) = fixture();
        let returns = generate(&sales, &calendar, 7, &mut Sampler::new(3));
        for ret in &returns {
            let sale = sales.iter().find(|s| s.sale_id == ret.sale_id).unwrap();
            assert!(ret.return_date > sale.sale_date);
            assert_eq!(calendar.date_id(ret.return_date), Some(ret.return_date_id));
            assert_eq!(ret.refunded_amount, sale.total_amount);
        }
    }

    #[test]
    fn out_of_range_returns_are_dropped_not_retried() {
        let (calendar, sales) = fixture();
        let returns = generate(&sales, &calendar, 7, &mut Sampler::new(3));
        // 5% were sampled; late-December sales may fall past the range end.
        let sampled = (sales.len() as f64 * RETURN_RATE) as usize;
        assert!(returns.len() <= sampled);
        // Dense ids over the emitted rows only.
        for (index, ret) in returns.iter().enumerate() {
            assert_eq!(ret.return_id, index as u32 + 1);
        }
    }

    #[test]
    fn each_sale_is_returned_at_most_once() {
        let (calendar, sales) = fixture();
        let returns = generate(&sales, &calendar, 7, &mut Sampler::new(8));
        let mut sale_ids: Vec<u32> = returns.iter().map(|r| r.sale_id).collect();
        sale_ids.sort_unstable();
        sale_ids.dedup();
        assert_eq!(sale_ids.len(), returns.len());
    }
}
