use chrono::Datelike;

use crate::config::GeneratorConfig;
use crate::sampler::Sampler;

/// Year-over-year growth applied to the revenue target.
const REVENUE_GROWTH: f64 = 1.15;

/// One monthly planning row: a revenue target and a marketing budget.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTarget {
    pub target_id: u32,
    pub year: i32,
    pub month: u32,
    pub revenue_target: i64,
    pub marketing_budget: i64,
}

/// Build one row per (year, month) of the date range. The first year's
/// targets are drawn uniformly; every following year scales the revenue
/// target by 15% and keeps the marketing budget of the year before.
pub fn generate(config: &GeneratorConfig, sampler: &mut Sampler) -> Vec<MonthlyTarget> {
    let first_year = config.start_date.year();
    let last_year = config.end_date.year();

    let mut targets: Vec<MonthlyTarget> = Vec::new();
    let mut target_id = 1;
    for year in first_year..=last_year {
        for month in 1..=12 {
            let (revenue_target, marketing_budget) = if year == first_year {
                (
                    sampler.int_between(800_000, 1_500_000),
                    sampler.int_between(50_000, 100_000),
                )
            } else {
                let previous = &targets[targets.len() - 12];
                (
                    (previous.revenue_target as f64 * REVENUE_GROWTH) as i64,
                    previous.marketing_budget,
                )
            };
            targets.push(MonthlyTarget {
                target_id,
                year,
                month,
                revenue_target,
                marketing_budget,
            });
            target_id += 1;
        }
    }
    targets
}
