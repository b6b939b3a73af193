use chrono::{Duration, NaiveDate};

use crate::assets::{CITIES, CITY_WEIGHTS, FIRST_NAMES, LAST_NAMES};
use crate::config::GeneratorConfig;
use crate::rfm::Segment;
use crate::sampler::Sampler;

/// One row of the customer dimension.
///
/// `segment` stays unset until RFM enrichment merges it in after sales
/// generation; everything else is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: u32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registered_on: NaiveDate,
    pub city: Option<String>,
    pub country: String,
    pub age: u32,
    pub gender: String,
    pub segment: Option<Segment>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Build the customer dimension, defect injection included.
pub fn generate(config: &GeneratorConfig, sampler: &mut Sampler) -> Vec<Customer> {
    let mut customers = Vec::with_capacity((config.customers + config.duplicate_customers) as usize);
    let max_offset = config.range_days() - 1;

    for customer_id in 1..=config.customers {
        let first_name = (*sampler.choose(FIRST_NAMES)).to_string();
        let last_name = (*sampler.choose(LAST_NAMES)).to_string();
        let gender = (*sampler.choose(&["M", "F"])).to_string();
        let age = sampler.normal_clamped(35.0, 12.0, 18.0, 70.0) as u32;

        // Exponential skew toward early registration, long tail of late joiners.
        let offset = (sampler.exponential(200.0) as i64).min(max_offset);
        let registered_on = config.start_date + Duration::days(offset);

        let email = format!(
            "{}.{}{}@email.ma",
            first_name.to_lowercase(),
            last_name.to_lowercase().replace(' ', ""),
            sampler.int_between(1, 999)
        );
        let prefix = *sampler.choose(&[6_i64, 7]);
        let phone = format!("+212{}{}", prefix, sampler.int_between(10_000_000, 99_999_999));
        let city = CITIES[sampler.weighted_choice(CITY_WEIGHTS)].to_string();

        customers.push(Customer {
            customer_id,
            code: format!("CLI{customer_id:05}"),
            first_name,
            last_name,
            email,
            phone: Some(phone),
            registered_on,
            city: Some(city),
            country: "Morocco".to_string(),
            age,
            gender,
            segment: None,
        });
    }

    inject_defects(&mut customers, config, sampler);
    customers
}

/// Intentional dirty data for downstream cleansing exercises: exact
/// duplicates appended with fresh ids, then nulled contact/city fields over
/// two disjoint subsets.
fn inject_defects(customers: &mut Vec<Customer>, config: &GeneratorConfig, sampler: &mut Sampler) {
    let base_count = customers.len();
    let duplicates = sampler.sample_indices(base_count, config.duplicate_customers as usize);
    for (offset, source) in duplicates.into_iter().enumerate() {
        let customer_id = (base_count + offset) as u32 + 1;
        let mut clone = customers[source].clone();
        clone.customer_id = customer_id;
        customers.push(clone);
    }

    let defects = sampler.sample_indices(customers.len(), config.null_defects as usize);
    let half = defects.len() / 2;
    for &index in &defects[..half] {
        customers[index].phone = None;
    }
    for &index in &defects[half..] {
        customers[index].city = None;
    }
}
