use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Input configuration for a generation run.
///
/// All other behavior (season weights, catalog contents, promotion rules,
/// RFM thresholds) is fixed internally. Defaults reproduce the reference
/// profile: seed 42, 2023-01-01..2024-12-31, 5000 customers, 300 products,
/// 50000 transactions, 100000 web sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub customers: u32,
    pub products: u32,
    pub transactions: u32,
    pub web_sessions: u32,
    /// Rows cloned verbatim with fresh ids, appended after the base
    /// population (intentional dirty data for cleansing exercises).
    pub duplicate_customers: u32,
    /// Rows with a contact or city field nulled out; split half/half over
    /// two disjoint subsets. An odd count rounds the phone subset down and
    /// gives the extra row to the city subset.
    pub null_defects: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid default start date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid default end date"),
            customers: 5000,
            products: 300,
            transactions: 50_000,
            web_sessions: 100_000,
            duplicate_customers: 50,
            null_defects: 200,
        }
    }
}

impl GeneratorConfig {
    /// Fail-fast validation; runs before any generation begins.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.end_date < self.start_date {
            return Err(GenerationError::InvalidConfig(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }
        for (name, value) in [
            ("customers", self.customers),
            ("products", self.products),
            ("transactions", self.transactions),
            ("web_sessions", self.web_sessions),
        ] {
            if value == 0 {
                return Err(GenerationError::InvalidConfig(format!(
                    "{name} target must be > 0"
                )));
            }
        }
        if self.duplicate_customers > self.customers {
            return Err(GenerationError::InvalidConfig(
                "duplicate_customers exceeds the customer target".to_string(),
            ));
        }
        if self.null_defects > self.customers + self.duplicate_customers {
            return Err(GenerationError::InvalidConfig(
                "null_defects exceeds the customer table size".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of days in the inclusive date range.
    pub fn range_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_date_range() {
        let config = GeneratorConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_targets() {
        let config = GeneratorConfig {
            transactions: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_defect_counts_larger_than_population() {
        let config = GeneratorConfig {
            customers: 10,
            duplicate_customers: 11,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
