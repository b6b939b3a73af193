use chrono::{Datelike, NaiveDate};

use crate::assets::{self, CITIES};
use crate::calendar::Season;
use crate::config::GeneratorConfig;
use crate::sampler::Sampler;

/// Sales channel reference rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub channel_id: u32,
    pub name: &'static str,
    pub kind: &'static str,
}

pub const WEB: u32 = 1;
pub const MOBILE: u32 = 2;
pub const STORE: u32 = 3;

pub fn channels() -> Vec<Channel> {
    vec![
        Channel { channel_id: WEB, name: "Web", kind: "Online" },
        Channel { channel_id: MOBILE, name: "Mobile", kind: "Online" },
        Channel { channel_id: STORE, name: "Store", kind: "Offline" },
    ]
}

/// Promotion reference rows. The designated no-promotion row carries null
/// code and discount kind and a zero rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub promotion_id: u32,
    pub code: Option<&'static str>,
    pub campaign: &'static str,
    pub discount_kind: Option<&'static str>,
    pub discount_pct: f64,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

pub const WELCOME: u32 = 1;
pub const BLACK_FRIDAY: u32 = 2;
pub const SEASONAL: u32 = 3;
pub const RAMADAN: u32 = 4;
pub const NO_PROMOTION: u32 = 5;

pub fn promotions(config: &GeneratorConfig) -> Vec<Promotion> {
    let year = config.end_date.year();
    vec![
        Promotion {
            promotion_id: WELCOME,
            code: Some("WELCOME10"),
            campaign: "New customer welcome",
            discount_kind: Some("Percentage"),
            discount_pct: 10.0,
            starts_on: Some(config.start_date),
            ends_on: Some(config.end_date),
        },
        Promotion {
            promotion_id: BLACK_FRIDAY,
            code: Some("BLACKFRIDAY"),
            campaign: "Black Friday",
            discount_kind: Some("Percentage"),
            discount_pct: 30.0,
            starts_on: NaiveDate::from_ymd_opt(year, 11, 1),
            ends_on: NaiveDate::from_ymd_opt(year, 11, 30),
        },
        Promotion {
            promotion_id: SEASONAL,
            code: Some("SALE50"),
            campaign: "Seasonal sale",
            discount_kind: Some("Percentage"),
            discount_pct: 50.0,
            starts_on: NaiveDate::from_ymd_opt(year, 7, 1),
            ends_on: NaiveDate::from_ymd_opt(year, 8, 31),
        },
        Promotion {
            promotion_id: RAMADAN,
            code: Some("RAMADAN20"),
            campaign: "Ramadan promo",
            discount_kind: Some("Percentage"),
            discount_pct: 20.0,
            starts_on: NaiveDate::from_ymd_opt(year, 3, 1),
            ends_on: NaiveDate::from_ymd_opt(year, 4, 30),
        },
        Promotion {
            promotion_id: NO_PROMOTION,
            code: None,
            campaign: "No promotion",
            discount_kind: None,
            discount_pct: 0.0,
            starts_on: None,
            ends_on: None,
        },
    ]
}

/// Season -> promotion precedence as data: the scan order is the rule order.
#[derive(Debug, Clone, Copy)]
pub struct PromoRule {
    pub season: Season,
    pub promotion_id: u32,
}

pub const PROMO_RULES: &[PromoRule] = &[
    PromoRule { season: Season::BlackFriday, promotion_id: BLACK_FRIDAY },
    PromoRule { season: Season::WinterSale, promotion_id: SEASONAL },
    PromoRule { season: Season::SummerSale, promotion_id: SEASONAL },
    PromoRule { season: Season::Ramadan, promotion_id: RAMADAN },
];

/// Resolve the active promotion for a day's season. Seasonal days map
/// deterministically through [`PROMO_RULES`]; normal days get a small chance
/// of the welcome promotion, else none.
pub fn promotion_for_season(season: Season, sampler: &mut Sampler) -> u32 {
    for rule in PROMO_RULES {
        if rule.season == season {
            return rule.promotion_id;
        }
    }
    if sampler.chance(0.1) { WELCOME } else { NO_PROMOTION }
}

/// Shipping carrier reference rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Carrier {
    pub carrier_id: u32,
    pub name: &'static str,
    pub service_level: &'static str,
    pub promised_days: u32,
}

pub fn carriers() -> Vec<Carrier> {
    vec![
        Carrier { carrier_id: 1, name: "Amana", service_level: "Standard", promised_days: 3 },
        Carrier { carrier_id: 2, name: "CTM", service_level: "Express", promised_days: 1 },
        Carrier { carrier_id: 3, name: "Chrono Express", service_level: "Standard", promised_days: 2 },
    ]
}

/// City-to-region geography reference rows, one per city in the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Geography {
    pub geo_id: u32,
    pub city: &'static str,
    pub region: &'static str,
}

pub fn geography() -> Vec<Geography> {
    CITIES
        .iter()
        .enumerate()
        .map(|(index, &city)| Geography {
            geo_id: index as u32 + 1,
            city,
            region: assets::region_for_city(city),
        })
        .collect()
}

/// Return reason reference rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReason {
    pub reason_id: u32,
    pub reason: &'static str,
    pub category: &'static str,
}

pub fn return_reasons() -> Vec<ReturnReason> {
    vec![
        ReturnReason { reason_id: 1, reason: "Defective product", category: "Quality" },
        ReturnReason { reason_id: 2, reason: "Wrong size", category: "Mistake" },
        ReturnReason { reason_id: 3, reason: "Different color", category: "Mistake" },
        ReturnReason { reason_id: 4, reason: "Changed mind", category: "Customer" },
        ReturnReason { reason_id: 5, reason: "Late delivery", category: "Logistics" },
        ReturnReason { reason_id: 6, reason: "Damaged in transit", category: "Logistics" },
        ReturnReason { reason_id: 7, reason: "Other", category: "Other" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_promotion_row_has_null_discount_fields() {
        let promotions = promotions(&GeneratorConfig::default());
        let none = promotions
            .iter()
            .find(|p| p.promotion_id == NO_PROMOTION)
            .unwrap();
        assert!(none.code.is_none());
        assert!(none.discount_kind.is_none());
        assert_eq!(none.discount_pct, 0.0);
        assert!(none.starts_on.is_none());
    }

    #[test]
    fn seasonal_days_resolve_deterministically() {
        let mut sampler = Sampler::new(42);
        for _ in 0..50 {
            assert_eq!(
                promotion_for_season(Season::BlackFriday, &mut sampler),
                BLACK_FRIDAY
            );
            assert_eq!(promotion_for_season(Season::WinterSale, &mut sampler), SEASONAL);
            assert_eq!(promotion_for_season(Season::SummerSale, &mut sampler), SEASONAL);
            assert_eq!(promotion_for_season(Season::Ramadan, &mut sampler), RAMADAN);
        }
    }

    #[test]
    fn geography_covers_the_whole_city_pool() {
        let rows = geography();
        assert_eq!(rows.len(), CITIES.len());
        for row in &rows {
            assert_ne!(row.region, "Other", "{}", row.city);
        }
        let casablanca = rows.iter().find(|r| r.city == "Casablanca").unwrap();
        assert_eq!(casablanca.region, "Casablanca-Settat");
    }

    #[test]
    fn normal_days_only_see_welcome_or_none() {
        let mut sampler = Sampler::new(42);
        for _ in 0..500 {
            let promo = promotion_for_season(Season::Normal, &mut sampler);
            assert!(promo == WELCOME || promo == NO_PROMOTION);
        }
    }
}
