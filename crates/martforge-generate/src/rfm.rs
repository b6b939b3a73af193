//! RFM enrichment: a pure aggregation over the finished sales table that
//! produces a customer-keyed segment mapping, merged functionally into a new
//! customer table. Runs after sales generation and before any export.

use std::collections::BTreeMap;

use crate::customers::Customer;
use crate::sales::Sale;

/// Loyalty segment assigned by purchase behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Gold,
    Silver,
    Bronze,
    New,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Gold => "Gold",
            Segment::Silver => "Silver",
            Segment::Bronze => "Bronze",
            Segment::New => "New",
        }
    }
}

/// Ordered threshold rules; the scan order is the precedence.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRule {
    pub min_purchases: u64,
    pub min_spend: f64,
    pub segment: Segment,
}

pub const SEGMENT_RULES: &[SegmentRule] = &[
    SegmentRule { min_purchases: 8, min_spend: 5000.0, segment: Segment::Gold },
    SegmentRule { min_purchases: 4, min_spend: 0.0, segment: Segment::Silver },
    SegmentRule { min_purchases: 1, min_spend: 0.0, segment: Segment::Bronze },
];

/// Pure function of (purchase count, total tax-inclusive spend).
pub fn classify(purchases: u64, spend: f64) -> Segment {
    for rule in SEGMENT_RULES {
        if purchases >= rule.min_purchases && spend >= rule.min_spend {
            return rule.segment;
        }
    }
    Segment::New
}

/// Aggregate purchase count and spend per customer and classify.
pub fn segment_customers(sales: &[Sale]) -> BTreeMap<u32, Segment> {
    let mut totals: BTreeMap<u32, (u64, f64)> = BTreeMap::new();
    for sale in sales {
        let entry = totals.entry(sale.customer_id).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += sale.total_amount;
    }
    totals
        .into_iter()
        .map(|(customer_id, (purchases, spend))| (customer_id, classify(purchases, spend)))
        .collect()
}

/// Merge the segment mapping into a fresh customer table; customers with no
/// sales default to `New`.
pub fn apply_segments(
    customers: Vec<Customer>,
    segments: &BTreeMap<u32, Segment>,
) -> Vec<Customer> {
    customers
        .into_iter()
        .map(|mut customer| {
            customer.segment = Some(
                segments
                    .get(&customer.customer_id)
                    .copied()
                    .unwrap_or(Segment::New),
            );
            customer
        })
        .collect()
}
