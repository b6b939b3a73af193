use std::time::Instant;

use tracing::info;

use crate::calendar::Calendar;
use crate::config::GeneratorConfig;
use crate::customers;
use crate::dataset::Dataset;
use crate::errors::GenerationError;
use crate::inventory;
use crate::products;
use crate::reference;
use crate::returns;
use crate::rfm;
use crate::sales;
use crate::sampler::Sampler;
use crate::sessions;
use crate::targets;

/// Entry point for a generation run.
///
/// The pipeline is single-threaded and strictly sequential: every stage reads
/// only finished tables from earlier stages, and the whole model is rebuilt
/// from the seed on each run. The sampler is created once here and never
/// reseeded, so a fixed seed reproduces the dataset byte-for-byte.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GeneratorConfig,
}

impl Engine {
    /// Validates the configuration fail-fast; no generation happens on error.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn run(&self) -> Result<Dataset, GenerationError> {
        let start = Instant::now();
        let config = &self.config;
        let mut sampler = Sampler::new(config.seed);

        info!(
            seed = config.seed,
            start_date = %config.start_date,
            end_date = %config.end_date,
            customers = config.customers,
            products = config.products,
            transactions = config.transactions,
            web_sessions = config.web_sessions,
            "generation started"
        );

        let stage = Instant::now();
        let calendar = Calendar::build(config.start_date, config.end_date);
        info!(rows = calendar.len(), duration_ms = ms(stage), "dim_date built");

        let stage = Instant::now();
        let base_customers = customers::generate(config, &mut sampler);
        info!(rows = base_customers.len(), duration_ms = ms(stage), "dim_customer built");

        let stage = Instant::now();
        let products = products::generate(config, &mut sampler);
        info!(rows = products.len(), duration_ms = ms(stage), "dim_product built");

        let channels = reference::channels();
        let promotions = reference::promotions(config);
        let carriers = reference::carriers();
        let return_reasons = reference::return_reasons();
        let geography = reference::geography();
        info!("reference dimensions built");

        let stage = Instant::now();
        let sales = sales::generate(config, &calendar, &products, &promotions, &mut sampler);
        info!(rows = sales.len(), duration_ms = ms(stage), "fact_sales built");

        let stage = Instant::now();
        let segments = rfm::segment_customers(&sales);
        let customers = rfm::apply_segments(base_customers, &segments);
        info!(
            segmented = segments.len(),
            duration_ms = ms(stage),
            "rfm enrichment applied"
        );

        let stage = Instant::now();
        let returns = returns::generate(&sales, &calendar, return_reasons.len() as u32, &mut sampler);
        info!(rows = returns.len(), duration_ms = ms(stage), "fact_returns built");

        let stage = Instant::now();
        let sessions = sessions::generate(config, &calendar, &mut sampler);
        info!(rows = sessions.len(), duration_ms = ms(stage), "fact_web_sessions built");

        let stage = Instant::now();
        let inventory = inventory::generate(&calendar, &products, &mut sampler);
        info!(rows = inventory.len(), duration_ms = ms(stage), "fact_inventory built");

        let stage = Instant::now();
        let monthly_targets = targets::generate(config, &mut sampler);
        info!(
            rows = monthly_targets.len(),
            duration_ms = ms(stage),
            "fact_monthly_targets built"
        );

        info!(
            duration_ms = ms(start),
            calendar_days = calendar.len(),
            customers = customers.len(),
            sales = sales.len(),
            "generation completed"
        );

        Ok(Dataset {
            calendar,
            customers,
            products,
            channels,
            promotions,
            carriers,
            return_reasons,
            geography,
            sales,
            returns,
            sessions,
            inventory,
            targets: monthly_targets,
        })
    }
}

fn ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}
