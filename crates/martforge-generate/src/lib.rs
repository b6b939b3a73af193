//! Star-schema dataset generation engine for Martforge.
//!
//! Builds a referentially-consistent e-commerce dataset (dimensions + facts)
//! from a seed and a handful of target counts. The pipeline is strictly
//! sequential: calendar, customers, products and the reference dimensions are
//! finished before any fact table reads them, RFM enrichment runs only after
//! sales, and every table is immutable once produced.

pub mod assets;
pub mod calendar;
pub mod config;
pub mod customers;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod inventory;
pub mod products;
pub mod reference;
pub mod returns;
pub mod rfm;
pub mod sales;
pub mod sampler;
pub mod sessions;
pub mod targets;

pub use config::GeneratorConfig;
pub use dataset::Dataset;
pub use engine::Engine;
pub use errors::GenerationError;
pub use sampler::Sampler;
