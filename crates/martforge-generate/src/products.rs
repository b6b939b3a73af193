use crate::assets::{BRANDS, CATALOG};
use crate::config::GeneratorConfig;
use crate::sampler::Sampler;

/// One row of the product dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: u32,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub weight_kg: f64,
    pub is_active: bool,
}

/// Category price tiers; electronics sit far above books.
fn price_for_category(category: &str, sampler: &mut Sampler) -> f64 {
    let (lo, hi) = match category {
        "Electronics" => (500.0, 15_000.0),
        "Fashion" => (100.0, 2_000.0),
        "Home" => (50.0, 3_000.0),
        "Beauty" => (50.0, 800.0),
        "Sports" => (80.0, 1_500.0),
        _ => (50.0, 300.0),
    };
    round2(sampler.float_between(lo, hi))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the product dimension by catalog traversal, then force the row
/// count to the configured target exactly.
pub fn generate(config: &GeneratorConfig, sampler: &mut Sampler) -> Vec<Product> {
    let target = config.products as usize;
    let mut products = Vec::with_capacity(target);

    'catalog: for group in CATALOG {
        for (subcategory, items) in group.subcategories {
            for item in *items {
                let variants = sampler.int_between(1, 3);
                for variant in 0..variants {
                    let brand = *sampler.choose(BRANDS);
                    let name = if variant == 0 {
                        format!("{item} {brand}")
                    } else {
                        format!("{item} {brand} v{}", variant + 1)
                    };
                    products.push(build_product(
                        products.len() as u32 + 1,
                        name,
                        group.category,
                        subcategory,
                        brand,
                        sampler,
                    ));
                    if products.len() >= target {
                        break 'catalog;
                    }
                }
            }
        }
    }

    enforce_target_count(products, target, sampler)
}

fn build_product(
    product_id: u32,
    name: String,
    category: &str,
    subcategory: &str,
    brand: &str,
    sampler: &mut Sampler,
) -> Product {
    let unit_price = price_for_category(category, sampler);
    let unit_cost = round2(unit_price * sampler.float_between(0.6, 0.8));
    Product {
        product_id,
        sku: format!("SKU{product_id:05}"),
        name,
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        brand: brand.to_string(),
        unit_price,
        unit_cost,
        weight_kg: round2(sampler.float_between(0.1, 5.0)),
        is_active: true,
    }
}

/// Given `target` requested and however many rows the traversal produced,
/// return exactly `target` rows: pad with generic filler rows or truncate.
fn enforce_target_count(
    mut products: Vec<Product>,
    target: usize,
    sampler: &mut Sampler,
) -> Vec<Product> {
    let mut filler = 0;
    while products.len() < target {
        filler += 1;
        let group = sampler.choose(CATALOG);
        let category = group.category;
        let (subcategory, _) = *sampler.choose(group.subcategories);
        let brand = *sampler.choose(BRANDS);
        let name = format!("Generic {category} {brand} #{filler}");
        products.push(build_product(
            products.len() as u32 + 1,
            name,
            category,
            subcategory,
            brand,
            sampler,
        ));
    }
    products.truncate(target);
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_products(products: u32) -> GeneratorConfig {
        GeneratorConfig {
            products,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn small_target_truncates_the_catalog() {
        let products = generate(&config_with_products(10), &mut Sampler::new(42));
        assert_eq!(products.len(), 10);
    }

    #[test]
    fn large_target_pads_with_generic_fillers() {
        let products = generate(&config_with_products(500), &mut Sampler::new(42));
        assert_eq!(products.len(), 500);
        assert!(products.iter().any(|p| p.name.starts_with("Generic ")));
    }

    #[test]
    fn ids_are_dense_and_one_based() {
        let products = generate(&config_with_products(300), &mut Sampler::new(42));
        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.product_id, index as u32 + 1);
            assert_eq!(product.sku, format!("SKU{:05}", index + 1));
        }
    }

    #[test]
    fn cost_is_a_fraction_of_price() {
        let products = generate(&config_with_products(300), &mut Sampler::new(1));
        for product in &products {
            assert!(product.unit_cost < product.unit_price);
            let ratio = product.unit_cost / product.unit_price;
            assert!((0.59..=0.81).contains(&ratio), "ratio {ratio}");
        }
    }

    #[test]
    fn category_tiers_bound_prices() {
        let products = generate(&config_with_products(300), &mut Sampler::new(9));
        for product in products.iter().filter(|p| p.category == "Books") {
            assert!(product.unit_price <= 300.0);
        }
        for product in products.iter().filter(|p| p.category == "Electronics") {
            assert!(product.unit_price >= 500.0);
        }
    }
}
