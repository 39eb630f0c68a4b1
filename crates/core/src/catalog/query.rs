//! Stateless listing queries over a product slice. None of these mutate the
//! catalog; they return borrowed views or owned summaries.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Category, Product};
use crate::errors::DomainError;

pub const LOW_STOCK_THRESHOLD: u32 = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Stock,
    Category,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "stock" => Ok(Self::Stock),
            "category" => Ok(Self::Category),
            other => Err(DomainError::InvalidFilter(format!(
                "unsupported sort key `{other}` (expected name|price|stock|category)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    pub total_stock: u64,
    pub average_price: Decimal,
    pub low_stock_count: usize,
}

pub fn by_category(products: &[Product], category: Category) -> Vec<&Product> {
    products.iter().filter(|product| product.category == category).collect()
}

pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.category.as_str().contains(&needle)
        })
        .collect()
}

pub fn sort<'a>(
    mut products: Vec<&'a Product>,
    key: SortKey,
    order: SortOrder,
) -> Vec<&'a Product> {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    products
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Stock => a.stock.cmp(&b.stock),
        SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
    }
}

/// Inclusive on both ends.
pub fn by_price_range(products: &[Product], min: Decimal, max: Decimal) -> Vec<&Product> {
    products.iter().filter(|product| product.price >= min && product.price <= max).collect()
}

pub fn low_stock(products: &[Product], threshold: u32) -> Vec<&Product> {
    products.iter().filter(|product| product.stock <= threshold).collect()
}

/// Well-stocked, affordable products, best stocked first.
pub fn featured(products: &[Product], count: usize) -> Vec<&Product> {
    let affordable = Decimal::from(500);
    let mut featured: Vec<&Product> = products
        .iter()
        .filter(|product| product.stock > 20 && product.price < affordable)
        .collect();
    featured.sort_by(|a, b| b.stock.cmp(&a.stock));
    featured.truncate(count);
    featured
}

pub fn category_stats(products: &[Product]) -> BTreeMap<Category, CategoryStats> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let members = by_category(products, category);
            let count = members.len();
            let price_sum: Decimal = members.iter().map(|product| product.price).sum();
            let average_price = if count == 0 {
                Decimal::ZERO
            } else {
                (price_sum / Decimal::from(count)).round_dp(2)
            };
            let stats = CategoryStats {
                count,
                total_stock: members.iter().map(|product| u64::from(product.stock)).sum(),
                average_price,
                low_stock_count: members
                    .iter()
                    .filter(|product| product.stock <= LOW_STOCK_THRESHOLD)
                    .count(),
            };
            (category, stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{
        by_category, by_price_range, category_stats, featured, low_stock, search, sort, SortKey,
        SortOrder, LOW_STOCK_THRESHOLD,
    };
    use crate::catalog::seed::seed_products;
    use crate::domain::product::{Category, ProductId};

    #[test]
    fn category_filter_keeps_only_matching_products() {
        let products = seed_products();
        let herbs = by_category(&products, Category::Herbs);

        assert_eq!(herbs.len(), 10);
        assert!(herbs.iter().all(|product| product.category == Category::Herbs));
    }

    #[test]
    fn search_matches_name_or_category_case_insensitively() {
        let products = seed_products();

        let apples = search(&products, "APPLE");
        let names: Vec<&str> = apples.iter().map(|product| product.name.as_str()).collect();
        assert_eq!(names, vec!["Red Apples", "Green Apples", "Pineapple", "Custard Apple"]);

        assert_eq!(search(&products, "exotic").len(), 10);
    }

    #[test]
    fn sort_by_price_descending_puts_most_expensive_first() {
        let products = seed_products();
        let sorted = sort(products.iter().collect(), SortKey::Price, SortOrder::Desc);

        assert_eq!(sorted[0].id, ProductId(80));
        assert!(sorted.windows(2).all(|pair| pair[0].price >= pair[1].price));
    }

    #[test]
    fn price_range_is_inclusive() {
        let products = seed_products();
        let in_range = by_price_range(&products, Decimal::from(79), Decimal::from(79));

        let ids: Vec<u32> = in_range.iter().map(|product| product.id.0).collect();
        assert_eq!(ids, vec![3, 18]);
    }

    #[test]
    fn low_stock_uses_inclusive_threshold() {
        let products = seed_products();
        let low = low_stock(&products, LOW_STOCK_THRESHOLD);

        assert!(low.iter().all(|product| product.stock <= LOW_STOCK_THRESHOLD));
        assert!(low.iter().any(|product| product.id == ProductId(9)));
    }

    #[test]
    fn featured_prefers_high_stock_and_truncates() {
        let products = seed_products();
        let picks = featured(&products, 3);

        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].name, "Bananas");
        assert!(picks.iter().all(|product| product.price < Decimal::from(500)));
    }

    #[test]
    fn category_stats_cover_every_category() {
        let products = seed_products();
        let stats = category_stats(&products);

        assert_eq!(stats.len(), 4);
        let exotic = &stats[&Category::Exotic];
        assert_eq!(exotic.count, 10);
        assert_eq!(exotic.total_stock, 137);
        assert_eq!(exotic.average_price, Decimal::from(666));
        assert_eq!(exotic.low_stock_count, 8);
    }
}
