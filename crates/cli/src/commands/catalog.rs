use std::fmt::Display;

use rust_decimal::Decimal;
use storefront_core::catalog::query::{self, SortKey, SortOrder, LOW_STOCK_THRESHOLD};
use storefront_core::{Category, Product, ProductCatalog};

use crate::commands::{open_storefront, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct CatalogArgs {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub low_stock: bool,
    pub featured: Option<usize>,
    pub stats: bool,
    pub limit: Option<usize>,
}

pub fn run(args: CatalogArgs) -> CommandResult {
    let storefront = match open_storefront("catalog") {
        Ok(storefront) => storefront,
        Err(failure) => return failure,
    };
    let products = storefront.catalog().products();

    if args.stats {
        let stats = query::category_stats(products);
        return CommandResult::success_with_data(
            "catalog",
            format!("statistics for {} categories", stats.len()),
            &stats,
        );
    }

    if let Some(count) = args.featured {
        let featured = query::featured(products, count);
        return CommandResult::success_with_data(
            "catalog",
            format!("{} featured products", featured.len()),
            &featured,
        );
    }

    let listing = match filter(products, &args) {
        Ok(listing) => listing,
        Err(failure) => return failure,
    };

    CommandResult::success_with_data("catalog", format!("{} products", listing.len()), &listing)
}

fn filter<'a>(products: &'a [Product], args: &CatalogArgs) -> Result<Vec<&'a Product>, CommandResult> {
    let mut listing: Vec<&Product> = match args.search.as_deref() {
        Some(needle) => query::search(products, needle),
        None => products.iter().collect(),
    };

    if let Some(category) = args.category.as_deref() {
        let category =
            category.parse::<Category>().map_err(|error| invalid_argument("category", error))?;
        listing.retain(|product| product.category == category);
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let min = parse_price("min-price", args.min_price.as_deref())?.unwrap_or(Decimal::ZERO);
        let max = parse_price("max-price", args.max_price.as_deref())?.unwrap_or(Decimal::MAX);
        listing.retain(|product| product.price >= min && product.price <= max);
    }

    if args.low_stock {
        listing.retain(|product| product.stock <= LOW_STOCK_THRESHOLD);
    }

    if let Some(sort) = args.sort.as_deref() {
        let key = sort.parse::<SortKey>().map_err(|error| invalid_argument("sort", error))?;
        let order = if args.descending { SortOrder::Desc } else { SortOrder::Asc };
        listing = query::sort(listing, key, order);
    }

    if let Some(limit) = args.limit {
        listing.truncate(limit);
    }

    Ok(listing)
}

fn parse_price(flag: &str, value: Option<&str>) -> Result<Option<Decimal>, CommandResult> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<Decimal>()
                .map_err(|error| invalid_argument(flag, format!("`{raw}`: {error}")))
        })
        .transpose()
}

fn invalid_argument(flag: &str, detail: impl Display) -> CommandResult {
    CommandResult::failure("catalog", "invalid_argument", format!("--{flag} {detail}"), 2)
}
