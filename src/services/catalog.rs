use serde::Serialize;

use crate::domain::product::{CatalogFilter, PriceRange, Product, ProductListQuery, SortKey};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Tags used when no rule-based reason applies.
const FALLBACK_REASONS: [&str; 6] = [
    "Popular Choice",
    "Great Value",
    "Trending Now",
    "Best Seller",
    "Top Rated",
    "Perfect Match",
];

/// Product enriched with the strings a catalog card displays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub price_display: String,
    pub original_price_display: Option<String>,
    pub review_count_display: String,
    pub reason: &'static str,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        Self {
            price_display: format_price(product.price_cents),
            original_price_display: product.original_price_cents.map(format_price),
            review_count_display: group_thousands(i64::from(product.review_count)),
            reason: personalized_reason(&product),
            product,
        }
    }
}

/// Option of the sort selector.
#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Data required to render the catalog template.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageData {
    pub heading: String,
    pub search: Option<String>,
    pub sort: SortKey,
    pub sort_options: Vec<SortOption>,
    pub price_range: PriceRange,
    /// Bounds echoed back into the filter inputs, in dollars.
    pub min_price: String,
    pub max_price: String,
    /// Whether anything differs from the unfiltered grid.
    pub filtered: bool,
    pub products: Vec<ProductCard>,
}

/// Sort `products` by `sort` (stable) and keep those priced inside `range`.
pub fn arrange(mut products: Vec<Product>, sort: SortKey, range: PriceRange) -> Vec<Product> {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceLow => products.sort_by_key(|product| product.price_cents),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }

    products.retain(|product| range.contains(product.price_cents));
    products
}

/// Short tag explaining why a product is recommended.
pub fn personalized_reason(product: &Product) -> &'static str {
    if product.rating >= 4.5 {
        return "Top Rated";
    }
    if product.discount_percentage.is_some_and(|discount| discount > 30) {
        return "Great Value";
    }
    if product.review_count > 1000 {
        return "Popular Choice";
    }
    let index = product.id.unsigned_abs() as usize % FALLBACK_REASONS.len();
    FALLBACK_REASONS[index]
}

/// Render cents as US dollars, e.g. `$1,234.56`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = group_thousands((cents / 100) as i64);
    format!("{sign}${dollars}.{:02}", cents % 100)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

fn cents_to_input(cents: i64) -> String {
    if cents % 100 == 0 {
        (cents / 100).to_string()
    } else {
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

/// Fetch the catalog, narrow it by the search term and arrange it for display.
pub fn load_catalog_page<R>(repo: &R, filter: CatalogFilter) -> ServiceResult<CatalogPageData>
where
    R: ProductReader + ?Sized,
{
    let CatalogFilter {
        search,
        sort,
        price_range,
    } = filter;

    let cards = list_catalog(repo, search.as_deref(), sort, price_range)?;

    let heading = match search.as_deref() {
        Some(term) => format!("Results for \"{term}\""),
        None => "Recommended Products".to_string(),
    };

    let sort_options = SortKey::ALL
        .into_iter()
        .map(|key| SortOption {
            value: key.as_str(),
            label: key.label(),
            selected: key == sort,
        })
        .collect();

    let filtered = search.is_some() || sort != SortKey::default() || !price_range.is_default();

    Ok(CatalogPageData {
        heading,
        search,
        sort,
        sort_options,
        price_range,
        min_price: cents_to_input(price_range.min_cents),
        max_price: cents_to_input(price_range.max_cents),
        filtered,
        products: cards,
    })
}

/// Catalog cards matching the search term, sorted and price filtered.
pub fn list_catalog<R>(
    repo: &R,
    search: Option<&str>,
    sort: SortKey,
    price_range: PriceRange,
) -> ServiceResult<Vec<ProductCard>>
where
    R: ProductReader + ?Sized,
{
    let mut query = ProductListQuery::new();
    if let Some(term) = search {
        query = query.search(term);
    }

    let products = repo.list_products(query).map_err(ServiceError::from)?;

    Ok(arrange(products, sort, price_range)
        .into_iter()
        .map(ProductCard::from)
        .collect())
}
