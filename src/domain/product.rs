use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Upper bound of the default price filter, in cents ($10,000.00).
pub const DEFAULT_MAX_PRICE_CENTS: i64 = 1_000_000;

/// Domain representation of a catalog item linked to an affiliate retailer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Retailer identifier (Amazon standard identification number).
    pub asin: String,
    /// Human-readable title shown on the card.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Current price in cents.
    pub price_cents: i64,
    /// Price before discount, in cents, when the item is on sale.
    pub original_price_cents: Option<i64>,
    /// Advertised discount in whole percent.
    pub discount_percentage: Option<i32>,
    /// Product image location.
    pub image_url: String,
    /// Catalog category name.
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Average customer rating between 0 and 5.
    pub rating: f64,
    /// Number of customer reviews.
    pub review_count: i32,
    /// Key selling points, in display order.
    pub features: Vec<String>,
    /// Outbound retailer link carrying attribution parameters.
    pub affiliate_url: String,
    /// Whether the retailer reports the item in stock.
    pub availability: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Ordering applied to the catalog grid.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the order returned by the catalog.
    #[default]
    Relevance,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best rated first.
    Rating,
    /// Most reviewed first.
    Reviews,
}

impl SortKey {
    /// Every sort key in the order the UI lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Reviews,
    ];

    /// Wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Customer Rating",
            SortKey::Reviews => "Number of Reviews",
        }
    }
}

/// Closed price interval, in cents, used to filter the grid.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min_cents: 0,
            max_cents: DEFAULT_MAX_PRICE_CENTS,
        }
    }
}

impl PriceRange {
    /// Build a range from both bounds. An inverted range matches nothing.
    pub fn new(min_cents: i64, max_cents: i64) -> Self {
        Self {
            min_cents,
            max_cents,
        }
    }

    /// Whether `price_cents` lies inside the closed interval.
    pub fn contains(&self, price_cents: i64) -> bool {
        self.min_cents <= price_cents && price_cents <= self.max_cents
    }

    /// Whether this is the unfiltered default range.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional free-text term matched against title, description, brand and category.
    pub search: Option<String>,
    /// Words of which at least one must appear in title, description, brand or category.
    pub any_terms: Vec<String>,
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<usize>,
}

impl ProductListQuery {
    /// Construct a query over the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Keep items matching at least one of `terms`.
    pub fn any_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.any_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Filter the results by an exact category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Cap the number of returned items.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Search, ordering and price bounds requested for the catalog grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub sort: SortKey,
    pub price_range: PriceRange,
}
