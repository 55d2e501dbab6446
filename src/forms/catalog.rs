use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::product::{CatalogFilter, PriceRange, SortKey};
use crate::forms::sanitize_inline_text;

/// Result type returned by the catalog query helpers.
pub type CatalogFormResult<T> = Result<T, CatalogFormError>;

/// Errors that can occur while reading catalog query parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogFormError {
    /// A price bound could not be read as a dollar amount.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
}

/// Query string accepted by the catalog grid and the products API.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search entered in the search bar.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    /// Sort key (`relevance`, `price-low`, `price-high`, `rating`, `reviews`).
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort: Option<String>,
    /// Lower price bound in dollars.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<String>,
    /// Upper price bound in dollars.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<String>,
}

impl CatalogQuery {
    /// Sanitize the query into a [`CatalogFilter`]. Unknown sort keys fall back to relevance.
    pub fn into_filter(self) -> CatalogFormResult<CatalogFilter> {
        let defaults = PriceRange::default();

        let min_cents = match self.min_price.as_deref() {
            Some(value) => parse_price_cents(value)?,
            None => defaults.min_cents,
        };
        let max_cents = match self.max_price.as_deref() {
            Some(value) => parse_price_cents(value)?,
            None => defaults.max_cents,
        };

        let sort = self
            .sort
            .as_deref()
            .map(parse_sort_key)
            .unwrap_or_default();

        let search = self
            .search
            .map(|term| sanitize_inline_text(&term))
            .filter(|term| !term.is_empty());

        Ok(CatalogFilter {
            search,
            sort,
            price_range: PriceRange::new(min_cents, max_cents),
        })
    }
}

fn parse_sort_key(value: &str) -> SortKey {
    let value = value.trim();
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str() == value)
        .unwrap_or_else(|| {
            log::debug!("Unknown sort key `{value}`, using relevance");
            SortKey::Relevance
        })
}

/// Parse a dollar amount such as `12`, `12.5`, `$1,299.99` into cents.
pub fn parse_price_cents(input: &str) -> CatalogFormResult<i64> {
    let invalid = || CatalogFormError::InvalidPrice {
        value: input.trim().to_string(),
    };

    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(invalid());
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if fraction.len() > 2
        || !whole.chars().all(|ch| ch.is_ascii_digit())
        || !fraction.chars().all(|ch| ch.is_ascii_digit())
        || (whole.is_empty() && fraction.is_empty())
    {
        return Err(invalid());
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .ok()
            .and_then(|value| value.checked_mul(100))
            .ok_or_else(invalid)?
    };

    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse::<i64>().map_err(|_| invalid())?,
    };

    whole_cents.checked_add(fraction_cents).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_common_formats() {
        assert_eq!(parse_price_cents("12"), Ok(1200));
        assert_eq!(parse_price_cents("12.5"), Ok(1250));
        assert_eq!(parse_price_cents(" $1,299.99 "), Ok(129_999));
        assert_eq!(parse_price_cents(".75"), Ok(75));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        for value in ["", "abc", "-5", "1.234", "$", "1.2.3"] {
            assert!(
                matches!(
                    parse_price_cents(value),
                    Err(CatalogFormError::InvalidPrice { .. })
                ),
                "expected `{value}` to be rejected"
            );
        }
    }

    #[test]
    fn into_filter_applies_defaults() {
        let filter = CatalogQuery::default().into_filter().expect("filter");

        assert_eq!(filter, CatalogFilter::default());
    }

    #[test]
    fn into_filter_reads_all_fields() {
        let query = CatalogQuery {
            search: Some("  wireless   headphones ".to_string()),
            sort: Some("price-high".to_string()),
            min_price: Some("10".to_string()),
            max_price: Some("299.99".to_string()),
        };

        let filter = query.into_filter().expect("filter");

        assert_eq!(filter.search.as_deref(), Some("wireless headphones"));
        assert_eq!(filter.sort, SortKey::PriceHigh);
        assert_eq!(filter.price_range, PriceRange::new(1000, 29_999));
    }

    #[test]
    fn unknown_sort_falls_back_to_relevance() {
        let query = CatalogQuery {
            sort: Some("popularity".to_string()),
            ..CatalogQuery::default()
        };

        assert_eq!(query.into_filter().expect("filter").sort, SortKey::Relevance);
    }

    #[test]
    fn invalid_bound_is_reported() {
        let query = CatalogQuery {
            max_price: Some("lots".to_string()),
            ..CatalogQuery::default()
        };

        assert_eq!(
            query.into_filter(),
            Err(CatalogFormError::InvalidPrice {
                value: "lots".to_string()
            })
        );
    }
}
