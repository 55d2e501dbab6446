use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub asin: String,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    pub discount_percentage: Option<i32>,
    pub image_url: String,
    pub category: String,
    pub brand: String,
    pub rating: f64,
    pub review_count: i32,
    /// Newline separated list of selling points.
    pub features: Option<String>,
    pub affiliate_url: String,
    pub availability: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn split_features(features: Option<String>) -> Vec<String> {
    features
        .map(|value| {
            value
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            asin: value.asin,
            title: value.title,
            description: value.description,
            price_cents: value.price_cents,
            original_price_cents: value.original_price_cents,
            discount_percentage: value.discount_percentage,
            image_url: value.image_url,
            category: value.category,
            brand: value.brand,
            rating: value.rating,
            review_count: value.review_count,
            features: split_features(value.features),
            affiliate_url: value.affiliate_url,
            availability: value.availability,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
