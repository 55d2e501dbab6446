use diesel::expression::BoxableExpression;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::product::{Product as DomainProduct, ProductListQuery},
    models::product::Product as DbProduct,
    repository::{DieselRepository, ProductReader},
    schema::products,
};

type ProductPredicate = Box<dyn BoxableExpression<products::table, Sqlite, SqlType = Nullable<Bool>>>;

/// `term` appears in the title, description, brand or category.
fn mentions(term: &str) -> ProductPredicate {
    let pattern = format!("%{term}%");
    Box::new(
        products::title
            .like(pattern.clone())
            .or(products::description.like(pattern.clone()))
            .or(products::brand.like(pattern.clone()))
            .or(products::category.like(pattern))
            .nullable(),
    )
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<Sqlite>();

        if let Some(term) = query.search.as_ref().map(|term| term.trim()) {
            if !term.is_empty() {
                items = items.filter(mentions(term));
            }
        }

        let any_term = query
            .any_terms
            .iter()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .map(mentions)
            .reduce(|matched, next| -> ProductPredicate { Box::new(matched.or(next)) });
        if let Some(predicate) = any_term {
            items = items.filter(predicate);
        }

        if let Some(category) = query.category.as_ref() {
            items = items.filter(products::category.eq(category));
        }

        // Catalog order is the "relevance" order of the grid.
        items = items.order(products::id.asc());

        if let Some(limit) = query.limit {
            items = items.limit(limit as i64);
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok(db_products.into_iter().map(Into::into).collect())
    }
}
