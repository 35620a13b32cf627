use crate::entities::Resource;
use sea_orm::Order;
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

/// Listing options shared by every paginated endpoint.
///
/// `sortBy` takes one or more `field:asc|desc` criteria separated by commas.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
}

impl QueryOptions {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const DEFAULT_PAGE: u64 = 1;

    pub fn new(sort_by: Option<&str>, limit: Option<u64>, page: Option<u64>) -> Self {
        Self {
            sort_by: sort_by.map(str::to_string),
            limit,
            page,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .filter(|limit| *limit > 0)
            .unwrap_or(Self::DEFAULT_LIMIT)
    }

    pub fn page(&self) -> u64 {
        self.page
            .filter(|page| *page > 0)
            .unwrap_or(Self::DEFAULT_PAGE)
    }

    /// Resolves `sortBy` against the entity's sortable columns.
    ///
    /// Unknown fields are skipped. When nothing usable remains the entity's
    /// default column is sorted ascending.
    pub fn sort_orders<E: Resource>(&self) -> Vec<(E::Column, Order)> {
        let mut orders: Vec<(E::Column, Order)> = self
            .sort_by
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|criterion| {
                        let mut parts = criterion.trim().splitn(2, ':');
                        let column = E::sort_column(parts.next()?.trim())?;
                        let order = match parts.next().map(str::trim) {
                            Some(direction) if direction.eq_ignore_ascii_case("desc") => {
                                Order::Desc
                            }
                            _ => Order::Asc,
                        };
                        Some((column, order))
                    })
                    .collect()
            })
            .unwrap_or_default();

        if orders.is_empty() {
            orders.push((E::default_sort(), Order::Asc));
        }
        orders
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub results: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

impl<T> PageResult<T> {
    pub fn new(results: Vec<T>, page: u64, limit: u64, total_results: u64) -> Self {
        Self {
            results,
            page,
            limit,
            total_pages: total_results.div_ceil(limit.max(1)),
            total_results,
        }
    }

    /// Replaces the records while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PathId {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}
