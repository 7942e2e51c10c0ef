//! Query parameters, pagination and the query executor
//!
//! List and count share one compiled [`ShipFilter`], so a count always
//! equals the size of the unpaginated list for the same parameters.
//!
//! # Example
//! ```text
//! GET /rest/ships                                  -> page 0, 3 ships, by id
//! GET /rest/ships?pageNumber=2&pageSize=10         -> ships 20..30
//! GET /rest/ships?minSpeed=0.5&order=RATING        -> ascending rating
//! GET /rest/ships/count?minSpeed=0.5               -> number of matches
//! ```

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::error::{FleetResult, RequestError};
use crate::core::field::ShipField;
use crate::core::filter::{ParamMap, ShipFilter};
use crate::core::ship::Ship;
use crate::core::store::ShipStore;

/// Page size used when the request does not set one
pub const DEFAULT_PAGE_SIZE: usize = 3;

pub const PAGE_NUMBER_PARAM: &str = "pageNumber";
pub const PAGE_SIZE_PARAM: &str = "pageSize";
pub const ORDER_PARAM: &str = "order";

/// Zero-based page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// First page with the given size
    pub fn first(size: usize) -> Self {
        Self::new(0, size)
    }

    /// Number of matching records skipped before this page
    pub fn offset(&self) -> usize {
        self.number.saturating_mul(self.size)
    }

    /// Read `pageNumber` / `pageSize`, falling back to page 0 and `default_size`
    pub fn from_params(params: &ParamMap, default_size: usize) -> FleetResult<Self> {
        let number = match params.get(PAGE_NUMBER_PARAM) {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                RequestError::invalid_parameter(
                    PAGE_NUMBER_PARAM,
                    raw,
                    "expected a non-negative integer",
                )
            })?,
            None => 0,
        };
        let size = match params.get(PAGE_SIZE_PARAM) {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| *size >= 1)
                .ok_or_else(|| {
                    RequestError::invalid_parameter(
                        PAGE_SIZE_PARAM,
                        raw,
                        "expected a positive integer",
                    )
                })?,
            None => default_size,
        };
        Ok(Self::new(number, size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Sort key of a listing; always ascending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    pub fn field(&self) -> ShipField {
        match self {
            ShipOrder::Id => ShipField::Id,
            ShipOrder::Speed => ShipField::Speed,
            ShipOrder::Date => ShipField::ProdDate,
            ShipOrder::Rating => ShipField::Rating,
        }
    }

    /// Compare two ships by this key, breaking ties by id
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        let field = self.field();
        a.field_value(field)
            .compare(&b.field_value(field))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Sort ships in place by this key
    pub fn sort(&self, ships: &mut [Ship]) {
        ships.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for ShipOrder {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ID" => Ok(ShipOrder::Id),
            "SPEED" => Ok(ShipOrder::Speed),
            "DATE" => Ok(ShipOrder::Date),
            "RATING" => Ok(ShipOrder::Rating),
            other => Err(RequestError::invalid_parameter(
                ORDER_PARAM,
                other,
                "expected one of ID, SPEED, DATE, RATING",
            )),
        }
    }
}

/// A fully parsed listing request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipQuery {
    pub filter: ShipFilter,
    pub order: ShipOrder,
    pub page: PageRequest,
}

impl ShipQuery {
    /// Parse filter, ordering and paging parameters
    pub fn from_params(params: &ParamMap, default_page_size: usize) -> FleetResult<Self> {
        let filter = ShipFilter::compile(params)?;
        let order = match params.get(ORDER_PARAM) {
            Some(raw) => raw.parse::<ShipOrder>()?,
            None => ShipOrder::default(),
        };
        let page = PageRequest::from_params(params, default_page_size)?;
        Ok(Self {
            filter,
            order,
            page,
        })
    }
}

/// Runs compiled queries against a [`ShipStore`]
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn ShipStore>,
    default_page_size: usize,
}

impl QueryExecutor {
    pub fn new(store: Arc<dyn ShipStore>, default_page_size: usize) -> Self {
        Self {
            store,
            default_page_size: default_page_size.max(1),
        }
    }

    /// List mode: one ordered page of matching ships
    pub async fn list(&self, params: &ParamMap) -> FleetResult<Vec<Ship>> {
        let query = ShipQuery::from_params(params, self.default_page_size)?;
        self.execute(&query).await
    }

    /// Run an already parsed query
    pub async fn execute(&self, query: &ShipQuery) -> FleetResult<Vec<Ship>> {
        tracing::debug!(
            predicates = query.filter.predicates().len(),
            order = ?query.order,
            page = query.page.number,
            size = query.page.size,
            "listing ships"
        );
        let ships = self
            .store
            .find(&query.filter, query.order, query.page)
            .await?;
        Ok(ships)
    }

    /// Count mode: total number of matching ships, paging ignored
    pub async fn count(&self, params: &ParamMap) -> FleetResult<usize> {
        let filter = ShipFilter::compile(params)?;
        tracing::debug!(predicates = filter.predicates().len(), "counting ships");
        Ok(self.store.count(&filter).await?)
    }
}
