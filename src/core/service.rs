//! Record service orchestrating validation, rating and queries

use std::sync::Arc;

use crate::core::error::{FleetResult, RequestError, ShipError, ValidationError};
use crate::core::filter::ParamMap;
use crate::core::query::QueryExecutor;
use crate::core::ship::{Ship, ShipDraft};
use crate::core::store::ShipStore;
use crate::core::validation::{self, CheckedShip};

/// The six record operations over a [`ShipStore`]
///
/// Every failure is returned before the store is written, so a rejected
/// create or update leaves no trace.
#[derive(Clone)]
pub struct ShipService {
    store: Arc<dyn ShipStore>,
    queries: QueryExecutor,
}

impl ShipService {
    pub fn new(store: Arc<dyn ShipStore>, default_page_size: usize) -> Self {
        let queries = QueryExecutor::new(store.clone(), default_page_size);
        Self { store, queries }
    }

    /// Parse a path id; only positive integers are ids
    pub fn parse_id(raw: &str) -> FleetResult<i64> {
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(RequestError::InvalidShipId { id: raw.to_string() }.into()),
        }
    }

    /// One page of ships matching the filter parameters
    pub async fn list(&self, params: &ParamMap) -> FleetResult<Vec<Ship>> {
        self.queries.list(params).await
    }

    /// Number of ships matching the filter parameters
    pub async fn count(&self, params: &ParamMap) -> FleetResult<usize> {
        self.queries.count(params).await
    }

    pub async fn get(&self, raw_id: &str) -> FleetResult<Ship> {
        let id = Self::parse_id(raw_id)?;
        self.fetch(id).await
    }

    /// Validate a full payload, compute its rating and store it under a new id
    pub async fn create(&self, draft: ShipDraft) -> FleetResult<Ship> {
        let checked = Self::check(&draft)?;
        let ship = self.store.insert(checked.into_ship(0)).await?;

        tracing::info!(id = ship.id, name = %ship.name, rating = ship.rating, "ship created");
        Ok(ship)
    }

    /// Merge the present fields of `patch` onto the stored ship, then
    /// revalidate and store the merged record under the same id
    pub async fn update(&self, raw_id: &str, patch: ShipDraft) -> FleetResult<Ship> {
        let id = Self::parse_id(raw_id)?;
        let stored = self.fetch(id).await?;

        let merged = ShipDraft::from(stored).merge(patch);
        let checked = Self::check(&merged)?;

        let ship = self
            .store
            .replace(checked.into_ship(id))
            .await?
            .ok_or(ShipError::NotFound { id })?;

        tracing::info!(id = ship.id, rating = ship.rating, "ship updated");
        Ok(ship)
    }

    pub async fn delete(&self, raw_id: &str) -> FleetResult<()> {
        let id = Self::parse_id(raw_id)?;
        if !self.store.delete(id).await? {
            return Err(ShipError::NotFound { id }.into());
        }

        tracing::info!(id, "ship deleted");
        Ok(())
    }

    /// Create every draft in order, stopping at the first rejection
    pub async fn seed(&self, drafts: Vec<ShipDraft>) -> FleetResult<Vec<Ship>> {
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            created.push(self.create(draft).await?);
        }
        tracing::info!(count = created.len(), "seeded ships");
        Ok(created)
    }

    async fn fetch(&self, id: i64) -> FleetResult<Ship> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ShipError::NotFound { id }.into())
    }

    fn check(draft: &ShipDraft) -> Result<CheckedShip, ValidationError> {
        validation::validate(draft).inspect_err(|err| {
            tracing::warn!(fields = ?err.fields(), "ship payload rejected");
        })
    }
}
