//! In-memory implementation of ShipStore for testing and development

use crate::core::error::StorageError;
use crate::core::filter::ShipFilter;
use crate::core::query::{PageRequest, ShipOrder};
use crate::core::ship::Ship;
use crate::core::store::ShipStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory ship store
///
/// Records are kept in id order behind an `RwLock`. Ids are allocated from a
/// counter starting at 1 and are never reused, even after a delete.
#[derive(Clone)]
pub struct InMemoryShipStore {
    ships: Arc<RwLock<BTreeMap<i64, Ship>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryShipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            ships: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored ships, ignoring any filter
    pub fn len(&self) -> Result<usize> {
        let ships = self.ships.read().map_err(poisoned)?;
        Ok(ships.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryShipStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(e: impl Display) -> anyhow::Error {
    anyhow::Error::new(StorageError::LockPoisoned {
        message: e.to_string(),
    })
}

#[async_trait]
impl ShipStore for InMemoryShipStore {
    async fn insert(&self, mut ship: Ship) -> Result<Ship> {
        let mut ships = self.ships.write().map_err(poisoned)?;

        ship.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        ships.insert(ship.id, ship.clone());

        Ok(ship)
    }

    async fn get(&self, id: i64) -> Result<Option<Ship>> {
        let ships = self.ships.read().map_err(poisoned)?;

        Ok(ships.get(&id).cloned())
    }

    async fn replace(&self, ship: Ship) -> Result<Option<Ship>> {
        let mut ships = self.ships.write().map_err(poisoned)?;

        match ships.get_mut(&ship.id) {
            Some(slot) => {
                *slot = ship.clone();
                Ok(Some(ship))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut ships = self.ships.write().map_err(poisoned)?;

        Ok(ships.remove(&id).is_some())
    }

    async fn find(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: PageRequest,
    ) -> Result<Vec<Ship>> {
        let ships = self.ships.read().map_err(poisoned)?;

        let mut matching: Vec<Ship> = ships
            .values()
            .filter(|ship| filter.matches(ship))
            .cloned()
            .collect();
        drop(ships);

        order.sort(&mut matching);

        Ok(matching
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .collect())
    }

    async fn count(&self, filter: &ShipFilter) -> Result<usize> {
        let ships = self.ships.read().map_err(poisoned)?;

        Ok(ships.values().filter(|ship| filter.matches(ship)).count())
    }
}
