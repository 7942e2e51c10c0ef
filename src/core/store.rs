//! Record store trait
//!
//! The store is the only shared resource of the service. It owns id
//! allocation and answers predicate-filtered, ordered range queries; the
//! service never loads the whole fleet to filter it.

use anyhow::Result;
use async_trait::async_trait;

use crate::core::filter::ShipFilter;
use crate::core::query::{PageRequest, ShipOrder};
use crate::core::ship::Ship;

/// Storage backend for ship records
///
/// Implementations must make each single-record write atomic and give
/// filtered scans a consistent view. Concurrent writes to the same id are
/// last-write-wins.
#[async_trait]
pub trait ShipStore: Send + Sync {
    /// Persist a new ship under a freshly allocated id
    ///
    /// The `id` of the argument is ignored; the returned ship carries the
    /// assigned one.
    async fn insert(&self, ship: Ship) -> Result<Ship>;

    /// Get a ship by id
    async fn get(&self, id: i64) -> Result<Option<Ship>>;

    /// Replace the ship stored under `ship.id`
    ///
    /// Returns `None` when no ship has that id, in which case nothing is written.
    async fn replace(&self, ship: Ship) -> Result<Option<Ship>>;

    /// Remove a ship, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Ships matching `filter`, sorted by `order`, restricted to `page`
    async fn find(&self, filter: &ShipFilter, order: ShipOrder, page: PageRequest)
    -> Result<Vec<Ship>>;

    /// Number of ships matching `filter`
    async fn count(&self, filter: &ShipFilter) -> Result<usize>;
}
