//! # Fleet
//!
//! A record-management service for a fleet of ships, exposing create, read,
//! update and delete operations plus filtered, paginated and sorted listing.
//!
//! ## Features
//!
//! - **Dynamic Filters**: Optional query parameters compile into a typed predicate conjunction
//! - **Stable Paging**: Ordered by a selectable key, ties broken by id
//! - **Server-Owned Rating**: Recomputed with half-up rounding on every write
//! - **Partial Updates**: Present fields are merged, then the whole record is revalidated
//! - **Pluggable Storage**: Any `ShipStore` implementation; in-memory by default
//! - **Configuration-Based**: Listen address, paging and seed data from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleet::prelude::*;
//!
//! let service = ShipService::new(Arc::new(InMemoryShipStore::new()), 3);
//!
//! let ship = service
//!     .create(ShipDraft {
//!         name: Some("Orion".into()),
//!         planet: Some("Mars".into()),
//!         ship_type: Some(ShipType::Merchant),
//!         prod_date: Some(Utc.with_ymd_and_hms(2990, 1, 1, 0, 0, 0).unwrap()),
//!         is_used: None,
//!         speed: Some(0.5),
//!         crew_size: Some(40),
//!     })
//!     .await?;
//!
//! let params: ParamMap = [("minSpeed".to_string(), "0.4".to_string())].into();
//! assert_eq!(service.count(&params).await?, 1);
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ErrorKind, FleetError, FleetResult},
        field::{FieldValue, ShipField},
        filter::{ParamMap, Predicate, ShipFilter},
        query::{PageRequest, QueryExecutor, ShipOrder, ShipQuery},
        rating::rating,
        service::ShipService,
        ship::{Ship, ShipDraft, ShipType},
        store::ShipStore,
        validation::{CheckedShip, Payload, validate},
    };

    // === Storage ===
    pub use crate::storage::InMemoryShipStore;

    // === Config ===
    pub use crate::config::{FleetConfig, PagingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, TimeZone, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
