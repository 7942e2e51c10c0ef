//! Core module containing the ship record model and the record service

pub mod error;
pub mod field;
pub mod filter;
pub mod query;
pub mod rating;
pub mod service;
pub mod ship;
pub mod store;
pub mod validation;

pub use error::{ErrorKind, FleetError, FleetResult};
pub use field::{FieldValue, ShipField};
pub use filter::{ParamMap, Predicate, ShipFilter};
pub use query::{PageRequest, QueryExecutor, ShipOrder, ShipQuery};
pub use service::ShipService;
pub use ship::{Ship, ShipDraft, ShipType};
pub use store::ShipStore;
