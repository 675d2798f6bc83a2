//! # Exoplanet Catalog
//!
//! The core of the service: the planet record model, field validation,
//! the fuel estimator, and the concurrency-safe in-memory store.
//!
//! Control flow for a write is always decode → [`validate`] → [`PlanetStore`].
//! The store never validates; the validator never touches the store.

pub mod fuel;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;

pub use fuel::{estimate_fuel, parse_crew_capacity, surface_gravity, EstimationError};
pub use model::{PlanetKind, PlanetRecord};
pub use query::{filter_by_kind, first_value, sort_by, ListQuery, SortField};
pub use store::{PlanetStore, StoreError};
pub use validation::{validate, ValidationError};
