//! # HTTP Server Module
//!
//! Axum adapter in front of the catalog.
//!
//! # Endpoints
//!
//! - `POST   /exoplanets` - Create a planet
//! - `GET    /exoplanets?type=&sortBy=` - List planets
//! - `GET    /exoplanets/:id` - Fetch one planet
//! - `PUT    /exoplanets/:id` - Replace a planet
//! - `DELETE /exoplanets/:id` - Remove a planet
//! - `GET    /exoplanets/:id/fuel?crewCapacity=N` - Fuel estimate
//! - `/health`, `/metrics` - Observability

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod planet_routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
pub use state::AppState;
