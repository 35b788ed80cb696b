//! `dp-core`: foundational types for the dispatch route engine.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `LocationId`, `OrderId`                                 |
//! | [`geo`]       | `GeoPoint`, `GeoModel` (haversine distance, travel time) |
//! | [`model`]     | `Location`, `Order`, `AgentPosition`, `RouteStep`, `RouteResult` |
//! | [`config`]    | `RouteConfig`, `PrepTimePolicy`                         |
//! | [`error`]     | `DpError`, `DpResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PrepTimePolicy, RouteConfig};
pub use error::{DpError, DpResult};
pub use geo::{GeoModel, GeoPoint};
pub use ids::{LocationId, OrderId};
pub use model::{AgentPosition, Location, Order, RouteResult, RouteStep, StopKind};
