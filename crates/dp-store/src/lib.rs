//! `dp-store`: the record side of the dispatch engine.
//!
//! The engine only consumes in-memory snapshots.  This crate supplies them:
//! a lookup trait, an in-memory implementation, a CSV loader, and the
//! fetch-then-route entry point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`store`]   | `OrderStore` trait, `MemoryStore`, `NewOrder`, `NewLocation`   |
//! | [`loader`]  | `load_store_csv`, `load_store_reader`                         |
//! | [`planner`] | `plan_best_route`                                             |
//! | [`error`]   | `StoreError`, `PlanError`, `StoreResult<T>`, `PlanResult<T>`  |

pub mod error;
pub mod loader;
pub mod planner;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult, StoreError, StoreResult};
pub use loader::{load_store_csv, load_store_reader};
pub use planner::plan_best_route;
pub use store::{MemoryStore, NewLocation, NewOrder, OrderStore};
