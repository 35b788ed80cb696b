use thiserror::Error;

use dp_core::{LocationId, OrderId};
use dp_engine::EngineError;

/// Errors produced by an [`OrderStore`](crate::OrderStore) or the loader.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("{what} {id} already exists")]
    Duplicate { what: &'static str, id: u64 },

    #[error("{what} id {id} is reserved as the invalid sentinel")]
    InvalidId { what: &'static str, id: u64 },

    #[error("no {what} ids left to assign")]
    IdsExhausted { what: &'static str },

    #[error("store parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of [`plan_best_route`](crate::plan_best_route).  Store and engine
/// errors are passed through unchanged.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type PlanResult<T> = Result<T, PlanError>;
