//! Engine error types.
//!
//! Every failure is detected while building the per-call [`StopIndex`]
//! (or, for the search budget, before it), so no partial route is ever
//! produced.
//!
//! [`StopIndex`]: crate::StopIndex

use thiserror::Error;

use dp_core::{LocationId, OrderId};

/// A caller-supplied value the engine cannot route with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("order set is empty")]
    EmptyOrders,

    #[error("{order} references unknown location {location}")]
    UnknownLocation { order: OrderId, location: LocationId },

    #[error("{field} is not finite ({value})")]
    NonFinite { field: String, value: f64 },

    #[error("{field} is out of range ({value})")]
    OutOfRange { field: String, value: f64 },

    #[error("{order} has negative prep time ({minutes} min)")]
    NegativePrepTime { order: OrderId, minutes: f64 },

    #[error("location {0} supplied more than once")]
    DuplicateLocation(LocationId),
}

/// A structural rule on the order set that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("{order} picks up and drops off at the same location")]
    PickupEqualsDropoff { order: OrderId },

    #[error("{0} supplied more than once")]
    DuplicateOrder(OrderId),
}

/// Errors produced by `dp-engine`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("precondition not met: {0}")]
    PreconditionNotMet(#[from] Precondition),

    #[error("{orders} orders exceed the exhaustive search limit of {limit}")]
    SearchLimitExceeded { orders: usize, limit: usize },
}

impl EngineError {
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
