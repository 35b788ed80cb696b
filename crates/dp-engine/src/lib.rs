//! `dp-engine`: minimum-time pickup-and-dropoff routing for one courier.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`index`]    | `StopIndex`: per-call validation and stop resolution      |
//! | [`sequence`] | `SequenceGenerator`, `Orderings`, `Stop`, `ordering_count` |
//! | [`cost`]     | `CostEvaluator`: scores one ordering                      |
//! | [`selector`] | `RouteSelector`: exhaustive search, deterministic ties    |
//! | [`error`]    | `EngineError`, `InvalidInput`, `Precondition`, `EngineResult<T>` |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Scores candidate orderings on Rayon's thread pool.      |
//! | `serde`    | Propagates serde derives to `dp-core` types.            |
//!
//! # Scaling
//!
//! The search is exhaustive: `n` orders produce `(2n)! / 2^n` candidates
//! (6 for two orders, 2 520 for four, ~7.5 M for six).  `RouteConfig::max_orders`
//! caps `n`; requests above it fail with `EngineError::SearchLimitExceeded`
//! instead of running unbounded.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::{AgentPosition, RouteConfig};
//! use dp_engine::RouteSelector;
//!
//! let selector = RouteSelector::new(RouteConfig::default());
//! let route = selector.select(&AgentPosition::new(12.97, 77.59), &orders, &locations)?;
//! println!("{:.1} min over {} stops", route.total_time_minutes, route.len());
//! ```

pub mod cost;
pub mod error;
pub mod index;
pub mod selector;
pub mod sequence;


pub use cost::CostEvaluator;
pub use error::{EngineError, EngineResult, InvalidInput, Precondition};
pub use index::{ResolvedOrder, StopIndex};
pub use selector::RouteSelector;
pub use sequence::{Orderings, SequenceGenerator, Stop, ordering_count};
