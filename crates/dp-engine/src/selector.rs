//! Exhaustive best-route search.
//!
//! # Algorithm
//!
//! ```text
//! index     = StopIndex::build(orders, locations)      // validate, resolve
//! for ordering in SequenceGenerator::new(n):           // (2n)!/2^n candidates
//!     total = CostEvaluator::total_minutes(ordering)
//!     keep ordering if total < best                    // strict: first wins ties
//! return CostEvaluator::evaluate(best)
//! ```
//!
//! The search is a pure function of its inputs; two calls with identical
//! inputs return identical results.  With the `parallel` feature candidates
//! are scored on Rayon's pool and reduced on `(total, generation index)`,
//! which picks the same ordering the sequential loop would.

use dp_core::{AgentPosition, GeoPoint, Location, Order, RouteConfig, RouteResult};

use crate::cost::CostEvaluator;
use crate::error::{EngineError, EngineResult, InvalidInput};
use crate::index::{StopIndex, check_point};
use crate::sequence::{SequenceGenerator, Stop};

/// Finds the minimum-time visiting order for one courier.
///
/// Holds only configuration; safe to share across threads and call
/// concurrently.
#[derive(Clone, Debug, Default)]
pub struct RouteSelector {
    config: RouteConfig,
}

impl RouteSelector {
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Best route from `agent` through every pickup and dropoff of `orders`.
    pub fn select(
        &self,
        agent:     &AgentPosition,
        orders:    &[Order],
        locations: &[Location],
    ) -> EngineResult<RouteResult> {
        self.try_select(agent, orders, locations).inspect_err(|e| {
            tracing::warn!(error = %e, orders = orders.len(), "route request rejected");
        })
    }

    fn try_select(
        &self,
        agent:     &AgentPosition,
        orders:    &[Order],
        locations: &[Location],
    ) -> EngineResult<RouteResult> {
        if orders.is_empty() {
            return Err(InvalidInput::EmptyOrders.into());
        }
        if orders.len() > self.config.max_orders {
            return Err(EngineError::SearchLimitExceeded {
                orders: orders.len(),
                limit:  self.config.max_orders,
            });
        }
        let start = agent.point();
        check_point("agent position", start)?;

        let index = StopIndex::build(orders, locations, self.config.prep_policy)?;
        let evaluator = CostEvaluator::new(self.config.geo, &index);
        let generator = SequenceGenerator::new(index.len());

        let (best, scored) = search(&evaluator, start, &generator);
        let route = evaluator.evaluate(start, &best);

        tracing::debug!(
            orders     = index.len(),
            candidates = scored,
            total_min  = route.total_time_minutes,
            "route selected"
        );
        Ok(route)
    }
}

/// Returns the winning ordering and the number of candidates scored.
#[cfg(not(feature = "parallel"))]
fn search(
    evaluator: &CostEvaluator<'_, '_>,
    start:     GeoPoint,
    generator: &SequenceGenerator,
) -> (Vec<Stop>, u64) {
    let mut best: Option<(f64, Vec<Stop>)> = None;
    let mut scored = 0u64;

    for ordering in generator {
        let total = evaluator.total_minutes(start, &ordering);
        scored += 1;
        match &best {
            Some((best_total, _)) if total >= *best_total => {}
            _ => best = Some((total, ordering)),
        }
    }

    (best.map(|(_, o)| o).unwrap_or_default(), scored)
}

#[cfg(feature = "parallel")]
fn search(
    evaluator: &CostEvaluator<'_, '_>,
    start:     GeoPoint,
    generator: &SequenceGenerator,
) -> (Vec<Stop>, u64) {
    use rayon::prelude::*;

    // Indices are assigned before bridging, so they follow generation order.
    let best = generator
        .iter()
        .enumerate()
        .par_bridge()
        .map(|(i, ordering)| (evaluator.total_minutes(start, &ordering), i, ordering, 1u64))
        .reduce_with(|a, b| {
            let scored = a.3 + b.3;
            let (total, i, ordering, _) = if b.0 < a.0 || (b.0 == a.0 && b.1 < a.1) { b } else { a };
            (total, i, ordering, scored)
        });

    match best {
        Some((_, _, ordering, scored)) => (ordering, scored),
        None => (Vec::new(), 0),
    }
}
