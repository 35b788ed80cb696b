//! Per-call index from stops to resolved locations and waits.
//!
//! A `StopIndex` is built at the start of every route computation and
//! dropped when it returns.  Building it is where all input validation
//! happens; once an index exists every stop resolves and every number is
//! finite, so evaluation is total.

use rustc_hash::{FxHashMap, FxHashSet};

use dp_core::{GeoPoint, Location, LocationId, Order, PrepTimePolicy, StopKind};

use crate::error::{EngineResult, InvalidInput, Precondition};
use crate::sequence::Stop;

/// One order with both ends resolved.
#[derive(Debug, Clone)]
pub struct ResolvedOrder<'a> {
    pub order:   &'a Order,
    pub pickup:  &'a Location,
    pub dropoff: &'a Location,
    /// Minutes waited on arrival at the pickup.
    pickup_wait:  f64,
    /// Minutes waited on arrival at the dropoff.  Always zero under
    /// `PrepTimePolicy::PerOrder`.
    dropoff_wait: f64,
}

/// Stop → location and stop → wait lookups for one computation.
#[derive(Debug, Clone)]
pub struct StopIndex<'a> {
    orders: Vec<ResolvedOrder<'a>>,
}

impl<'a> StopIndex<'a> {
    /// Validate `orders` and `locations` and resolve every stop.
    ///
    /// Fails on an empty order set, a duplicated order or location id, an
    /// order whose pickup and dropoff coincide, an unresolved location id,
    /// negative or non-finite prep time (including a total wait that
    /// overflows), and non-finite or out-of-range coordinates on any supplied
    /// location.
    pub fn build(
        orders:    &'a [Order],
        locations: &'a [Location],
        policy:    PrepTimePolicy,
    ) -> EngineResult<Self> {
        if orders.is_empty() {
            return Err(InvalidInput::EmptyOrders.into());
        }

        // ── Locations ─────────────────────────────────────────────────────
        let mut by_id: FxHashMap<LocationId, &'a Location> =
            FxHashMap::with_capacity_and_hasher(locations.len(), Default::default());
        for loc in locations {
            check_point(&format!("{} coordinates", loc.id), loc.point())?;
            if by_id.insert(loc.id, loc).is_some() {
                return Err(InvalidInput::DuplicateLocation(loc.id).into());
            }
        }

        // ── Orders ────────────────────────────────────────────────────────
        let mut seen = FxHashSet::default();
        let mut resolved = Vec::with_capacity(orders.len());
        for order in orders {
            if !seen.insert(order.id) {
                return Err(Precondition::DuplicateOrder(order.id).into());
            }
            let prep = order.prep_time_minutes;
            if !prep.is_finite() {
                return Err(InvalidInput::NonFinite {
                    field: format!("{} prep time", order.id),
                    value: prep,
                }
                .into());
            }
            if prep < 0.0 {
                return Err(InvalidInput::NegativePrepTime { order: order.id, minutes: prep }.into());
            }
            if order.pickup == order.dropoff {
                return Err(Precondition::PickupEqualsDropoff { order: order.id }.into());
            }

            let resolve = |location: LocationId| {
                by_id
                    .get(&location)
                    .copied()
                    .ok_or(InvalidInput::UnknownLocation { order: order.id, location })
            };
            resolved.push(ResolvedOrder {
                order,
                pickup:       resolve(order.pickup)?,
                dropoff:      resolve(order.dropoff)?,
                pickup_wait:  0.0,
                dropoff_wait: 0.0,
            });
        }

        assign_waits(&mut resolved, policy);

        // Each prep time is finite, but a route waits at every stop.
        let total_wait: f64 = resolved.iter().map(|r| r.pickup_wait + r.dropoff_wait).sum();
        if !total_wait.is_finite() {
            return Err(InvalidInput::NonFinite { field: "total prep time".to_owned(), value: total_wait }.into());
        }
        Ok(Self { orders: resolved })
    }

    /// Number of orders (half the number of stops).
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Always `false`; construction rejects empty order sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[inline]
    pub fn order(&self, i: usize) -> &ResolvedOrder<'a> {
        &self.orders[i]
    }

    pub fn orders(&self) -> &[ResolvedOrder<'a>] {
        &self.orders
    }

    #[inline]
    pub fn location(&self, stop: Stop) -> &'a Location {
        let r = &self.orders[stop.order];
        match stop.kind {
            StopKind::Pickup  => r.pickup,
            StopKind::Dropoff => r.dropoff,
        }
    }

    /// Minutes spent waiting on arrival at `stop`.
    #[inline]
    pub fn wait_minutes(&self, stop: Stop) -> f64 {
        let r = &self.orders[stop.order];
        match stop.kind {
            StopKind::Pickup  => r.pickup_wait,
            StopKind::Dropoff => r.dropoff_wait,
        }
    }
}

/// Reject non-finite or out-of-range coordinates.
pub(crate) fn check_point(field: &str, p: GeoPoint) -> EngineResult<()> {
    if !p.is_finite() {
        let value = if p.lat.is_finite() { p.lon } else { p.lat };
        return Err(InvalidInput::NonFinite { field: field.to_owned(), value }.into());
    }
    if !p.in_range() {
        let (axis, value) = if p.lat.abs() > 90.0 { ("latitude", p.lat) } else { ("longitude", p.lon) };
        return Err(InvalidInput::OutOfRange { field: format!("{field} {axis}"), value }.into());
    }
    Ok(())
}

fn assign_waits(orders: &mut [ResolvedOrder<'_>], policy: PrepTimePolicy) {
    match policy {
        PrepTimePolicy::PerOrder => {
            for r in orders.iter_mut() {
                r.pickup_wait = r.order.prep_time_minutes;
            }
        }
        PrepTimePolicy::PerLocation => {
            // Sum in input order so totals are reproducible bit for bit.
            let mut at_location: FxHashMap<LocationId, f64> = FxHashMap::default();
            for r in orders.iter() {
                *at_location.entry(r.order.pickup).or_insert(0.0) += r.order.prep_time_minutes;
            }
            for r in orders.iter_mut() {
                r.pickup_wait  = at_location.get(&r.order.pickup).copied().unwrap_or(0.0);
                r.dropoff_wait = at_location.get(&r.order.dropoff).copied().unwrap_or(0.0);
            }
        }
    }
}
