//! Plain records exchanged between the store, the engine, and callers.
//!
//! All records are immutable snapshots: the engine borrows them for the
//! duration of one computation and never mutates them.

use crate::{GeoPoint, LocationId, OrderId};

// ── Inputs ────────────────────────────────────────────────────────────────────

/// A named point on the map.  Identity is the `id`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:        LocationId,
    pub name:      String,
    pub latitude:  f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { id, name: name.into(), latitude, longitude }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A delivery: collect at `pickup` once the order is prepared, then hand it
/// over at `dropoff`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:                OrderId,
    pub pickup:            LocationId,
    pub dropoff:           LocationId,
    /// Minutes the courier waits at the pickup before leaving with the order.
    pub prep_time_minutes: f64,
}

impl Order {
    pub fn new(id: OrderId, pickup: LocationId, dropoff: LocationId, prep_time_minutes: f64) -> Self {
        Self { id, pickup, dropoff, prep_time_minutes }
    }
}

/// Where the courier is right now.  Supplied per call, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentPosition {
    pub latitude:  f64,
    pub longitude: f64,
}

impl AgentPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Which half of an order a stop serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopKind {
    Pickup,
    Dropoff,
}

impl StopKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StopKind::Pickup  => "pickup",
            StopKind::Dropoff => "dropoff",
        }
    }
}

impl std::fmt::Display for StopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visit on a computed route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    pub location_id:       LocationId,
    /// Display label; the location's name.
    pub label:             String,
    /// Time from the previous step (or the start) to this one, including any
    /// wait for the order to be ready.
    pub step_time_minutes: f64,
    pub order_id:          OrderId,
    pub kind:              StopKind,
}

/// A full visiting sequence and its cost.
///
/// `total_time_minutes` is the left-to-right sum of every
/// `step_time_minutes`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    pub total_time_minutes: f64,
    pub steps:              Vec<RouteStep>,
}

impl RouteResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Running total after each step.  The last value equals
    /// `total_time_minutes`.
    pub fn cumulative_minutes(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().scan(0.0, |acc, step| {
            *acc += step.step_time_minutes;
            Some(*acc)
        })
    }

    /// Location ids in visiting order.
    pub fn location_ids(&self) -> Vec<LocationId> {
        self.steps.iter().map(|s| s.location_id).collect()
    }
}
