//! Record lookup trait and the in-memory store.
//!
//! # Pluggability
//!
//! [`plan_best_route`](crate::plan_best_route) reads records through the
//! [`OrderStore`] trait, so an application can back it with a database
//! client without touching the engine.  [`MemoryStore`] is sufficient for
//! tests, demos, and CSV-fed batch runs.

use std::collections::BTreeMap;

use dp_core::{Location, LocationId, Order, OrderId};

use crate::{StoreError, StoreResult};

// ── OrderStore trait ──────────────────────────────────────────────────────────

/// Read access to stored locations and orders.
///
/// Batch lookups return records in the order the ids were requested and fail
/// on the first id that does not exist; a short result is never returned.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one store can serve concurrent
/// route requests.
pub trait OrderStore: Send + Sync {
    fn location(&self, id: LocationId) -> StoreResult<Location>;

    fn order(&self, id: OrderId) -> StoreResult<Order>;

    fn locations_by_ids(&self, ids: &[LocationId]) -> StoreResult<Vec<Location>> {
        ids.iter().map(|&id| self.location(id)).collect()
    }

    fn orders_by_ids(&self, ids: &[OrderId]) -> StoreResult<Vec<Order>> {
        ids.iter().map(|&id| self.order(id)).collect()
    }
}

// ── New-order request ─────────────────────────────────────────────────────────

/// A location that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLocation {
    pub name:      String,
    pub latitude:  f64,
    pub longitude: f64,
}

impl NewLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }
}

/// Everything needed to register an order whose endpoints are new places.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub pickup:            NewLocation,
    pub dropoff:           NewLocation,
    pub prep_time_minutes: f64,
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// `BTreeMap`-backed store with auto-increment ids starting at 1.
///
/// Writes take `&mut self`; share a finished store behind an `Arc` for
/// concurrent reads.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    locations:     BTreeMap<LocationId, Location>,
    orders:        BTreeMap<OrderId, Order>,
    next_location: u64,
    next_order:    u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            locations:     BTreeMap::new(),
            orders:        BTreeMap::new(),
            next_location: 1,
            next_order:    1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// All locations in ascending id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All orders in ascending id order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Store a new location under the next free id.
    pub fn insert_location(
        &mut self,
        name:      impl Into<String>,
        latitude:  f64,
        longitude: f64,
    ) -> StoreResult<LocationId> {
        let id = LocationId(take_id(&mut self.next_location, "location")?);
        self.locations.insert(id, Location::new(id, name, latitude, longitude));
        Ok(id)
    }

    /// Store a location that already carries an id (e.g. from a file).
    /// The `INVALID` sentinel is refused.
    pub fn put_location(&mut self, location: Location) -> StoreResult<()> {
        if !location.id.is_valid() {
            return Err(StoreError::InvalidId { what: "location", id: location.id.get() });
        }
        if self.locations.contains_key(&location.id) {
            return Err(StoreError::Duplicate { what: "location", id: location.id.get() });
        }
        self.next_location = self.next_location.max(location.id.get().saturating_add(1));
        self.locations.insert(location.id, location);
        Ok(())
    }

    /// Store a new order under the next free id.  Both endpoints must exist.
    pub fn insert_order(
        &mut self,
        pickup:            LocationId,
        dropoff:           LocationId,
        prep_time_minutes: f64,
    ) -> StoreResult<OrderId> {
        self.require_location(pickup)?;
        self.require_location(dropoff)?;
        let id = OrderId(take_id(&mut self.next_order, "order")?);
        self.orders.insert(id, Order::new(id, pickup, dropoff, prep_time_minutes));
        Ok(id)
    }

    /// Store an order that already carries an id.  Both endpoints must exist
    /// and the `INVALID` sentinel is refused.
    pub fn put_order(&mut self, order: Order) -> StoreResult<()> {
        if !order.id.is_valid() {
            return Err(StoreError::InvalidId { what: "order", id: order.id.get() });
        }
        if self.orders.contains_key(&order.id) {
            return Err(StoreError::Duplicate { what: "order", id: order.id.get() });
        }
        self.require_location(order.pickup)?;
        self.require_location(order.dropoff)?;
        self.next_order = self.next_order.max(order.id.get().saturating_add(1));
        self.orders.insert(order.id, order);
        Ok(())
    }

    /// Register the pickup and dropoff as new locations, then the order
    /// linking them.  On failure none of the three records is kept.
    pub fn create_order(&mut self, request: NewOrder) -> StoreResult<OrderId> {
        let first_new = self.next_location;
        let result = self.insert_new_order(request);
        match &result {
            Ok(id) => tracing::debug!(order = %id, "order created"),
            Err(_) => self.rollback_locations(first_new),
        }
        result
    }

    fn insert_new_order(&mut self, request: NewOrder) -> StoreResult<OrderId> {
        let NewOrder { pickup, dropoff, prep_time_minutes } = request;
        let pickup = self.insert_location(pickup.name, pickup.latitude, pickup.longitude)?;
        let dropoff = self.insert_location(dropoff.name, dropoff.latitude, dropoff.longitude)?;
        self.insert_order(pickup, dropoff, prep_time_minutes)
    }

    /// Drop locations auto-assigned at or after `from` and rewind the counter.
    fn rollback_locations(&mut self, from: u64) {
        self.locations.retain(|id, _| id.get() < from);
        self.next_location = from;
    }

    fn require_location(&self, id: LocationId) -> StoreResult<()> {
        if self.locations.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::LocationNotFound(id))
        }
    }
}

/// Hand out `*next` and advance it.  `u64::MAX` is the `INVALID` sentinel
/// and is never handed out.
fn take_id(next: &mut u64, what: &'static str) -> StoreResult<u64> {
    let id = *next;
    match id.checked_add(1) {
        Some(following) => {
            *next = following;
            Ok(id)
        }
        None => Err(StoreError::IdsExhausted { what }),
    }
}

impl OrderStore for MemoryStore {
    fn location(&self, id: LocationId) -> StoreResult<Location> {
        self.locations.get(&id).cloned().ok_or(StoreError::LocationNotFound(id))
    }

    fn order(&self, id: OrderId) -> StoreResult<Order> {
        self.orders.get(&id).cloned().ok_or(StoreError::OrderNotFound(id))
    }
}
