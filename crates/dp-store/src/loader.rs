//! CSV loading into a [`MemoryStore`].
//!
//! # CSV formats
//!
//! Locations, one row per place:
//!
//! ```csv
//! id,name,latitude,longitude
//! 1,Meghana Foods,12.9716,77.5946
//! 2,Customer A,12.9784,77.6408
//! ```
//!
//! Orders, one row per delivery; both location ids must appear in the
//! locations file:
//!
//! ```csv
//! id,pickup_location_id,dropoff_location_id,prep_time_minutes
//! 1,1,2,12.5
//! ```
//!
//! Duplicate ids in either file are an error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dp_core::{Location, LocationId, Order, OrderId};

use crate::{MemoryStore, StoreError, StoreResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    id:        u64,
    name:      String,
    latitude:  f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct OrderRecord {
    id:                  u64,
    pickup_location_id:  u64,
    dropoff_location_id: u64,
    prep_time_minutes:   f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a store from a locations CSV and an orders CSV.
pub fn load_store_csv(locations: &Path, orders: &Path) -> StoreResult<MemoryStore> {
    let locations = std::fs::File::open(locations).map_err(StoreError::Io)?;
    let orders = std::fs::File::open(orders).map_err(StoreError::Io)?;
    load_store_reader(locations, orders)
}

/// Like [`load_store_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_store_reader<L: Read, O: Read>(locations: L, orders: O) -> StoreResult<MemoryStore> {
    let mut store = MemoryStore::new();

    let mut rdr = csv::Reader::from_reader(locations);
    for result in rdr.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| StoreError::Parse(format!("locations: {e}")))?;
        store.put_location(Location::new(LocationId(row.id), row.name, row.latitude, row.longitude))?;
    }

    let mut rdr = csv::Reader::from_reader(orders);
    for result in rdr.deserialize::<OrderRecord>() {
        let row = result.map_err(|e| StoreError::Parse(format!("orders: {e}")))?;
        store.put_order(Order::new(
            OrderId(row.id),
            LocationId(row.pickup_location_id),
            LocationId(row.dropoff_location_id),
            row.prep_time_minutes,
        ))?;
    }

    tracing::info!(
        locations = store.location_count(),
        orders    = store.order_count(),
        "store loaded"
    );
    Ok(store)
}
