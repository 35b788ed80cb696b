//! Unit tests for dp-store.

#[cfg(test)]
mod helpers {
    use crate::{MemoryStore, NewLocation, NewOrder};

    pub const LOCATIONS_CSV: &str = "\
id,name,latitude,longitude\n\
1,Meghana Foods,12.9716,77.5946\n\
2,Truffles,12.9352,77.6245\n\
3,Customer A,12.9784,77.6408\n\
4,Customer B,12.9141,77.6101\n\
";

    pub const ORDERS_CSV: &str = "\
id,pickup_location_id,dropoff_location_id,prep_time_minutes\n\
10,1,3,12\n\
11,2,4,4.5\n\
";

    pub fn new_order(prefix: &str, prep: f64) -> NewOrder {
        NewOrder {
            pickup:            NewLocation::new(format!("{prefix} restaurant"), 12.97, 77.59),
            dropoff:           NewLocation::new(format!("{prefix} customer"), 12.93, 77.62),
            prep_time_minutes: prep,
        }
    }

    pub fn fixture_store() -> MemoryStore {
        crate::load_store_reader(LOCATIONS_CSV.as_bytes(), ORDERS_CSV.as_bytes()).unwrap()
    }
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_store {
    use dp_core::{LocationId, OrderId};

    use super::helpers::new_order;
    use crate::{MemoryStore, OrderStore, StoreError};

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut store = MemoryStore::new();
        assert_eq!(store.insert_location("a", 0.0, 0.0).unwrap(), LocationId(1));
        assert_eq!(store.insert_location("b", 0.0, 1.0).unwrap(), LocationId(2));
        assert_eq!(store.insert_order(LocationId(1), LocationId(2), 3.0).unwrap(), OrderId(1));
    }

    #[test]
    fn create_order_registers_both_locations() {
        let mut store = MemoryStore::new();
        let id = store.create_order(new_order("first", 7.0)).unwrap();
        assert_eq!(store.location_count(), 2);

        let order = store.order(id).unwrap();
        assert_eq!(order.prep_time_minutes, 7.0);
        assert_eq!(store.location(order.pickup).unwrap().name, "first restaurant");
        assert_eq!(store.location(order.dropoff).unwrap().name, "first customer");
    }

    #[test]
    fn insert_order_requires_known_locations() {
        let mut store = MemoryStore::new();
        store.insert_location("a", 0.0, 0.0).unwrap();
        let err = store.insert_order(LocationId(1), LocationId(5), 0.0).unwrap_err();
        assert!(matches!(err, StoreError::LocationNotFound(LocationId(5))), "{err:?}");
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn batch_lookup_preserves_request_order() {
        let mut store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.insert_location(name, 0.0, 0.0).unwrap();
        }
        let got = store
            .locations_by_ids(&[LocationId(3), LocationId(1)])
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<_>>();
        assert_eq!(got, ["c", "a"]);
    }

    #[test]
    fn batch_lookup_fails_on_missing_id() {
        let store = MemoryStore::new();
        let err = store.orders_by_ids(&[OrderId(4)]).unwrap_err();
        assert!(matches!(err, StoreError::OrderNotFound(OrderId(4))), "{err:?}");
    }

    #[test]
    fn put_rejects_duplicates_and_advances_ids() {
        let mut store = MemoryStore::new();
        store.put_location(dp_core::Location::new(LocationId(10), "x", 0.0, 0.0)).unwrap();
        let err = store.put_location(dp_core::Location::new(LocationId(10), "y", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { what: "location", id: 10 }), "{err:?}");
        assert_eq!(store.insert_location("z", 0.0, 0.0).unwrap(), LocationId(11));
    }

    #[test]
    fn put_rejects_invalid_sentinel() {
        let mut store = MemoryStore::new();
        let err = store.put_location(dp_core::Location::new(LocationId::INVALID, "x", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId { what: "location", id: u64::MAX }), "{err:?}");

        store.insert_location("a", 0.0, 0.0).unwrap();
        store.insert_location("b", 0.0, 0.0).unwrap();
        let order = dp_core::Order::new(OrderId::INVALID, LocationId(1), LocationId(2), 0.0);
        let err = store.put_order(order).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId { what: "order", .. }), "{err:?}");
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn highest_id_exhausts_auto_increment() {
        let mut store = MemoryStore::new();
        let last = u64::MAX - 1;
        store.put_location(dp_core::Location::new(LocationId(last), "edge", 0.0, 0.0)).unwrap();

        let err = store.insert_location("next", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { what: "location" }), "{err:?}");
        let err = store.create_order(new_order("late", 1.0)).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { .. }), "{err:?}");
        assert_eq!(store.location_count(), 1);
    }

    #[test]
    fn failed_create_order_keeps_nothing() {
        let mut store = MemoryStore::new();
        // Room for the pickup only; the dropoff id would be the sentinel.
        store.put_location(dp_core::Location::new(LocationId(u64::MAX - 2), "edge", 0.0, 0.0)).unwrap();

        let err = store.create_order(new_order("half", 1.0)).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { what: "location" }), "{err:?}");
        assert_eq!(store.location_count(), 1);
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.insert_location("retry", 0.0, 0.0).unwrap(), LocationId(u64::MAX - 1));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use dp_core::{LocationId, OrderId};

    use super::helpers::{LOCATIONS_CSV, ORDERS_CSV, fixture_store};
    use crate::{OrderStore, StoreError, load_store_csv, load_store_reader};

    #[test]
    fn reader_round_trip() {
        let store = fixture_store();
        assert_eq!(store.location_count(), 4);
        assert_eq!(store.order_count(), 2);
        let order = store.order(OrderId(11)).unwrap();
        assert_eq!(order.pickup, LocationId(2));
        assert_eq!(order.prep_time_minutes, 4.5);
        assert_eq!(store.location(LocationId(1)).unwrap().name, "Meghana Foods");
    }

    #[test]
    fn order_with_unknown_location_rejected() {
        let orders = "id,pickup_location_id,dropoff_location_id,prep_time_minutes\n1,1,99,0\n";
        let err = load_store_reader(LOCATIONS_CSV.as_bytes(), orders.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::LocationNotFound(LocationId(99))), "{err:?}");
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let locations = "id,name,latitude,longitude\n1,a,north,0\n";
        let err = load_store_reader(locations.as_bytes(), ORDERS_CSV.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)), "{err:?}");
    }

    #[test]
    fn sentinel_id_in_file_rejected() {
        let locations = "id,name,latitude,longitude\n18446744073709551615,x,0,0\n";
        let err = load_store_reader(locations.as_bytes(), ORDERS_CSV.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidId { what: "location", .. }), "{err:?}");
    }

    #[test]
    fn from_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let loc_path = dir.path().join("locations.csv");
        let ord_path = dir.path().join("orders.csv");
        std::fs::File::create(&loc_path).unwrap().write_all(LOCATIONS_CSV.as_bytes()).unwrap();
        std::fs::File::create(&ord_path).unwrap().write_all(ORDERS_CSV.as_bytes()).unwrap();

        let store = load_store_csv(&loc_path, &ord_path).unwrap();
        assert_eq!(store.order_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_store_csv(&dir.path().join("nope.csv"), &dir.path().join("nope2.csv")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)), "{err:?}");
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use dp_core::{AgentPosition, OrderId, StopKind};
    use dp_engine::{EngineError, InvalidInput, RouteSelector};

    use super::helpers::fixture_store;
    use crate::{MemoryStore, OrderStore, PlanError, StoreError, plan_best_route};

    #[test]
    fn plans_over_stored_orders() {
        let store = fixture_store();
        let agent = AgentPosition::new(12.95, 77.60);
        let selector = RouteSelector::default();

        let route = plan_best_route(&store, &selector, &agent, &[OrderId(10), OrderId(11)]).unwrap();
        assert_eq!(route.len(), 4);
        assert_eq!(route.steps.iter().filter(|s| s.kind == StopKind::Pickup).count(), 2);

        // Same answer as calling the engine directly.
        let orders = store.orders_by_ids(&[OrderId(10), OrderId(11)]).unwrap();
        let locations: Vec<_> = store.locations().cloned().collect();
        let direct = selector.select(&agent, &orders, &locations).unwrap();
        assert_eq!(route, direct);
    }

    #[test]
    fn missing_order_surfaces_store_error() {
        let store = fixture_store();
        let err = plan_best_route(
            &store,
            &RouteSelector::default(),
            &AgentPosition::new(12.95, 77.60),
            &[OrderId(10), OrderId(77)],
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::Store(StoreError::OrderNotFound(OrderId(77)))), "{err:?}");
    }

    #[test]
    fn empty_request_surfaces_engine_error() {
        let err = plan_best_route(
            &MemoryStore::new(),
            &RouteSelector::default(),
            &AgentPosition::new(0.0, 0.0),
            &[],
        )
        .unwrap_err();
        assert!(
            matches!(err, PlanError::Engine(EngineError::InvalidInput(InvalidInput::EmptyOrders))),
            "{err:?}"
        );
    }

    #[test]
    fn works_through_a_trait_object() {
        let store = fixture_store();
        let dyn_store: &dyn OrderStore = &store;
        let route = plan_best_route(
            dyn_store,
            &RouteSelector::default(),
            &AgentPosition::new(12.95, 77.60),
            &[OrderId(11)],
        )
        .unwrap();
        assert_eq!(route.len(), 2);
    }
}
