//! courier: smallest end-to-end run of the dispatch engine.
//!
//! Registers a few restaurant → customer orders around central Bengaluru,
//! then asks for the fastest way for one courier to collect and deliver all
//! of them.
//!
//! ```text
//! courier                          # built-in orders
//! courier locations.csv orders.csv # orders from CSV (see dp_store::loader)
//! ```
//!
//! Configuration comes from the environment (a `.env` file is honoured);
//! see `dp_core::config` for the variables.  Set `RUST_LOG=debug` to see the
//! engine's candidate counts.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use dp_core::{AgentPosition, OrderId, RouteConfig};
use dp_engine::RouteSelector;
use dp_store::{MemoryStore, NewLocation, NewOrder, load_store_csv, plan_best_route};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Courier's current position (MG Road).
const AGENT_LAT: f64 = 12.9756;
const AGENT_LON: f64 = 77.6066;

// ── Built-in orders ───────────────────────────────────────────────────────────

fn demo_store() -> Result<MemoryStore> {
    let mut store = MemoryStore::new();
    let requests = [
        ("Meghana Foods", 12.9716, 77.5946, "Indiranagar flat", 12.9784, 77.6408, 12.0),
        ("Truffles", 12.9352, 77.6245, "HSR apartment", 12.9121, 77.6446, 6.0),
        ("CTR", 12.9982, 77.5692, "Malleshwaram house", 13.0035, 77.5709, 15.0),
    ];
    for (pickup, plat, plon, dropoff, dlat, dlon, prep) in requests {
        store.create_order(NewOrder {
            pickup:            NewLocation::new(pickup, plat, plon),
            dropoff:           NewLocation::new(dropoff, dlat, dlon),
            prep_time_minutes: prep,
        })?;
    }
    Ok(store)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== courier: dispatch route engine ===");

    let config = RouteConfig::from_env().context("reading configuration")?;
    println!(
        "speed {} km/h | max orders {} | prep policy {}",
        config.geo.speed_kmh, config.max_orders, config.prep_policy
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = match args.as_slice() {
        [locations, orders] => load_store_csv(Path::new(locations), Path::new(orders))
            .with_context(|| format!("loading {locations} and {orders}"))?,
        [] => demo_store()?,
        _ => anyhow::bail!("usage: courier [LOCATIONS_CSV ORDERS_CSV]"),
    };

    let order_ids: Vec<OrderId> = store.orders().map(|o| o.id).collect();
    tracing::info!(orders = order_ids.len(), locations = store.location_count(), "store ready");
    let agent = AgentPosition::new(AGENT_LAT, AGENT_LON);
    let selector = RouteSelector::new(config);

    let t0 = Instant::now();
    let route = plan_best_route(&store, &selector, &agent, &order_ids)?;
    let elapsed = t0.elapsed();

    println!(
        "\n{} orders, best of {} orderings in {:.2?}",
        order_ids.len(),
        dp_engine::ordering_count(order_ids.len()).unwrap_or(0),
        elapsed
    );
    println!("{:>4}  {:<8} {:<22} {:>10} {:>10}", "#", "kind", "stop", "step min", "total min");
    for (i, (step, total)) in route.steps.iter().zip(route.cumulative_minutes()).enumerate() {
        println!(
            "{:>4}  {:<8} {:<22} {:>10.1} {:>10.1}",
            i + 1,
            step.kind.as_str(),
            step.label,
            step.step_time_minutes,
            total
        );
    }
    println!("\nTotal: {:.1} min", route.total_time_minutes);

    println!("\n{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}
