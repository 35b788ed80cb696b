//! Fetch-then-route: the best-route request minus any transport layer.

use dp_core::{AgentPosition, LocationId, OrderId, RouteResult};
use dp_engine::RouteSelector;

use crate::{OrderStore, PlanResult};

/// Look up `order_ids` and their locations in `store`, then run `selector`.
///
/// Location ids are requested once each, in the order they are first
/// referenced.  Store failures and engine failures are returned unchanged;
/// nothing is retried.
pub fn plan_best_route<S>(
    store:     &S,
    selector:  &RouteSelector,
    agent:     &AgentPosition,
    order_ids: &[OrderId],
) -> PlanResult<RouteResult>
where
    S: OrderStore + ?Sized,
{
    let span = tracing::info_span!("plan_best_route", orders = order_ids.len());
    let _enter = span.enter();

    let orders = store.orders_by_ids(order_ids)?;

    let mut location_ids: Vec<LocationId> = Vec::with_capacity(orders.len() * 2);
    for order in &orders {
        for id in [order.pickup, order.dropoff] {
            if !location_ids.contains(&id) {
                location_ids.push(id);
            }
        }
    }
    let locations = store.locations_by_ids(&location_ids)?;

    let route = selector.select(agent, &orders, &locations)?;
    tracing::info!(
        stops     = route.len(),
        total_min = route.total_time_minutes,
        "best route planned"
    );
    Ok(route)
}
