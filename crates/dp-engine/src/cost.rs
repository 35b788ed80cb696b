//! Scoring of a single candidate ordering.

use dp_core::{GeoModel, GeoPoint, RouteResult, RouteStep};

use crate::index::StopIndex;
use crate::sequence::Stop;

/// Walks an ordering from a start point and accumulates travel plus wait
/// time per step.
///
/// Step time = travel from the previous position (the start, for the first
/// stop) + the stop's wait from the [`StopIndex`].
pub struct CostEvaluator<'i, 'a> {
    geo:   GeoModel,
    index: &'i StopIndex<'a>,
}

impl<'i, 'a> CostEvaluator<'i, 'a> {
    pub fn new(geo: GeoModel, index: &'i StopIndex<'a>) -> Self {
        Self { geo, index }
    }

    #[inline]
    fn step_minutes(&self, from: GeoPoint, stop: Stop) -> (f64, GeoPoint) {
        let to = self.index.location(stop).point();
        let minutes = self.geo.travel_minutes(from, to) + self.index.wait_minutes(stop);
        (minutes, to)
    }

    /// Total minutes for `ordering` without materialising the steps.
    ///
    /// Bit-identical to `evaluate(start, ordering).total_time_minutes`.
    pub fn total_minutes(&self, start: GeoPoint, ordering: &[Stop]) -> f64 {
        let mut here = start;
        let mut total = 0.0;
        for &stop in ordering {
            let (minutes, next) = self.step_minutes(here, stop);
            total += minutes;
            here = next;
        }
        total
    }

    /// Full route for `ordering`, one [`RouteStep`] per stop.
    pub fn evaluate(&self, start: GeoPoint, ordering: &[Stop]) -> RouteResult {
        let mut here = start;
        let mut total = 0.0;
        let mut steps = Vec::with_capacity(ordering.len());
        for &stop in ordering {
            let (minutes, next) = self.step_minutes(here, stop);
            let location = self.index.location(stop);
            total += minutes;
            here = next;
            steps.push(RouteStep {
                location_id:       location.id,
                label:             location.name.clone(),
                step_time_minutes: minutes,
                order_id:          self.index.order(stop.order).order.id,
                kind:              stop.kind,
            });
        }
        RouteResult { total_time_minutes: total, steps }
    }
}
