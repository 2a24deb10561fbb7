//! Walk counting under stop and distance bounds.
//!
//! A walk may repeat towns and edges. All three searches are depth-first
//! enumerations whose cost grows exponentially with the bound on graphs with
//! cycles; the bound is the only thing that makes them terminate. Each step
//! ticks a [`Meter`], so a caller can cap the total work.

use tracing::trace;

use super::budget::{Meter, Unmetered};
use super::engine::{NO_ROUTE, QueryEngine};
use crate::graph::VertexId;

impl QueryEngine<'_> {
    /// Number of trips from `from` to `to` with at most `max_stops` stops.
    ///
    /// A branch ends at the first edge that arrives at `to`: it counts as
    /// exactly one trip, replacing whatever its earlier siblings counted, and
    /// later siblings are not explored. Unknown towns give 0.
    pub fn trips_with_max_stops(&self, from: &str, to: &str, max_stops: u32) -> i64 {
        let Ok(count) = self.metered_trips_with_max_stops(from, to, max_stops, &mut Unmetered);
        count
    }

    pub(super) fn metered_trips_with_max_stops<M: Meter>(
        &self,
        from: &str,
        to: &str,
        max_stops: u32,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        let Some((src, dest)) = self.endpoints(from, to) else {
            return Ok(0);
        };
        let count = self.count_up_to_stops(src, dest, 0, max_stops, meter)?;
        trace!(from, to, max_stops, count, "Counted trips by maximum stops");
        Ok(count)
    }

    fn count_up_to_stops<M: Meter>(
        &self,
        current: VertexId,
        dest: VertexId,
        stops: u32,
        max_stops: u32,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        meter.tick()?;
        if stops > max_stops {
            return Ok(0);
        }

        let mut count = 0;
        for &(next, _) in self.graph.neighbours(current) {
            count += self.count_up_to_stops(next, dest, stops + 1, max_stops, meter)?;
            if next == dest {
                return Ok(1);
            }
        }
        Ok(count)
    }

    /// Number of walks from `from` to `to` using exactly `stops` edges.
    ///
    /// Intermediate visits to `to` do not end a walk. Unknown towns give
    /// [`NO_ROUTE`].
    pub fn trips_with_exact_stops(&self, from: &str, to: &str, stops: u32) -> i64 {
        let Ok(count) = self.metered_trips_with_exact_stops(from, to, stops, &mut Unmetered);
        count
    }

    pub(super) fn metered_trips_with_exact_stops<M: Meter>(
        &self,
        from: &str,
        to: &str,
        stops: u32,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        let Some((src, dest)) = self.endpoints(from, to) else {
            return Ok(NO_ROUTE);
        };
        let count = self.count_exact_stops(src, dest, stops, meter)?;
        trace!(from, to, stops, count, "Counted trips by exact stops");
        Ok(count)
    }

    fn count_exact_stops<M: Meter>(
        &self,
        current: VertexId,
        dest: VertexId,
        remaining: u32,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        meter.tick()?;
        if remaining == 0 {
            return Ok(i64::from(current == dest));
        }

        let mut count = 0;
        for &(next, _) in self.graph.neighbours(current) {
            count += self.count_exact_stops(next, dest, remaining - 1, meter)?;
        }
        Ok(count)
    }

    /// Number of walks from `from` to `to` with total distance strictly below
    /// `max_distance`.
    ///
    /// Every arrival at `to` below the bound counts, and the walk carries on
    /// from there. When `from == to` the empty walk is not a route, so the
    /// count starts at -1 to cancel it. Unknown towns give [`NO_ROUTE`].
    pub fn routes_with_max_distance(&self, from: &str, to: &str, max_distance: u64) -> i64 {
        let Ok(count) =
            self.metered_routes_with_max_distance(from, to, max_distance, &mut Unmetered);
        count
    }

    pub(super) fn metered_routes_with_max_distance<M: Meter>(
        &self,
        from: &str,
        to: &str,
        max_distance: u64,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        let Some((src, dest)) = self.endpoints(from, to) else {
            return Ok(NO_ROUTE);
        };
        let seed = if src == dest { -1 } else { 0 };
        let count = seed + self.count_below_distance(src, dest, 0, max_distance, meter)?;
        trace!(from, to, max_distance, count, "Counted routes by maximum distance");
        Ok(count)
    }

    fn count_below_distance<M: Meter>(
        &self,
        current: VertexId,
        dest: VertexId,
        distance: u64,
        max_distance: u64,
        meter: &mut M,
    ) -> Result<i64, M::Error> {
        meter.tick()?;
        let mut count = i64::from(current == dest && distance < max_distance);
        for &(next, weight) in self.graph.neighbours(current) {
            let next_distance = distance + u64::from(weight);
            if next_distance < max_distance {
                count +=
                    self.count_below_distance(next, dest, next_distance, max_distance, meter)?;
            }
        }
        Ok(count)
    }
}
