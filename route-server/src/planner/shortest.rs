//! Shortest route by total distance (Dijkstra).

use tracing::trace;

use super::engine::{NO_ROUTE, QueryEngine};
use crate::graph::VertexId;
use crate::queue::PriorityQueue;

impl QueryEngine<'_> {
    /// Length of the shortest route from `from` to `to`.
    ///
    /// A route must travel at least one edge: when `from == to` the origin is
    /// not seeded with distance 0, so the answer is the shortest cycle through
    /// that town. Returns [`NO_ROUTE`] if either town is unknown or `to` is
    /// unreachable.
    pub fn shortest_distance(&self, from: &str, to: &str) -> i64 {
        let Some((src, dest)) = self.endpoints(from, to) else {
            return NO_ROUTE;
        };

        let n = self.graph.len();
        // `None` is an infinite distance.
        let mut best: Vec<Option<i64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue =
            PriorityQueue::new(|a: &(VertexId, i64), b: &(VertexId, i64)| a.1.cmp(&b.1));

        queue.enqueue((src, 0));
        if src != dest {
            best[src.index()] = Some(0);
        }

        // Stale entries for already-settled towns are skipped, never removed.
        while let Ok((current, current_dist)) = queue.dequeue() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;

            trace!(
                town = %self.graph.vertex(current).town(),
                distance = current_dist,
                queued = queue.len(),
                "Dijkstra settled town"
            );

            for &(next, weight) in self.graph.neighbours(current) {
                let candidate = current_dist + i64::from(weight);
                if best[next.index()].is_none_or(|known| candidate < known) {
                    best[next.index()] = Some(candidate);
                    queue.enqueue((next, candidate));
                }
            }
        }

        best[dest.index()].unwrap_or(NO_ROUTE)
    }
}
