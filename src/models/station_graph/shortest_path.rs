use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use super::StationGraph;
use crate::constants::DISTANCE_DECIMALS;
use crate::models::StationCode;

/// Least-cost route between two stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Total distance, rounded to two decimals
    pub distance_km: f64,
    /// Station codes from origin to destination, both inclusive
    pub path: Vec<StationCode>,
}

/// Round a distance to `DISTANCE_DECIMALS` places, half away from zero
///
/// The scaled value is first snapped to nine decimals so that binary noise
/// does not decide the rounding direction (`1.005` rounds to `1.01`, and
/// `3.3330000000000004` rounds to `3.33`).
#[must_use]
pub fn round_km(distance_km: f64) -> f64 {
    if !distance_km.is_finite() {
        return distance_km;
    }

    let factor = 10f64.powi(DISTANCE_DECIMALS);
    let scaled = distance_km * factor;
    let snapped = if scaled.abs() < 1e6 {
        (scaled * 1e9).round() / 1e9
    } else {
        scaled
    };

    snapped.round() / factor
}

/// Extension trait for path finding on `StationGraph`
pub trait ShortestPath {
    /// Find the least-cost path with Dijkstra's algorithm
    ///
    /// Returns `None` when either station has no adjacency entry or when no
    /// route connects them. The two cases are not distinguished.
    fn shortest_path(&self, from: &str, to: &str) -> Option<PathResult>;
}

/// Min-heap entry. Equal distances pop in insertion order.
struct QueueEntry<'a> {
    distance: f64,
    sequence: u64,
    station: &'a StationCode,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for BinaryHeap (max-heap)
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl ShortestPath for StationGraph {
    fn shortest_path(&self, from: &str, to: &str) -> Option<PathResult> {
        let (source, _) = self.adjacency.get_key_value(from)?;
        let (target, _) = self.adjacency.get_key_value(to)?;

        if source == target {
            return Some(PathResult {
                distance_km: 0.0,
                path: vec![source.clone()],
            });
        }

        let mut distances: HashMap<&StationCode, f64> = self
            .adjacency
            .keys()
            .map(|code| (code, f64::INFINITY))
            .collect();
        let mut previous: HashMap<&StationCode, &StationCode> = HashMap::new();
        let mut visited: HashSet<&StationCode> = HashSet::new();
        let mut queue = BinaryHeap::new();
        let mut sequence = 0u64;

        distances.insert(source, 0.0);
        queue.push(QueueEntry {
            distance: 0.0,
            sequence,
            station: source,
        });

        while let Some(QueueEntry { station: current, .. }) = queue.pop() {
            // Entries are never removed on improvement, so a station can be
            // queued several times. Only its first pop carries the final distance.
            if !visited.insert(current) {
                continue;
            }

            if current == target {
                break;
            }

            let Some(neighbors) = self.adjacency.get(current) else {
                continue;
            };
            let current_distance = distances.get(current).copied().unwrap_or(f64::INFINITY);

            for (neighbor, weight) in neighbors {
                if visited.contains(neighbor) {
                    continue;
                }

                let candidate = current_distance + weight;
                let known = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);

                if candidate < known {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, current);
                    sequence += 1;
                    queue.push(QueueEntry {
                        distance: candidate,
                        sequence,
                        station: neighbor,
                    });
                }
            }
        }

        let total = distances.get(target).copied().unwrap_or(f64::INFINITY);
        if total.is_infinite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(&prev) = previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();

        Some(PathResult {
            distance_km: round_km(total),
            path,
        })
    }
}
