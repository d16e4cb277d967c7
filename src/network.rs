//! The route network: a weighted undirected graph of locations with shortest-path search.
//!
//! The network is a static structure built once from input data. Shortest-path queries are pure:
//! they do not modify the network and identical queries always return identical results.
use crate::location::LocationID;
use crate::units::{Kilometers, KilometersPerHour};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::fmt::Display;

/// Adjacency map: location -> (neighbouring location -> link distance)
type AdjacencyMap = IndexMap<LocationID, IndexMap<LocationID, Kilometers>>;

/// A weighted undirected graph of locations.
///
/// Links are symmetric: adding a link from A to B also adds the reverse link with the same
/// distance. The network is not required to be connected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteNetwork {
    edges: AdjacencyMap,
}

impl RouteNetwork {
    /// Create a new, empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of locations in the network
    pub fn num_locations(&self) -> usize {
        self.edges.len()
    }

    /// Whether the network contains no locations
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the given location is part of the network
    pub fn contains(&self, location_id: &LocationID) -> bool {
        self.edges.contains_key(location_id)
    }

    /// Iterate over the locations in the network, in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &LocationID> {
        self.edges.keys()
    }

    /// Iterate over the neighbours of the given location with their link distances.
    ///
    /// Yields nothing if the location is not part of the network.
    pub fn neighbours(
        &self,
        location_id: &LocationID,
    ) -> impl Iterator<Item = (&LocationID, Kilometers)> {
        self.edges
            .get(location_id)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(id, distance)| (id, *distance)))
    }

    /// Add a symmetric link between two locations.
    ///
    /// Both endpoints are added to the network if not already present. Distances must be
    /// positive; the input layer enforces this before the network is built.
    pub fn add_link(&mut self, a: LocationID, b: LocationID, distance: Kilometers) {
        self.edges
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), distance);
        self.edges.entry(b).or_default().insert(a, distance);
    }

    /// Find the least-cost route between two locations.
    ///
    /// This is a single-source shortest-path relaxation (Dijkstra) with a linear scan over the
    /// unvisited set, which is O(V²). At the expected network size (tens of locations) this beats
    /// the bookkeeping overhead of a priority queue. When two unvisited locations have the same
    /// tentative distance, the lexicographically smallest ID is selected, so results are
    /// deterministic regardless of container iteration order.
    ///
    /// The search stops as soon as the destination is selected, or when every remaining location
    /// is unreachable.
    ///
    /// # Returns
    ///
    /// The route from `source` to `destination`, or `None` if either location is not part of the
    /// network or no path exists. Callers must treat `None` as the authoritative "no route"
    /// signal.
    pub fn shortest_path(&self, source: &LocationID, destination: &LocationID) -> Option<Route> {
        if !self.contains(source) || !self.contains(destination) {
            return None;
        }

        let mut distances: HashMap<&LocationID, f64> =
            self.edges.keys().map(|id| (id, f64::INFINITY)).collect();
        let mut predecessors: HashMap<&LocationID, &LocationID> = HashMap::new();
        let mut unvisited: IndexSet<&LocationID> = self.edges.keys().collect();
        distances.insert(source, 0.0);

        loop {
            // Select the unvisited location with minimum tentative distance, breaking ties by ID
            let current = *unvisited
                .iter()
                .min_by(|a, b| distances[*a].total_cmp(&distances[*b]).then_with(|| a.cmp(b)))?;

            let current_distance = distances[current];
            if current_distance.is_infinite() {
                // Every remaining location is unreachable from the source
                return None;
            }
            if current == destination {
                return Some(Route {
                    distance: Kilometers(current_distance),
                    path: reconstruct_path(&predecessors, source, destination),
                });
            }
            unvisited.swap_remove(current);

            // Relax all links out of the current location
            for (neighbour, link_distance) in self.neighbours(current) {
                if !unvisited.contains(neighbour) {
                    continue;
                }
                let candidate = current_distance + link_distance.value();
                if candidate < distances[neighbour] {
                    distances.insert(neighbour, candidate);
                    predecessors.insert(neighbour, current);
                }
            }
        }
    }
}

/// Walk the predecessor map backwards from destination to source.
///
/// Only called once the destination has been selected with a finite distance, so the chain is
/// guaranteed to terminate at the source.
fn reconstruct_path(
    predecessors: &HashMap<&LocationID, &LocationID>,
    source: &LocationID,
    destination: &LocationID,
) -> Vec<LocationID> {
    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != source {
        current = predecessors[current];
        path.push(current.clone());
    }
    path.reverse();
    path
}

/// A least-cost route between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// The total distance along the route
    pub distance: Kilometers,
    /// The locations along the route, from source to destination inclusive
    pub path: Vec<LocationID>,
}

impl Route {
    /// Estimate the travel time for this route at the given average speed
    pub fn estimated_time(&self, average_speed: KilometersPerHour) -> TravelTime {
        TravelTime::estimate(self.distance, average_speed)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut path = self.path.iter();
        if let Some(first) = path.next() {
            write!(f, "{first}")?;
        }
        for location_id in path {
            write!(f, " -> {location_id}")?;
        }
        Ok(())
    }
}

/// An estimated travel time, split into whole hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTime {
    /// Whole hours of travel
    pub hours: u32,
    /// Remaining whole minutes of travel
    pub minutes: u32,
}

impl TravelTime {
    /// Estimate the travel time for a distance at the given average speed.
    ///
    /// The estimate is floor(distance / speed) hours plus the remainder converted to whole
    /// minutes at the same speed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate(distance: Kilometers, average_speed: KilometersPerHour) -> Self {
        let total = (distance / average_speed).value();
        let hours = total.floor();
        let minutes = ((total - hours) * 60.0).floor();

        Self {
            hours: hours as u32,
            minutes: minutes as u32,
        }
    }
}

impl Display for TravelTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
