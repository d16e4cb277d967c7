//! Code for reading the route network from CSV files.
use super::*;
use crate::id::IDCollection;
use crate::network::RouteNetwork;
use crate::units::Kilometers;
use log::warn;
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const ROUTES_FILE_NAME: &str = "routes.csv";

/// A single route link as it appears in the routes CSV file
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct RouteLinkRaw {
    from: LocationID,
    to: LocationID,
    distance_km: Kilometers,
}

/// Reads the route network from a CSV file of links.
///
/// Links are undirected: each row adds both directions with the same distance. A location that
/// no link references is not part of the network, so route queries involving it find no route.
///
/// Logs a warning if the resulting network is disconnected, since routes between components will
/// not exist.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
/// * `location_ids` - All possible IDs for locations
///
/// # Returns
///
/// A validated [`RouteNetwork`] or an error
pub fn read_network(
    model_dir: &Path,
    location_ids: &HashSet<LocationID>,
) -> Result<RouteNetwork> {
    let file_path = model_dir.join(ROUTES_FILE_NAME);
    let links = read_csv::<RouteLinkRaw>(&file_path)?;
    let network = network_from_links(links, location_ids)
        .with_context(|| format!("Error validating {}", file_path.display()))?;

    let num_components = count_components(&network);
    if num_components > 1 {
        warn!("Route network is disconnected ({num_components} components)");
    }

    Ok(network)
}

/// Build and validate a network from raw link records
fn network_from_links<I>(links: I, location_ids: &HashSet<LocationID>) -> Result<RouteNetwork>
where
    I: IntoIterator<Item = RouteLinkRaw>,
{
    let mut network = RouteNetwork::new();
    for link in links {
        let from = location_ids.get_id(&link.from)?;
        let to = location_ids.get_id(&link.to)?;
        ensure!(from != to, "Link from {from} to itself is not allowed");
        ensure!(
            link.distance_km > Kilometers(0.0),
            "Link from {from} to {to} must have a positive distance"
        );
        ensure!(
            !network.neighbours(&from).any(|(id, _)| *id == to),
            "Duplicate link between {from} and {to}"
        );
        network.add_link(from, to, link.distance_km);
    }

    Ok(network)
}

/// The number of connected components in the network, counting linked locations only
fn count_components(network: &RouteNetwork) -> usize {
    let mut graph: UnGraph<&LocationID, ()> = UnGraph::new_undirected();
    let indices: HashMap<&LocationID, _> = network
        .locations()
        .map(|id| (id, graph.add_node(id)))
        .collect();
    for location_id in network.locations() {
        for (neighbour, _) in network.neighbours(location_id) {
            // Each link appears in both directions; add each edge once
            if location_id < neighbour {
                graph.add_edge(indices[location_id], indices[neighbour], ());
            }
        }
    }

    connected_components(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn location_ids() -> HashSet<LocationID> {
        ["Lahore".into(), "Islamabad".into(), "Peshawar".into()]
            .into_iter()
            .collect()
    }

    fn link(from: &str, to: &str, distance_km: f64) -> RouteLinkRaw {
        RouteLinkRaw {
            from: from.into(),
            to: to.into(),
            distance_km: Kilometers(distance_km),
        }
    }

    #[rstest]
    fn test_network_from_links(location_ids: HashSet<LocationID>) {
        let network = network_from_links(
            [link("Lahore", "Islamabad", 375.0), link("Islamabad", "Peshawar", 180.0)],
            &location_ids,
        )
        .unwrap();
        assert_eq!(network.num_locations(), 3);
        assert_eq!(count_components(&network), 1);
    }

    #[rstest]
    fn test_network_from_links_unknown_location(location_ids: HashSet<LocationID>) {
        let result = network_from_links([link("Lahore", "Atlantis", 100.0)], &location_ids);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_network_from_links_self_loop(location_ids: HashSet<LocationID>) {
        let result = network_from_links([link("Lahore", "Lahore", 1.0)], &location_ids);
        assert!(result.is_err());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-375.0)]
    fn test_network_from_links_non_positive_distance(
        location_ids: HashSet<LocationID>,
        #[case] distance_km: f64,
    ) {
        let result =
            network_from_links([link("Lahore", "Islamabad", distance_km)], &location_ids);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_network_from_links_duplicate(location_ids: HashSet<LocationID>) {
        // A duplicate link is rejected whichever direction it is written in
        let result = network_from_links(
            [link("Lahore", "Islamabad", 375.0), link("Islamabad", "Lahore", 370.0)],
            &location_ids,
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_count_components_disconnected(location_ids: HashSet<LocationID>) {
        let mut location_ids = location_ids;
        location_ids.extend(["Gwadar".into(), "Turbat".into()]);
        let network = network_from_links(
            [link("Lahore", "Islamabad", 375.0), link("Gwadar", "Turbat", 120.0)],
            &location_ids,
        )
        .unwrap();
        assert_eq!(count_components(&network), 2);
    }
}
