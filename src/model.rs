//! Code for logistics models: the bundle of locations, routes, facilities, vehicles and crops.
use crate::crop::CropMap;
use crate::facility::{Allocation, FacilityMap, allocate};
use crate::location::{LocationID, LocationMap};
use crate::network::{Route, RouteNetwork};
use crate::units::Tonnes;
use crate::vehicle::VehicleMap;
use anyhow::Result;
use std::path::Path;

pub mod parameters;
pub use parameters::ModelParameters;

/// A logistics model, loaded from a model directory.
///
/// Holds the full static state the planning operations work over. The model itself is read-only
/// for route and allocation queries; only explicit commit operations (reserving storage, placing
/// orders) change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Model-wide parameters
    pub parameters: ModelParameters,
    /// The locations goods can be moved between
    pub locations: LocationMap,
    /// The route network connecting the locations
    pub network: RouteNetwork,
    /// The storage facilities, keyed by ID
    pub facilities: FacilityMap,
    /// The transport vehicles, keyed by ID
    pub vehicles: VehicleMap,
    /// The crop listings, keyed by ID
    pub crops: CropMap,
}

impl Model {
    /// Read a model from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    pub fn from_path<P: AsRef<Path>>(model_dir: P) -> Result<Model> {
        crate::input::load_model(model_dir.as_ref())
    }

    /// Find the least-cost route between two locations.
    ///
    /// Returns `None` if either location is unknown or no route exists.
    pub fn shortest_route(&self, source: &LocationID, destination: &LocationID) -> Option<Route> {
        self.network.shortest_path(source, destination)
    }

    /// Choose the best-fit facility for storing the requested quantity, using the model's
    /// allocation policy.
    ///
    /// This is a pure decision; commit it with
    /// [`StorageFacility::reserve`](crate::facility::StorageFacility::reserve).
    pub fn best_storage(&self, quantity: Tonnes) -> Option<Allocation> {
        allocate(
            self.facilities.values(),
            quantity,
            &self.parameters.allocation_policy(),
        )
    }
}
