//! Code for reading transport vehicle information from CSV files.
use super::*;
use crate::units::{MoneyPerKilometer, Tonnes};
use crate::vehicle::VehicleMap;
use std::path::Path;

const VEHICLES_FILE_NAME: &str = "vehicles.csv";

/// Reads transport vehicles from a CSV file.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
///
/// # Returns
///
/// A [`VehicleMap`] with the parsed vehicle data or an error
pub fn read_vehicles(model_dir: &Path) -> Result<VehicleMap> {
    let file_path = model_dir.join(VEHICLES_FILE_NAME);
    let vehicles: VehicleMap = read_csv_id_file(&file_path)?;

    for vehicle in vehicles.values() {
        ensure!(
            vehicle.capacity > Tonnes(0.0),
            "Vehicle {} must have a positive capacity",
            vehicle.id
        );
        ensure!(
            vehicle.price_per_km >= MoneyPerKilometer(0.0),
            "Vehicle {} cannot have a negative price per km",
            vehicle.id
        );
    }

    Ok(vehicles)
}
