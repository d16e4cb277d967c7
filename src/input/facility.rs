//! Code for reading storage facility information from CSV files.
use super::*;
use crate::facility::FacilityMap;
use crate::id::IDCollection;
use crate::units::Tonnes;
use std::path::Path;

const FACILITIES_FILE_NAME: &str = "facilities.csv";

/// Reads storage facilities from a CSV file.
///
/// Each facility must reference a known location, and its available capacity must lie between
/// zero and its total capacity.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
/// * `location_ids` - All possible IDs for locations
///
/// # Returns
///
/// A [`FacilityMap`] with the parsed facility data or an error
pub fn read_facilities(
    model_dir: &Path,
    location_ids: &HashSet<LocationID>,
) -> Result<FacilityMap> {
    let file_path = model_dir.join(FACILITIES_FILE_NAME);
    let facilities: FacilityMap = read_csv_id_file(&file_path)?;

    for facility in facilities.values() {
        location_ids
            .get_id(&facility.location)
            .with_context(|| format!("Invalid location for facility {}", facility.id))?;
        ensure!(
            facility.total_capacity > Tonnes(0.0),
            "Facility {} must have a positive total capacity",
            facility.id
        );
        ensure!(
            facility.available_capacity >= Tonnes(0.0)
                && facility.available_capacity <= facility.total_capacity,
            "Facility {} must have an available capacity between zero and its total capacity",
            facility.id
        );
    }

    Ok(facilities)
}
