//! Common routines for loading model data from a model directory.
use crate::id::{HasID, IDLike};
use crate::location::LocationID;
use crate::model::{Model, ModelParameters};
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub mod crop;
pub mod facility;
pub mod location;
pub mod network;
pub mod vehicle;

const MODEL_PARAMETERS_FILE_NAME: &str = "model.toml";

/// Parse a TOML file at the specified path.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let contents = fs::read_to_string(file_path)
        .with_context(|| format!("Could not read file {}", file_path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Error parsing TOML file {}", file_path.display()))
}

/// Read a series of type `T`s from a CSV file.
///
/// Will return an error if the file is missing, malformed or empty.
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not read file {}", file_path.display()))?;

    let records: Vec<T> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("Error parsing CSV file {}", file_path.display()))?;
    ensure!(
        !records.is_empty(),
        "CSV file {} cannot be empty",
        file_path.display()
    );

    Ok(records)
}

/// Read a CSV file of entities with IDs into a map keyed by ID.
///
/// Will return an error if the same ID appears twice.
pub fn read_csv_id_file<T, ID>(file_path: &Path) -> Result<IndexMap<ID, T>>
where
    T: HasID<ID> + DeserializeOwned,
    ID: IDLike,
{
    let mut map = IndexMap::new();
    for entry in read_csv::<T>(file_path)? {
        let id = entry.get_id().clone();
        ensure!(
            map.insert(id.clone(), entry).is_none(),
            "Duplicate ID {} in file {}",
            id,
            file_path.display()
        );
    }

    Ok(map)
}

/// Load a model from the specified directory, validating cross-references between files.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
pub fn load_model(model_dir: &Path) -> Result<Model> {
    let file_path = model_dir.join(MODEL_PARAMETERS_FILE_NAME);
    let parameters: ModelParameters = read_toml(&file_path)?;
    parameters
        .validate()
        .with_context(|| format!("Invalid parameters in {}", file_path.display()))?;

    let locations = location::read_locations(model_dir)?;
    let location_ids: HashSet<LocationID> = locations.keys().cloned().collect();

    let network = network::read_network(model_dir, &location_ids)?;
    let facilities = facility::read_facilities(model_dir, &location_ids)?;
    let vehicles = vehicle::read_vehicles(model_dir)?;
    let crops = crop::read_crops(model_dir)?;

    Ok(Model {
        parameters,
        locations,
        network,
        facilities,
        vehicles,
        crops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_csv_empty_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("locations.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,description").unwrap();
        }
        assert!(read_csv::<Location>(&file_path).is_err());
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_csv::<Location>(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_load_model_invalid_parameters() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MODEL_PARAMETERS_FILE_NAME), "average_speed_km_h = 0.0")
            .unwrap();

        // Parameters are checked before any CSV file is read
        let result = load_model(dir.path());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Invalid parameters")
        );
    }

    #[test]
    fn test_read_csv_id_file_duplicate() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("locations.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "id,description\nLahore,Lahore\nLahore,Also Lahore").unwrap();
        }
        let result = read_csv_id_file::<Location, _>(&file_path);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Duplicate ID Lahore")
        );
    }
}
