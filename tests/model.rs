//! Integration test which loads and queries the demo model.
use agriconnect::model::Model;
use agriconnect::units::{Kilometers, Tonnes};
use std::path::PathBuf;

/// Get the path to the demo model.
fn get_model_dir() -> PathBuf {
    PathBuf::from("demos/pakistan")
}

#[test]
fn test_model_from_path() {
    let model = Model::from_path(get_model_dir()).unwrap();
    assert_eq!(model.locations.len(), 8);
    assert_eq!(model.network.num_locations(), 8);
    assert_eq!(model.facilities.len(), 4);
    assert_eq!(model.vehicles.len(), 3);
    assert_eq!(model.crops.len(), 4);
}

#[test]
fn test_demo_model_route() {
    let model = Model::from_path(get_model_dir()).unwrap();
    let route = model
        .shortest_route(&"Lahore".into(), &"Peshawar".into())
        .unwrap();
    assert_eq!(route.distance, Kilometers(825.0));
    assert_eq!(
        route.path,
        vec!["Lahore".into(), "Islamabad".into(), "Peshawar".into()]
    );
}

#[test]
fn test_demo_model_allocation() {
    let model = Model::from_path(get_model_dir()).unwrap();
    // Scores: lahore_cold 8000, karachi_hub 11990, multan_store 6995, islamabad_chain 9995
    let allocation = model.best_storage(Tonnes(500.0)).unwrap();
    assert_eq!(allocation.facility_id, "karachi_hub".into());
}
