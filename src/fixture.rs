//! Fixtures for tests
use crate::crop::{Crop, CropMap, Quality};
use crate::facility::{FacilityMap, StorageFacility};
use crate::location::{Location, LocationMap};
use crate::model::{Model, ModelParameters};
use crate::network::RouteNetwork;
use crate::units::{Celsius, Kilometers, MoneyPerKilometer, MoneyPerTonne, Tonnes};
use crate::vehicle::{Vehicle, VehicleMap, VehicleStatus};
use chrono::NaiveDate;
use indexmap::indexmap;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn locations() -> LocationMap {
    [
        "Lahore", "Islamabad", "Peshawar", "Multan", "Karachi", "Gwadar", "Turbat",
    ]
    .into_iter()
    .map(|id| {
        (
            id.into(),
            Location {
                id: id.into(),
                description: id.to_string(),
            },
        )
    })
    .collect()
}

#[fixture]
pub fn network() -> RouteNetwork {
    let mut network = RouteNetwork::new();
    network.add_link("Lahore".into(), "Islamabad".into(), Kilometers(375.0));
    network.add_link("Islamabad".into(), "Peshawar".into(), Kilometers(180.0));
    network.add_link("Lahore".into(), "Multan".into(), Kilometers(342.0));
    network.add_link("Multan".into(), "Karachi".into(), Kilometers(980.0));

    // A second component, unreachable from the rest
    network.add_link("Gwadar".into(), "Turbat".into(), Kilometers(120.0));

    network
}

#[fixture]
pub fn facilities() -> FacilityMap {
    let facility = |id: &str, location: &str, total: f64, available: f64, temperature: f64| {
        StorageFacility {
            id: id.into(),
            description: id.to_string(),
            location: location.into(),
            total_capacity: Tonnes(total),
            available_capacity: Tonnes(available),
            temperature: Celsius(temperature),
        }
    };

    indexmap! {
        "lahore_cold".into() => facility("lahore_cold", "Lahore", 10_000.0, 8_000.0, 4.0),
        "karachi_hub".into() => facility("karachi_hub", "Karachi", 15_000.0, 12_000.0, 5.0),
        "multan_store".into() => facility("multan_store", "Multan", 8_000.0, 7_000.0, 3.5),
    }
}

#[fixture]
pub fn vehicles() -> VehicleMap {
    indexmap! {
        "reefer1".into() => Vehicle {
            id: "reefer1".into(),
            kind: "Refrigerated Truck".to_string(),
            capacity: Tonnes(5_000.0),
            price_per_km: MoneyPerKilometer(15.0),
            status: VehicleStatus::Available,
        },
        "van1".into() => Vehicle {
            id: "van1".into(),
            kind: "Cargo Van".to_string(),
            capacity: Tonnes(2_000.0),
            price_per_km: MoneyPerKilometer(12.0),
            status: VehicleStatus::Booked,
        },
    }
}

#[fixture]
pub fn crops() -> CropMap {
    indexmap! {
        "wheat1".into() => Crop {
            id: "wheat1".into(),
            kind: "Wheat".to_string(),
            quantity: Tonnes(5_000.0),
            quality: Quality::A,
            price: MoneyPerTonne(85.0),
            farmer: "farmer1".to_string(),
            harvest_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        },
        "rice1".into() => Crop {
            id: "rice1".into(),
            kind: "Rice".to_string(),
            quantity: Tonnes(3_000.0),
            quality: Quality::B,
            price: MoneyPerTonne(120.0),
            farmer: "farmer1".to_string(),
            harvest_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
        },
    }
}

#[fixture]
pub fn model(
    locations: LocationMap,
    network: RouteNetwork,
    facilities: FacilityMap,
    vehicles: VehicleMap,
    crops: CropMap,
) -> Model {
    Model {
        parameters: ModelParameters::default(),
        locations,
        network,
        facilities,
        vehicles,
        crops,
    }
}
