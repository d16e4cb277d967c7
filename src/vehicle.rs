//! Transport vehicles and cost quotes for moving goods along a route.
use crate::id::{define_id_getter, define_id_type};
use crate::network::{Route, TravelTime};
use crate::units::{KilometersPerHour, Money, MoneyPerKilometer, Tonnes};
use anyhow::{Result, ensure};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};

define_id_type! {VehicleID}

/// A map of [`Vehicle`]s, keyed by vehicle ID
pub type VehicleMap = IndexMap<VehicleID, Vehicle>;

/// Whether a vehicle can currently take bookings
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum VehicleStatus {
    /// Free to take a booking
    #[string = "available"]
    Available,
    /// Already committed to a transport request
    #[string = "booked"]
    Booked,
}

/// A transport vehicle offered by a transport provider
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Vehicle {
    /// A unique identifier for the vehicle (e.g. "reefer1")
    pub id: VehicleID,
    /// The kind of vehicle (e.g. "Refrigerated Truck")
    pub kind: String,
    /// The maximum load the vehicle can carry
    pub capacity: Tonnes,
    /// The price charged per kilometre travelled
    pub price_per_km: MoneyPerKilometer,
    /// Whether the vehicle can currently take bookings
    pub status: VehicleStatus,
}
define_id_getter! {Vehicle, VehicleID}

/// A cost and time quote for carrying a load along a route.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportQuote {
    /// The vehicle quoted
    pub vehicle_id: VehicleID,
    /// The total price for the journey
    pub cost: Money,
    /// The estimated journey time
    pub time: TravelTime,
}

impl Vehicle {
    /// Quote the cost and time for carrying `quantity` along `route`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle is not available or the load exceeds its capacity.
    pub fn quote(
        &self,
        route: &Route,
        quantity: Tonnes,
        average_speed: KilometersPerHour,
    ) -> Result<TransportQuote> {
        ensure!(
            self.status == VehicleStatus::Available,
            "Vehicle {} is not available",
            self.id
        );
        ensure!(
            quantity <= self.capacity,
            "Load of {} t exceeds the capacity of vehicle {} ({} t)",
            quantity.value(),
            self.id,
            self.capacity.value()
        );

        Ok(TransportQuote {
            vehicle_id: self.id.clone(),
            cost: self.price_per_km * route.distance,
            time: route.estimated_time(average_speed),
        })
    }
}
