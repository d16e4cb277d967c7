//! Locations represent the named places (cities, towns) connected by the route network.
use crate::id::{define_id_getter, define_id_type};
use indexmap::IndexMap;
use serde::Deserialize;

define_id_type! {LocationID}

/// A map of [`Location`]s, keyed by location ID
pub type LocationMap = IndexMap<LocationID, Location>;

/// Represents a location with an ID and a longer description.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Location {
    /// A unique identifier for a location (e.g. "Lahore").
    pub id: LocationID,
    /// A text description of the location (e.g. "Lahore, Punjab").
    pub description: String,
}
define_id_getter! {Location, LocationID}
