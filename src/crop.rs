//! Crop listings offered by farmers on the marketplace.
use crate::id::{define_id_getter, define_id_type};
use crate::units::{MoneyPerTonne, Tonnes};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};

define_id_type! {CropID}

/// A map of [`Crop`]s, keyed by crop ID
pub type CropMap = IndexMap<CropID, Crop>;

/// The quality grade of a crop listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum Quality {
    /// Premium grade
    #[string = "A"]
    A,
    /// Standard grade
    #[string = "B"]
    B,
    /// Economy grade
    #[string = "C"]
    C,
}

/// A crop listing within the marketplace
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Crop {
    /// A unique identifier for the listing (e.g. "wheat1")
    pub id: CropID,
    /// The kind of crop (e.g. "Wheat")
    pub kind: String,
    /// The quantity offered for sale
    pub quantity: Tonnes,
    /// The quality grade of the listing
    pub quality: Quality,
    /// The asking price per tonne
    pub price: MoneyPerTonne,
    /// The farmer offering the listing
    pub farmer: String,
    /// The date the crop was harvested
    pub harvest_date: NaiveDate,
}
define_id_getter! {Crop, CropID}
