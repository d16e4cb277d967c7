//! The marketplace order book: a FIFO queue of buyer orders against crop listings.
use crate::crop::{CropID, CropMap};
use crate::units::{Money, Tonnes};
use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::fmt::Display;

/// The processing state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Queued, not yet taken up by the farmer
    Pending,
    /// Accepted by the farmer
    Confirmed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// A buyer's order against a crop listing
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// The order number, unique within an [`OrderBook`]
    pub id: u32,
    /// The buyer who placed the order
    pub buyer: String,
    /// The crop listing the order is placed against
    pub crop_id: CropID,
    /// The quantity ordered
    pub quantity: Tonnes,
    /// The total price at the listing's asking price
    pub total_price: Money,
    /// The processing state of the order
    pub status: OrderStatus,
    /// The date the order was placed
    pub placed_on: NaiveDate,
}

/// A FIFO queue of orders. Orders are processed strictly in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    orders: VecDeque<Order>,
    next_id: u32,
}

impl OrderBook {
    /// Create a new, empty order book
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of orders in the book
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the book contains no orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over the orders in the book, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// The number of orders still pending
    pub fn num_pending(&self) -> usize {
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count()
    }

    /// Place an order against a crop listing.
    ///
    /// Placing an order commits the listed quantity: the listing's remaining quantity is reduced
    /// by the ordered amount, so later orders cannot oversell the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown, or the quantity is not positive or exceeds
    /// what is listed.
    pub fn place(
        &mut self,
        crops: &mut CropMap,
        crop_id: &CropID,
        buyer: &str,
        quantity: Tonnes,
        placed_on: NaiveDate,
    ) -> Result<u32> {
        let crop = crops
            .get_mut(crop_id)
            .with_context(|| format!("Unknown crop listing {crop_id}"))?;
        ensure!(
            quantity > Tonnes(0.0),
            "Order quantity must be positive, got {} t",
            quantity.value()
        );
        ensure!(
            quantity <= crop.quantity,
            "Only {} t of {} listed, cannot order {} t",
            crop.quantity.value(),
            crop_id,
            quantity.value()
        );
        crop.quantity = crop.quantity - quantity;

        self.next_id += 1;
        let order = Order {
            id: self.next_id,
            buyer: buyer.to_string(),
            crop_id: crop_id.clone(),
            quantity,
            total_price: crop.price * quantity,
            status: OrderStatus::Pending,
            placed_on,
        };
        self.orders.push_back(order);

        Ok(self.next_id)
    }

    /// Confirm the oldest pending order, returning it.
    ///
    /// Returns `None` when no pending orders remain.
    pub fn confirm_next(&mut self) -> Option<&Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.status == OrderStatus::Pending)?;
        order.status = OrderStatus::Confirmed;
        Some(order)
    }
}

/// Aggregate figures across the marketplace, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketStats {
    /// The number of crop listings
    pub num_listings: usize,
    /// The total quantity across all listings
    pub total_listed: Tonnes,
    /// The number of storage facilities
    pub num_facilities: usize,
    /// The total capacity across all facilities
    pub total_storage_capacity: Tonnes,
    /// The capacity currently free across all facilities
    pub available_storage_capacity: Tonnes,
    /// The number of transport vehicles
    pub num_vehicles: usize,
    /// The number of orders still pending
    pub pending_orders: usize,
}

impl MarketStats {
    /// Gather aggregate figures from the marketplace state
    pub fn gather(
        crops: &CropMap,
        facilities: &crate::facility::FacilityMap,
        vehicles: &crate::vehicle::VehicleMap,
        orders: &OrderBook,
    ) -> Self {
        fn total(values: impl Iterator<Item = Tonnes>) -> Tonnes {
            values.fold(Tonnes(0.0), |acc, value| acc + value)
        }

        Self {
            num_listings: crops.len(),
            total_listed: total(crops.values().map(|crop| crop.quantity)),
            num_facilities: facilities.len(),
            total_storage_capacity: total(
                facilities.values().map(|facility| facility.total_capacity),
            ),
            available_storage_capacity: total(
                facilities
                    .values()
                    .map(|facility| facility.available_capacity),
            ),
            num_vehicles: vehicles.len(),
            pending_orders: orders.num_pending(),
        }
    }
}
