//! Order attribute types shared between the engine and its callers

use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// Fulfillment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    /// Courier delivery to a customer address
    Delivery,
    /// Customer picks the order up themselves
    OwnPickup,
    DineIn,
    /// Ordered from a table QR/session inside the venue
    TableOrder,
}

impl DeliveryType {
    /// Parse a wire tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "delivery" => Some(Self::Delivery),
            "own_pickup" | "pickup" => Some(Self::OwnPickup),
            "dine_in" => Some(Self::DineIn),
            "table_order" => Some(Self::TableOrder),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::OwnPickup => "own_pickup",
            Self::DineIn => "dine_in",
            Self::TableOrder => "table_order",
        }
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    /// Card terminal brought by the courier
    CardOnDelivery,
    OnlinePayment,
    /// Polish BLIK instant transfer
    Blik,
}

impl PaymentMethod {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "cash" => Some(Self::Cash),
            "card_on_delivery" => Some(Self::CardOnDelivery),
            "online_payment" => Some(Self::OnlinePayment),
            "blik" => Some(Self::Blik),
            _ => None,
        }
    }

    /// Settled in person on handover — the restaurant sees the order at once
    pub fn is_cash_like(&self) -> bool {
        matches!(self, Self::Cash | Self::CardOnDelivery)
    }

    /// Settled through a payment provider before the restaurant is informed
    pub fn is_online(&self) -> bool {
        matches!(self, Self::OnlinePayment | Self::Blik)
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    NotPaid,
    Paid,
}

/// Order status
///
/// Only the initial statuses are assigned by the engine; later transitions
/// (in progress, done, rejected) are driven externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Awaiting online payment; hidden from restaurant staff
    WaitingForPayment,
    /// Placed and visible, not yet accepted by the restaurant
    New,
    /// Accepted (initial status for staff-entered orders)
    Accepted,
}

/// Source channel the order arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSource {
    #[default]
    Mobile,
    Web,
    Pos,
}

impl OrderSource {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mobile" => Some(Self::Mobile),
            "web" => Some(Self::Web),
            "pos" | "POS" => Some(Self::Pos),
            _ => None,
        }
    }
}

/// Delivery address as supplied by the customer
///
/// `location` is the geocoded point used for zone resolution; a missing
/// point is the distinct "unknown location" state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street_and_number: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
    /// Customer asked to save this address to their profile
    #[serde(default)]
    pub save_address: bool,
}

/// Guest contact data for orders placed without an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
