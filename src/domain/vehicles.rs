// src/domain/vehicles.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::money::Amount;
use super::core::VehicleId;
use super::states::AuctionState;

/// The closed set of vehicle subtypes the auction house accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Hatchback,
    Sedan,
    Suv,
    Truck,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Hatchback => write!(f, "Hatchback"),
            VehicleType::Sedan => write!(f, "Sedan"),
            VehicleType::Suv => write!(f, "SUV"),
            VehicleType::Truck => write!(f, "Truck"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = String;

    // The discriminant is matched case-sensitively; search filtering is the
    // place for forgiving comparisons, not the type tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hatchback" => Ok(VehicleType::Hatchback),
            "Sedan" => Ok(VehicleType::Sedan),
            "SUV" => Ok(VehicleType::Suv),
            "Truck" => Ok(VehicleType::Truck),
            _ => Err(format!("Unknown vehicle type: {}", s)),
        }
    }
}

impl Serialize for VehicleType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for VehicleType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        VehicleType::from_str(&text).map_err(serde::de::Error::custom)
    }
}

/// The one extra attribute that distinguishes each subtype. The fields stay
/// optional through construction; whether they are required and in range is
/// decided by validation, not by the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VehicleDetails {
    Hatchback {
        #[serde(rename = "numberOfDoors")]
        number_of_doors: Option<u32>,
    },
    Sedan {
        #[serde(rename = "numberOfDoors")]
        number_of_doors: Option<u32>,
    },
    Suv {
        #[serde(rename = "numberOfSeats")]
        number_of_seats: Option<u32>,
    },
    Truck {
        #[serde(rename = "loadCapacity")]
        load_capacity: Option<Decimal>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
    pub identifier: VehicleId,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "startingBid")]
    pub starting_bid: Amount,
    #[serde(rename = "highestBid")]
    pub highest_bid: Amount,
    #[serde(rename = "auctionState")]
    pub auction_state: AuctionState,
    #[serde(flatten)]
    pub details: VehicleDetails,
}
