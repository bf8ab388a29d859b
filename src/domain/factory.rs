// src/domain/factory.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::{Errors, VehicleId};
use super::states::AuctionState;
use super::vehicles::{Vehicle, VehicleDetails, VehicleType};

/// Everything a caller supplies to register a vehicle. The three optional
/// attributes cover all subtypes; the factory picks whichever one the
/// requested type actually carries and ignores the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddVehicleRequest {
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    pub identifier: VehicleId,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "startingBid")]
    pub starting_bid: Amount,
    #[serde(rename = "numberOfDoors", skip_serializing_if = "Option::is_none")]
    pub number_of_doors: Option<u32>,
    #[serde(rename = "numberOfSeats", skip_serializing_if = "Option::is_none")]
    pub number_of_seats: Option<u32>,
    #[serde(rename = "loadCapacity", skip_serializing_if = "Option::is_none")]
    pub load_capacity: Option<Decimal>,
}

/// Constructs the variant matching the request's type name.
///
/// Matching is case-sensitive against the closed set of discriminants; an
/// unknown name fails with [`Errors::InvalidVehicleType`] and nothing else is
/// looked at. No field-level validation happens here; the manager validates
/// the constructed vehicle before it enters the inventory.
pub fn create_vehicle(request: &AddVehicleRequest) -> Result<Vehicle, Errors> {
    let vehicle_type = request.vehicle_type.parse::<VehicleType>()
        .map_err(|_| Errors::InvalidVehicleType)?;

    let details = match vehicle_type {
        VehicleType::Hatchback => VehicleDetails::Hatchback {
            number_of_doors: request.number_of_doors,
        },
        VehicleType::Sedan => VehicleDetails::Sedan {
            number_of_doors: request.number_of_doors,
        },
        VehicleType::Suv => VehicleDetails::Suv {
            number_of_seats: request.number_of_seats,
        },
        VehicleType::Truck => VehicleDetails::Truck {
            load_capacity: request.load_capacity,
        },
    };

    Ok(Vehicle {
        vehicle_type,
        identifier: request.identifier.clone(),
        manufacturer: request.manufacturer.clone(),
        model: request.model.clone(),
        year: request.year,
        starting_bid: request.starting_bid,
        highest_bid: request.starting_bid,
        auction_state: AuctionState::NotStarted,
        details,
    })
}
