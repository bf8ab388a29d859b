// src/domain/core.rs
use thiserror::Error;
use crate::money::Amount;

pub type VehicleId = String;

/// A single reason a bid was refused. Both checks run on every bid, so a
/// rejection can carry more than one fault at once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BidFault {
    #[error("New bids must be higher than the current highest bid: {0}.")]
    TooLow(Amount),

    #[error("The bid value must have no more than 2 decimal places.")]
    Precision,
}

fn joined(faults: &[BidFault]) -> String {
    faults.iter()
        .map(|fault| fault.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Invalid vehicle type.")]
    InvalidVehicleType,

    #[error("A vehicle with identifier {0} already exists.")]
    DuplicateIdentifier(VehicleId),

    #[error("Validation failed for the vehicle: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Vehicle with identifier {0} does not exist.")]
    UnknownVehicle(VehicleId),

    #[error("Auction for vehicle {0} is already active.")]
    AuctionAlreadyActive(VehicleId),

    #[error("Auction for vehicle {0} has already concluded.")]
    AuctionAlreadyConcluded(VehicleId),

    #[error("Auction for vehicle {0} is not currently active.")]
    AuctionNotActive(VehicleId),

    #[error("Invalid bid for vehicle {identifier}: {}", joined(.faults))]
    BidRejected {
        identifier: VehicleId,
        faults: Vec<BidFault>,
    },
}
