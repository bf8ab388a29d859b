// src/domain/manager.rs
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::{BidFault, Errors};
use super::factory::{create_vehicle, AddVehicleRequest};
use super::states::AuctionState;
use super::validation::validate_vehicle;
use super::vehicles::Vehicle;

/// Search filter for the inventory. Omitted (or blank) criteria match
/// everything; string comparisons are case-insensitive exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(rename = "vehicleType", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl SearchCriteria {
    fn matches(&self, vehicle: &Vehicle) -> bool {
        matches_text(&self.vehicle_type, &vehicle.vehicle_type.to_string())
            && matches_text(&self.manufacturer, &vehicle.manufacturer)
            && matches_text(&self.model, &vehicle.model)
            && self.year.map_or(true, |year| vehicle.year == year)
    }
}

fn matches_text(criterion: &Option<String>, value: &str) -> bool {
    match criterion {
        Some(wanted) if !wanted.trim().is_empty() => wanted.eq_ignore_ascii_case(value),
        _ => true,
    }
}

/// Owns the inventory and enforces every invariant around it: identifier
/// uniqueness, field validation on entry, the auction state machine and
/// strictly-increasing bids. Operations either fully succeed or leave the
/// inventory untouched.
#[derive(Debug, Default)]
pub struct AuctionManager {
    inventory: Vec<Vehicle>,
}

impl AuctionManager {
    pub fn new() -> Self {
        AuctionManager { inventory: Vec::new() }
    }

    /// All vehicles in insertion order.
    pub fn inventory(&self) -> &[Vehicle] {
        &self.inventory
    }

    /// Constructs, validates and stores a vehicle. Construction failure and a
    /// duplicate identifier each surface as their own error kind; field
    /// violations are collected in full and reported together.
    pub fn add_vehicle(&mut self, request: &AddVehicleRequest) -> Result<(), Errors> {
        let created = create_vehicle(request);

        // Duplicates are rejected before field validation even runs.
        if self.identifier_exists(&request.identifier) {
            return Err(Errors::DuplicateIdentifier(request.identifier.clone()));
        }

        let vehicle = created?;
        let violations = validate_vehicle(&vehicle);
        if !violations.is_empty() {
            return Err(Errors::ValidationFailed(violations));
        }

        info!("added vehicle {} ({})", vehicle.identifier, vehicle.vehicle_type);
        self.inventory.push(vehicle);
        Ok(())
    }

    /// Returns the vehicles matching all supplied criteria, preserving
    /// insertion order. No criteria returns the whole inventory.
    pub fn search_vehicles(&self, criteria: &SearchCriteria) -> Vec<&Vehicle> {
        let found: Vec<&Vehicle> = self.inventory
            .iter()
            .filter(|vehicle| criteria.matches(vehicle))
            .collect();
        debug!("search matched {} of {} vehicles", found.len(), self.inventory.len());
        found
    }

    pub fn start_auction(&mut self, identifier: &str) -> Result<(), Errors> {
        let vehicle = self.find_mut(identifier)?;
        match vehicle.auction_state {
            AuctionState::NotStarted => {
                vehicle.auction_state = AuctionState::Active;
                info!("started auction for {}", identifier);
                Ok(())
            }
            AuctionState::Active => Err(Errors::AuctionAlreadyActive(identifier.to_string())),
            AuctionState::Closed => Err(Errors::AuctionAlreadyConcluded(identifier.to_string())),
        }
    }

    pub fn close_auction(&mut self, identifier: &str) -> Result<(), Errors> {
        let vehicle = self.find_mut(identifier)?;
        match vehicle.auction_state {
            AuctionState::Active => {
                vehicle.auction_state = AuctionState::Closed;
                info!("closed auction for {} at {}", identifier, vehicle.highest_bid);
                Ok(())
            }
            _ => Err(Errors::AuctionNotActive(identifier.to_string())),
        }
    }

    /// Accepts a bid on an active auction. Both bid checks run regardless of
    /// which fails first, so a rejection names every fault that applied.
    pub fn place_bid(&mut self, identifier: &str, new_bid: Amount) -> Result<(), Errors> {
        let vehicle = self.find_mut(identifier)?;
        if vehicle.auction_state != AuctionState::Active {
            return Err(Errors::AuctionNotActive(identifier.to_string()));
        }

        let mut faults = Vec::new();
        if new_bid <= vehicle.highest_bid {
            faults.push(BidFault::TooLow(vehicle.highest_bid));
        }
        if new_bid.fraction_digits() > 2 {
            faults.push(BidFault::Precision);
        }
        if !faults.is_empty() {
            return Err(Errors::BidRejected {
                identifier: identifier.to_string(),
                faults,
            });
        }

        vehicle.highest_bid = new_bid;
        info!("new highest bid {} on {}", new_bid, identifier);
        Ok(())
    }

    pub fn identifier_exists(&self, identifier: &str) -> bool {
        self.inventory.iter().any(|vehicle| vehicle.identifier == identifier)
    }

    fn find_mut(&mut self, identifier: &str) -> Result<&mut Vehicle, Errors> {
        self.inventory
            .iter_mut()
            .find(|vehicle| vehicle.identifier == identifier)
            .ok_or_else(|| Errors::UnknownVehicle(identifier.to_string()))
    }
}
