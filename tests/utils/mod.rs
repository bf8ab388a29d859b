#![allow(dead_code)]

use vehicle_auction::domain::{AddVehicleRequest, AuctionManager};
use vehicle_auction::money::Amount;

// Sample data for tests

pub fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

pub fn hatchback_request() -> AddVehicleRequest {
    AddVehicleRequest {
        vehicle_type: "Hatchback".to_string(),
        identifier: "HATCH1".to_string(),
        manufacturer: "Honda".to_string(),
        model: "Civic".to_string(),
        year: 2020,
        starting_bid: amount("15000.00"),
        number_of_doors: Some(5),
        number_of_seats: None,
        load_capacity: None,
    }
}

pub fn sedan_request() -> AddVehicleRequest {
    AddVehicleRequest {
        vehicle_type: "Sedan".to_string(),
        identifier: "SEDAN1".to_string(),
        manufacturer: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2021,
        starting_bid: amount("20000"),
        number_of_doors: Some(4),
        number_of_seats: None,
        load_capacity: None,
    }
}

pub fn suv_request() -> AddVehicleRequest {
    AddVehicleRequest {
        vehicle_type: "SUV".to_string(),
        identifier: "SUV001".to_string(),
        manufacturer: "Ford".to_string(),
        model: "Explorer".to_string(),
        year: 2022,
        starting_bid: amount("30000"),
        number_of_doors: None,
        number_of_seats: Some(7),
        load_capacity: None,
    }
}

pub fn truck_request() -> AddVehicleRequest {
    AddVehicleRequest {
        vehicle_type: "Truck".to_string(),
        identifier: "TRUCK1".to_string(),
        manufacturer: "Chevrolet".to_string(),
        model: "Silverado".to_string(),
        year: 2020,
        starting_bid: amount("40000"),
        number_of_doors: None,
        number_of_seats: None,
        load_capacity: Some("5000".parse().unwrap()),
    }
}

/// Manager pre-loaded with one vehicle of each subtype, in the order
/// hatchback, sedan, SUV, truck.
pub fn manager_with_samples() -> AuctionManager {
    let mut manager = AuctionManager::new();
    manager.add_vehicle(&hatchback_request()).unwrap();
    manager.add_vehicle(&sedan_request()).unwrap();
    manager.add_vehicle(&suv_request()).unwrap();
    manager.add_vehicle(&truck_request()).unwrap();
    manager
}
