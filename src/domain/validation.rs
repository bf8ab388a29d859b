// src/domain/validation.rs
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use super::vehicles::{Vehicle, VehicleDetails};

/// Each checker inspects one field and reports every violation it finds.
type Check = fn(&Vehicle) -> Vec<String>;

const BASE_CHECKS: &[Check] = &[
    check_identifier,
    check_manufacturer,
    check_model,
    check_year,
    check_starting_bid,
];

/// Runs every base-field check plus the variant-specific one, in a fixed
/// order, and returns all violations rather than stopping at the first.
pub fn validate_vehicle(vehicle: &Vehicle) -> Vec<String> {
    let mut violations: Vec<String> = BASE_CHECKS
        .iter()
        .flat_map(|check| check(vehicle))
        .collect();
    violations.extend(check_details(vehicle));
    violations
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

fn check_identifier(vehicle: &Vehicle) -> Vec<String> {
    let mut violations = Vec::new();
    let identifier = &vehicle.identifier;
    if identifier.chars().count() != 6 {
        violations.push("The identifier must be exactly 6 characters long.".to_string());
    }
    if identifier.is_empty()
        || !identifier.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        violations.push("The identifier may only contain capital letters and digits.".to_string());
    }
    violations
}

fn check_manufacturer(vehicle: &Vehicle) -> Vec<String> {
    check_name(&vehicle.manufacturer, "manufacturer", 20)
}

fn check_model(vehicle: &Vehicle) -> Vec<String> {
    check_name(&vehicle.model, "model", 50)
}

fn check_name(value: &str, field: &str, max_length: usize) -> Vec<String> {
    if value.trim().is_empty() {
        vec![format!("The {} is required.", field)]
    } else if value.chars().count() > max_length {
        vec![format!("The {} must be at most {} characters long.", field, max_length)]
    } else {
        Vec::new()
    }
}

fn check_year(vehicle: &Vehicle) -> Vec<String> {
    let latest = current_year();
    if (1950..=latest).contains(&vehicle.year) {
        Vec::new()
    } else {
        vec![format!("The year must be between 1950 and {}.", latest)]
    }
}

fn check_starting_bid(vehicle: &Vehicle) -> Vec<String> {
    let mut violations = Vec::new();
    if !vehicle.starting_bid.is_positive() {
        violations.push("The starting bid must be greater than 0.".to_string());
    }
    if vehicle.starting_bid.fraction_digits() > 2 {
        violations.push("The starting bid must have no more than 2 decimal places.".to_string());
    }
    violations
}

fn check_details(vehicle: &Vehicle) -> Vec<String> {
    match vehicle.details {
        VehicleDetails::Hatchback { number_of_doors }
        | VehicleDetails::Sedan { number_of_doors } => {
            check_required_range_u32(number_of_doors, "number of doors", 2, 5)
        }
        VehicleDetails::Suv { number_of_seats } => {
            check_required_range_u32(number_of_seats, "number of seats", 2, 9)
        }
        VehicleDetails::Truck { load_capacity } => match load_capacity {
            None => vec!["The load capacity is required.".to_string()],
            Some(capacity) if capacity < Decimal::ONE => {
                vec!["The load capacity must be at least 1.".to_string()]
            }
            Some(_) => Vec::new(),
        },
    }
}

fn check_required_range_u32(value: Option<u32>, field: &str, min: u32, max: u32) -> Vec<String> {
    match value {
        None => vec![format!("The {} is required.", field)],
        Some(n) if !(min..=max).contains(&n) => {
            vec![format!("The {} must be between {} and {}.", field, min, max)]
        }
        Some(_) => Vec::new(),
    }
}
