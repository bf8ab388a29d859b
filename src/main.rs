use log::info;
use vehicle_auction::domain::{AddVehicleRequest, AuctionManager, SearchCriteria};
use vehicle_auction::money::Amount;

// Small console walk-through of the auction lifecycle.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut manager = AuctionManager::new();

    manager.add_vehicle(&AddVehicleRequest {
        vehicle_type: "Hatchback".to_string(),
        identifier: "HATCH1".to_string(),
        manufacturer: "Honda".to_string(),
        model: "Civic".to_string(),
        year: 2020,
        starting_bid: "15000.00".parse::<Amount>()?,
        number_of_doors: Some(5),
        number_of_seats: None,
        load_capacity: None,
    })?;

    manager.add_vehicle(&AddVehicleRequest {
        vehicle_type: "Truck".to_string(),
        identifier: "TRUCK1".to_string(),
        manufacturer: "Chevrolet".to_string(),
        model: "Silverado".to_string(),
        year: 2019,
        starting_bid: "40000".parse::<Amount>()?,
        number_of_doors: None,
        number_of_seats: None,
        load_capacity: Some("5000".parse()?),
    })?;

    let hondas = manager.search_vehicles(&SearchCriteria {
        manufacturer: Some("honda".to_string()),
        ..SearchCriteria::default()
    });
    info!("found {} Honda(s)", hondas.len());
    println!("{}", serde_json::to_string_pretty(&hondas)?);

    manager.start_auction("HATCH1")?;
    manager.place_bid("HATCH1", "15500.00".parse::<Amount>()?)?;
    if let Err(rejected) = manager.place_bid("HATCH1", "15000.00".parse::<Amount>()?) {
        println!("{}", rejected);
    }
    manager.close_auction("HATCH1")?;

    println!("{}", serde_json::to_string_pretty(manager.inventory())?);
    Ok(())
}
