//! Walk-throughs of the vehicle model.
//!
//! Each showcase builds its own sample vehicles and returns the rendered
//! lines; printing is left to the caller.

use crate::core::fleet::VehicleSpec;
use crate::domain::model::{BaseVehicle, Car, Motorcycle, Vehicle};
use crate::domain::ports::{EngineStart, StartMethod};
use crate::utils::error::Result;
use std::fmt::Display;

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
}

fn sidecar_suffix(has_side_car: bool) -> &'static str {
    if has_side_car {
        " with sidecar"
    } else {
        " without sidecar"
    }
}

pub fn basic_showcase() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    heading(&mut lines, "Basic Object Creation and Printing");

    let vehicle = BaseVehicle::new("Honda", 2022)?;
    let car = Car::new("BMW", 2021, 5)?;
    let motorcycle = Motorcycle::new("Harley Davidson", 2020, true)?;

    lines.push(format!("Basic Vehicle: {}", vehicle));
    lines.push(format!("Car: {}", car));
    lines.push(format!("Motorcycle: {}", motorcycle));

    lines.push("Note how each display implementation:".to_string());
    lines.push("• Includes the type name".to_string());
    lines.push("• Shows all relevant attributes".to_string());
    lines.push("• Maintains a consistent format".to_string());

    Ok(lines)
}

pub fn getters_showcase() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    heading(&mut lines, "Demonstrating Getter Methods");

    let vehicle = BaseVehicle::new("Honda", 2022)?;
    let car = Car::new("BMW", 2021, 5)?;
    let motorcycle = Motorcycle::new("Harley Davidson", 2020, true)?;

    lines.push("Base Vehicle Properties:".to_string());
    lines.push(format!("• Brand: {}", vehicle.brand()));
    lines.push(format!("• Year: {}", vehicle.year()));

    lines.push("Car Properties (Including Inherited):".to_string());
    lines.push(format!("• Brand: {}", car.brand()));
    lines.push(format!("• Year: {}", car.year()));
    lines.push(format!("• Number of Doors: {}", car.num_doors()));

    lines.push("Motorcycle Properties (Including Inherited):".to_string());
    lines.push(format!("• Brand: {}", motorcycle.brand()));
    lines.push(format!("• Year: {}", motorcycle.year()));
    lines.push(format!("• Has Sidecar: {}", motorcycle.has_side_car()));

    lines.push("Formatted Output Using Getters:".to_string());
    lines.push(format!("► Vehicle: {} ({})", vehicle.brand(), vehicle.year()));
    lines.push(format!(
        "► Car: {} ({}) with {} doors",
        car.brand(),
        car.year(),
        car.num_doors()
    ));
    lines.push(format!(
        "► Motorcycle: {} ({}){}",
        motorcycle.brand(),
        motorcycle.year(),
        sidecar_suffix(motorcycle.has_side_car())
    ));

    Ok(lines)
}

fn process_vehicle(lines: &mut Vec<String>, vehicle: &Vehicle) {
    lines.push(format!("Processing vehicle: {}", vehicle.kind()));
    lines.push(format!("• Type: {}", vehicle.kind()));
    lines.push(format!("• Display: {}", vehicle));
    lines.push(format!("• Brand: {}", vehicle.brand()));
    lines.push(format!("• Year: {}", vehicle.year()));
}

pub fn polymorphism_showcase() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    heading(&mut lines, "Demonstrating Polymorphism");

    let vehicles: Vec<Vehicle> = vec![
        BaseVehicle::new("Generic Brand", 2022)?.into(),
        Car::new("BMW", 2021, 4)?.into(),
        Motorcycle::new("Harley Davidson", 2020, true)?.into(),
        Car::new("Toyota", 2023, 2)?.into(),
        Motorcycle::new("Ducati", 2022, false)?.into(),
    ];

    lines.push("1. Basic Polymorphic Iteration".to_string());
    lines.push("Each vehicle uses its own display implementation:".to_string());
    for vehicle in &vehicles {
        lines.push(format!("► {}", vehicle));
    }

    lines.push("2. Type Checking and Specific Behavior".to_string());
    for vehicle in &vehicles {
        let detail = match vehicle {
            Vehicle::Car(car) => format!("Car with {} doors", car.num_doors()),
            Vehicle::Motorcycle(motorcycle) => {
                format!("Motorcycle{}", sidecar_suffix(motorcycle.has_side_car()))
            }
            Vehicle::Base(_) => "Basic vehicle".to_string(),
        };
        lines.push(format!("Processing: {} ➜ {}", vehicle.brand(), detail));
    }

    lines.push("3. Polymorphic Method Behavior".to_string());
    process_vehicle(&mut lines, &Vehicle::from(BaseVehicle::new("Generic", 2022)?));
    process_vehicle(&mut lines, &Vehicle::from(Car::new("Mercedes", 2023, 4)?));
    process_vehicle(&mut lines, &Vehicle::from(Motorcycle::new("Yamaha", 2021, false)?));

    Ok(lines)
}

fn outcome<T: Display>(result: Result<T>) -> String {
    match result {
        Ok(value) => format!("✔ Unexpectedly created: {}", value),
        Err(e) => format!("✖ Validation caught: {}", e.user_friendly_message()),
    }
}

pub fn validation_showcase() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    heading(&mut lines, "Demonstrating Input Validation");

    lines.push("Test 1: Attempting to create a vehicle with empty brand".to_string());
    lines.push(outcome(BaseVehicle::new("", 2023)));

    lines.push("Test 2: Attempting to create a vehicle with missing brand".to_string());
    lines.push(outcome(VehicleSpec::vehicle(None, 2023).build()));

    lines.push("Test 3: Attempting to create a vehicle with negative year".to_string());
    lines.push(outcome(BaseVehicle::new("Toyota", -2023)));

    lines.push("Test 4: Attempting to create a car with invalid door number".to_string());
    lines.push(outcome(Car::new("Toyota", 2020, -1)));

    lines.push("Creating a valid vehicle instance:".to_string());
    let valid = BaseVehicle::new("Toyota", 2023)?;
    lines.push(format!("✓ Successfully created: {}", valid));

    Ok(lines)
}

pub fn engine_showcase() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    heading(&mut lines, "Engine Start Capabilities");

    let vehicles: Vec<Vehicle> = vec![
        BaseVehicle::new("Generic", 2022)?.into(),
        Car::new("BMW", 2021, 4)?.into(),
        Motorcycle::new("Harley-Davidson", 2020, false)?.into(),
    ];

    for vehicle in &vehicles {
        lines.push(vehicle.to_string());
        let overridden = vehicle.overridden_methods();
        for method in StartMethod::ALL {
            let status = if vehicle.start(method) { "started" } else { "failed" };
            let origin = if overridden.contains(&method) {
                format!("{}-specific", vehicle.kind())
            } else {
                "inherited".to_string()
            };
            lines.push(format!("  • {}: {} ({})", method, status, origin));
        }
    }

    Ok(lines)
}

/// Every showcase in order, separated by blank lines.
pub fn full_showcase() -> Result<Vec<String>> {
    let sections = [
        basic_showcase()?,
        getters_showcase()?,
        polymorphism_showcase()?,
        validation_showcase()?,
        engine_showcase()?,
    ];

    let mut lines = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(section);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_showcase_prints_each_variant() {
        let lines = basic_showcase().unwrap();
        assert_eq!(lines[0], "Basic Object Creation and Printing");
        assert_eq!(lines[2], "Basic Vehicle: Vehicle{brand='Honda', year=2022}");
        assert_eq!(lines[3], "Car: Car{brand='BMW', year=2021, numDoors=5}");
        assert_eq!(
            lines[4],
            "Motorcycle: Motorcycle{brand='Harley Davidson', year=2020, hasSideCar=true}"
        );
    }

    #[test]
    fn test_heading_underline_matches_title() {
        let lines = getters_showcase().unwrap();
        assert_eq!(lines[0].chars().count(), lines[1].len());
    }

    #[test]
    fn test_getters_formatted_lines() {
        let lines = getters_showcase().unwrap();
        assert!(lines.contains(&"► Car: BMW (2021) with 5 doors".to_string()));
        assert!(lines.contains(&"► Motorcycle: Harley Davidson (2020) with sidecar".to_string()));
    }

    #[test]
    fn test_polymorphism_type_checks() {
        let lines = polymorphism_showcase().unwrap();
        assert!(lines.contains(&"Processing: Generic Brand ➜ Basic vehicle".to_string()));
        assert!(lines.contains(&"Processing: Toyota ➜ Car with 2 doors".to_string()));
        assert!(lines.contains(&"Processing: Ducati ➜ Motorcycle without sidecar".to_string()));
        assert!(lines.contains(&"Processing vehicle: Motorcycle".to_string()));
    }

    #[test]
    fn test_validation_showcase_catches_all_four_cases() {
        let lines = validation_showcase().unwrap();
        let caught: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("✖ Validation caught"))
            .collect();
        assert_eq!(caught.len(), 4);
        assert!(caught[2].contains("1886"));
        assert!(caught[3].contains("between 1 and 6"));
        assert!(!lines.iter().any(|l| l.contains("Unexpectedly")));
    }

    #[test]
    fn test_engine_showcase_marks_specialized_methods() {
        let lines = engine_showcase().unwrap();
        assert!(lines.contains(&"  • key: started (Car-specific)".to_string()));
        assert!(lines.contains(&"  • manual crank: started (Motorcycle-specific)".to_string()));
        assert!(lines.contains(&"  • button: started (inherited)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("failed")));
    }

    #[test]
    fn test_full_showcase_has_five_sections() {
        let lines = full_showcase().unwrap();
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 4);
    }
}
