use crate::domain::ports::{EngineStart, StartMethod};
use crate::domain::rules::{
    latest_valid_year, EARLIEST_VALID_VEHICLE_YEAR, MAX_CAR_DOORS, MIN_CAR_DOORS,
};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::{validate_at_least, validate_non_empty_string, validate_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple type name of each vehicle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Vehicle,
    Car,
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Vehicle,
        VehicleKind::Car,
        VehicleKind::Motorcycle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Vehicle => "Vehicle",
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brand and manufacturing year shared by every variant.
///
/// Not `PartialEq`: two vehicles with the same fields are still two vehicles.
#[derive(Debug, Clone, Serialize)]
pub struct BaseVehicle {
    brand: String,
    year: i32,
}

impl BaseVehicle {
    pub fn new(brand: impl Into<String>, year: i32) -> Result<Self> {
        let brand = brand.into();

        if let Err(e) = Self::check(&brand, year) {
            tracing::debug!("Rejected vehicle brand={:?} year={}: {}", brand, year, e);
            return Err(e);
        }

        tracing::debug!("Created vehicle brand={:?} year={}", brand, year);
        Ok(Self { brand, year })
    }

    fn check(brand: &str, year: i32) -> Result<()> {
        validate_non_empty_string("brand", "Brand", brand)?;
        validate_at_least("year", "Year", year, EARLIEST_VALID_VEHICLE_YEAR)?;

        let latest = latest_valid_year();
        if year > latest {
            return Err(VehicleError::validation(
                "year",
                format!("Year must not be in the far future (latest allowed: {})", latest),
            ));
        }
        Ok(())
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl EngineStart for BaseVehicle {}

impl fmt::Display for BaseVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle{{brand='{}', year={}}}", self.brand, self.year)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Car {
    #[serde(flatten)]
    base: BaseVehicle,
    num_doors: i32,
}

impl Car {
    pub fn new(brand: impl Into<String>, year: i32, num_doors: i32) -> Result<Self> {
        Self::from_base(BaseVehicle::new(brand, year)?, num_doors)
    }

    /// Extends an already validated base vehicle; only the door count is checked.
    pub fn from_base(base: BaseVehicle, num_doors: i32) -> Result<Self> {
        let doors_ok = validate_range(
            "num_doors",
            "Number of doors",
            num_doors,
            MIN_CAR_DOORS,
            MAX_CAR_DOORS,
        );
        if let Err(e) = doors_ok {
            tracing::debug!("Rejected car brand={:?} num_doors={}: {}", base.brand, num_doors, e);
            return Err(e);
        }

        Ok(Self { base, num_doors })
    }

    pub fn base(&self) -> &BaseVehicle {
        &self.base
    }

    pub fn brand(&self) -> &str {
        self.base.brand()
    }

    pub fn year(&self) -> i32 {
        self.base.year()
    }

    pub fn num_doors(&self) -> i32 {
        self.num_doors
    }
}

impl EngineStart for Car {
    fn start_engine_via_key(&self) -> bool {
        let car_key_detected = true;
        let engine_ready = true;
        car_key_detected && engine_ready
    }

    fn start_engine_remotely_via_key_fob(&self) -> bool {
        let car_remote_signal_received = true;
        let engine_ready = true;
        car_remote_signal_received && engine_ready
    }

    fn start_engine_via_app(&self) -> bool {
        let car_app_command_received = true;
        let engine_ready = true;
        car_app_command_received && engine_ready
    }

    fn overridden_methods(&self) -> &'static [StartMethod] {
        &[StartMethod::Key, StartMethod::RemoteKeyFob, StartMethod::App]
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car{{brand='{}', year={}, numDoors={}}}",
            self.brand(),
            self.year(),
            self.num_doors
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Motorcycle {
    #[serde(flatten)]
    base: BaseVehicle,
    has_side_car: bool,
}

impl Motorcycle {
    pub fn new(brand: impl Into<String>, year: i32, has_side_car: bool) -> Result<Self> {
        Ok(Self::from_base(BaseVehicle::new(brand, year)?, has_side_car))
    }

    pub fn from_base(base: BaseVehicle, has_side_car: bool) -> Self {
        Self { base, has_side_car }
    }

    pub fn base(&self) -> &BaseVehicle {
        &self.base
    }

    pub fn brand(&self) -> &str {
        self.base.brand()
    }

    pub fn year(&self) -> i32 {
        self.base.year()
    }

    pub fn has_side_car(&self) -> bool {
        self.has_side_car
    }
}

impl EngineStart for Motorcycle {
    fn start_engine_via_button(&self) -> bool {
        let motorcycle_button_pressed = true;
        let engine_ready = true;
        motorcycle_button_pressed && engine_ready
    }

    // kick start
    fn start_engine_via_manual_crank(&self) -> bool {
        let kick_operated = true;
        let engine_ready = true;
        kick_operated && engine_ready
    }

    fn overridden_methods(&self) -> &'static [StartMethod] {
        &[StartMethod::Button, StartMethod::ManualCrank]
    }
}

impl fmt::Display for Motorcycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Motorcycle{{brand='{}', year={}, hasSideCar={}}}",
            self.brand(),
            self.year(),
            self.has_side_car
        )
    }
}

/// Any vehicle, as seen through the shared capability set.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Vehicle {
    #[serde(rename = "vehicle")]
    Base(BaseVehicle),
    Car(Car),
    Motorcycle(Motorcycle),
}

impl Vehicle {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Base(_) => VehicleKind::Vehicle,
            Vehicle::Car(_) => VehicleKind::Car,
            Vehicle::Motorcycle(_) => VehicleKind::Motorcycle,
        }
    }

    pub fn base(&self) -> &BaseVehicle {
        match self {
            Vehicle::Base(v) => v,
            Vehicle::Car(c) => c.base(),
            Vehicle::Motorcycle(m) => m.base(),
        }
    }

    pub fn brand(&self) -> &str {
        self.base().brand()
    }

    pub fn year(&self) -> i32 {
        self.base().year()
    }

    pub fn as_car(&self) -> Result<&Car> {
        match self {
            Vehicle::Car(c) => Ok(c),
            other => Err(other.mismatch(VehicleKind::Car)),
        }
    }

    pub fn as_motorcycle(&self) -> Result<&Motorcycle> {
        match self {
            Vehicle::Motorcycle(m) => Ok(m),
            other => Err(other.mismatch(VehicleKind::Motorcycle)),
        }
    }

    pub fn into_car(self) -> Result<Car> {
        match self {
            Vehicle::Car(c) => Ok(c),
            other => Err(other.mismatch(VehicleKind::Car)),
        }
    }

    pub fn into_motorcycle(self) -> Result<Motorcycle> {
        match self {
            Vehicle::Motorcycle(m) => Ok(m),
            other => Err(other.mismatch(VehicleKind::Motorcycle)),
        }
    }

    /// Variant-specific one-line summary.
    pub fn describe(&self) -> String {
        match self {
            Vehicle::Base(_) => "Basic vehicle".to_string(),
            Vehicle::Car(c) => format!("Car with {} doors", c.num_doors()),
            Vehicle::Motorcycle(m) if m.has_side_car() => "Motorcycle with sidecar".to_string(),
            Vehicle::Motorcycle(_) => "Motorcycle without sidecar".to_string(),
        }
    }

    fn mismatch(&self, expected: VehicleKind) -> VehicleError {
        tracing::debug!("Refused to use {} as {}", self.kind(), expected);
        VehicleError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    fn capabilities(&self) -> &dyn EngineStart {
        match self {
            Vehicle::Base(v) => v,
            Vehicle::Car(c) => c,
            Vehicle::Motorcycle(m) => m,
        }
    }
}

impl EngineStart for Vehicle {
    fn start_engine_via_key(&self) -> bool {
        self.capabilities().start_engine_via_key()
    }

    fn start_engine_via_button(&self) -> bool {
        self.capabilities().start_engine_via_button()
    }

    fn start_engine_remotely_via_key_fob(&self) -> bool {
        self.capabilities().start_engine_remotely_via_key_fob()
    }

    fn start_engine_via_app(&self) -> bool {
        self.capabilities().start_engine_via_app()
    }

    fn start_engine_via_manual_crank(&self) -> bool {
        self.capabilities().start_engine_via_manual_crank()
    }

    fn overridden_methods(&self) -> &'static [StartMethod] {
        self.capabilities().overridden_methods()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::Base(v) => v.fmt(f),
            Vehicle::Car(c) => c.fmt(f),
            Vehicle::Motorcycle(m) => m.fmt(f),
        }
    }
}

impl From<BaseVehicle> for Vehicle {
    fn from(vehicle: BaseVehicle) -> Self {
        Vehicle::Base(vehicle)
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        Vehicle::Car(car)
    }
}

impl From<Motorcycle> for Vehicle {
    fn from(motorcycle: Motorcycle) -> Self {
        Vehicle::Motorcycle(motorcycle)
    }
}

impl TryFrom<Vehicle> for Car {
    type Error = VehicleError;

    fn try_from(vehicle: Vehicle) -> Result<Self> {
        vehicle.into_car()
    }
}

impl TryFrom<Vehicle> for Motorcycle {
    type Error = VehicleError;

    fn try_from(vehicle: Vehicle) -> Result<Self> {
        vehicle.into_motorcycle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::current_year;

    #[test]
    fn test_brand_is_kept_verbatim() {
        let vehicle = BaseVehicle::new(" Honda ", 2022).unwrap();
        assert_eq!(vehicle.brand(), " Honda ");
        assert_eq!(vehicle.to_string(), "Vehicle{brand=' Honda ', year=2022}");
    }

    #[test]
    fn test_year_boundaries_are_inclusive() {
        assert!(BaseVehicle::new("Benz", 1886).is_ok());
        assert!(BaseVehicle::new("Concept", current_year() + 10).is_ok());
        assert!(BaseVehicle::new("Concept", current_year() + 11).is_err());
    }

    #[test]
    fn test_brand_checked_before_year() {
        let err = BaseVehicle::new("", 0).unwrap_err();
        assert_eq!(err.field(), Some("brand"));
    }

    #[test]
    fn test_car_reports_base_errors_first() {
        let err = Car::new("BMW", 1500, 9).unwrap_err();
        assert_eq!(err.field(), Some("year"));
    }

    #[test]
    fn test_vehicle_dispatches_overrides_per_variant() {
        let base: Vehicle = BaseVehicle::new("Generic", 2022).unwrap().into();
        let car: Vehicle = Car::new("BMW", 2021, 4).unwrap().into();
        let bike: Vehicle = Motorcycle::new("Ducati", 2022, false).unwrap().into();

        assert!(base.overridden_methods().is_empty());
        assert_eq!(
            car.overridden_methods(),
            &[StartMethod::Key, StartMethod::RemoteKeyFob, StartMethod::App]
        );
        assert_eq!(
            bike.overridden_methods(),
            &[StartMethod::Button, StartMethod::ManualCrank]
        );

        for vehicle in [&base, &car, &bike] {
            for method in StartMethod::ALL {
                assert!(vehicle.start(method), "{} failed to start via {}", vehicle, method);
            }
        }
    }

    #[test]
    fn test_describe() {
        let car: Vehicle = Car::new("Toyota", 2023, 2).unwrap().into();
        let bike: Vehicle = Motorcycle::new("Harley Davidson", 2020, true).unwrap().into();
        assert_eq!(car.describe(), "Car with 2 doors");
        assert_eq!(bike.describe(), "Motorcycle with sidecar");
    }

    #[test]
    fn test_serialize_flattens_base_fields() {
        let car: Vehicle = Car::new("BMW", 2021, 4).unwrap().into();
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "car", "brand": "BMW", "year": 2021, "num_doors": 4})
        );

        let base: Vehicle = BaseVehicle::new("Generic", 2022).unwrap().into();
        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["kind"], "vehicle");
    }
}
