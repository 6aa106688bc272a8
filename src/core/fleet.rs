use crate::domain::model::{BaseVehicle, Car, Motorcycle, Vehicle, VehicleKind};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::validate_required_field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw, unvalidated vehicle entry as it appears in a roster file.
///
/// `year` is wider than the entity field so an out-of-range value becomes a
/// rejected entry instead of a parse failure for the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub kind: VehicleKind,
    pub brand: Option<String>,
    pub year: i64,
    pub num_doors: Option<i32>,
    pub has_side_car: Option<bool>,
}

impl VehicleSpec {
    pub fn vehicle(brand: Option<&str>, year: i64) -> Self {
        Self {
            kind: VehicleKind::Vehicle,
            brand: brand.map(str::to_string),
            year,
            num_doors: None,
            has_side_car: None,
        }
    }

    pub fn car(brand: Option<&str>, year: i64, num_doors: Option<i32>) -> Self {
        Self {
            kind: VehicleKind::Car,
            num_doors,
            ..Self::vehicle(brand, year)
        }
    }

    pub fn motorcycle(brand: Option<&str>, year: i64, has_side_car: Option<bool>) -> Self {
        Self {
            kind: VehicleKind::Motorcycle,
            has_side_car,
            ..Self::vehicle(brand, year)
        }
    }

    /// Brand and year are checked first, then the kind-specific fields.
    pub fn build(&self) -> Result<Vehicle> {
        let brand = validate_required_field("brand", "Brand", &self.brand)?;
        // saturate; anything outside i32 is outside the valid range anyway
        let year = i32::try_from(self.year)
            .unwrap_or(if self.year < 0 { i32::MIN } else { i32::MAX });
        let base = BaseVehicle::new(brand.as_str(), year)?;

        match self.kind {
            VehicleKind::Vehicle => {
                self.reject_field(self.num_doors.is_some(), "num_doors")?;
                self.reject_field(self.has_side_car.is_some(), "has_side_car")?;
                Ok(base.into())
            }
            VehicleKind::Car => {
                self.reject_field(self.has_side_car.is_some(), "has_side_car")?;
                let num_doors = self.num_doors.ok_or_else(|| {
                    VehicleError::validation("num_doors", "Number of doors is required for a car")
                })?;
                Ok(Car::from_base(base, num_doors)?.into())
            }
            VehicleKind::Motorcycle => {
                self.reject_field(self.num_doors.is_some(), "num_doors")?;
                let has_side_car = self.has_side_car.unwrap_or(false);
                Ok(Motorcycle::from_base(base, has_side_car).into())
            }
        }
    }

    fn reject_field(&self, present: bool, field: &str) -> Result<()> {
        if present {
            return Err(VehicleError::ConfigError {
                message: format!("'{}' does not apply to a {} entry", field, self.kind),
            });
        }
        Ok(())
    }
}

/// An entry that failed to build, with its position in the roster.
#[derive(Debug)]
pub struct RejectedEntry {
    pub index: usize,
    pub spec: VehicleSpec,
    pub error: VehicleError,
}

#[derive(Debug, Serialize)]
struct RejectedReport<'a> {
    index: usize,
    brand: Option<&'a str>,
    error: String,
}

#[derive(Debug, Serialize)]
struct FleetReport<'a> {
    name: &'a str,
    counts: BTreeMap<VehicleKind, usize>,
    vehicles: &'a [Vehicle],
    rejected: Vec<RejectedReport<'a>>,
}

/// Vehicles built from a roster, plus the entries that were refused.
#[derive(Debug)]
pub struct Fleet {
    name: String,
    vehicles: Vec<Vehicle>,
    rejected: Vec<RejectedEntry>,
}

impl Fleet {
    pub fn from_specs(name: impl Into<String>, specs: &[VehicleSpec]) -> Self {
        let name = name.into();
        let mut vehicles = Vec::with_capacity(specs.len());
        let mut rejected = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            match spec.build() {
                Ok(vehicle) => vehicles.push(vehicle),
                Err(error) => {
                    tracing::warn!("Roster entry #{} rejected: {}", index, error);
                    rejected.push(RejectedEntry {
                        index,
                        spec: spec.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Fleet '{}' built: {} vehicles, {} rejected",
            name,
            vehicles.len(),
            rejected.len()
        );

        Self {
            name,
            vehicles,
            rejected,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }

    pub fn count_by_kind(&self) -> BTreeMap<VehicleKind, usize> {
        let mut counts = BTreeMap::new();
        for vehicle in &self.vehicles {
            *counts.entry(vehicle.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn render_text(&self) -> Vec<String> {
        let mut lines = vec![format!("Fleet: {}", self.name)];

        for vehicle in &self.vehicles {
            lines.push(format!("► {} ➜ {}", vehicle, vehicle.describe()));
        }

        let counts = self.count_by_kind();
        let summary: Vec<String> = VehicleKind::ALL
            .iter()
            .map(|kind| format!("{}: {}", kind, counts.get(kind).copied().unwrap_or(0)))
            .collect();
        lines.push(format!("Totals: {}", summary.join(", ")));

        for entry in &self.rejected {
            lines.push(format!(
                "✖ Entry #{} rejected: {}",
                entry.index,
                entry.error.user_friendly_message()
            ));
        }

        lines
    }

    pub fn to_json(&self) -> Result<String> {
        let report = FleetReport {
            name: &self.name,
            counts: self.count_by_kind(),
            vehicles: &self.vehicles,
            rejected: self
                .rejected
                .iter()
                .map(|entry| RejectedReport {
                    index: entry.index,
                    brand: entry.spec.brand.as_deref(),
                    error: entry.error.user_friendly_message(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_brand_is_a_brand_validation_error() {
        let err = VehicleSpec::vehicle(None, 2023).build().unwrap_err();
        assert_eq!(err.field(), Some("brand"));
        assert!(err.to_string().to_lowercase().contains("brand"));
    }

    #[test]
    fn test_car_requires_doors() {
        let err = VehicleSpec::car(Some("BMW"), 2021, None).build().unwrap_err();
        assert_eq!(err.field(), Some("num_doors"));
    }

    #[test]
    fn test_motorcycle_sidecar_defaults_to_false() {
        let vehicle = VehicleSpec::motorcycle(Some("Ducati"), 2022, None).build().unwrap();
        assert!(!vehicle.as_motorcycle().unwrap().has_side_car());
    }

    #[test]
    fn test_base_fields_are_checked_before_kind_fields() {
        let err = VehicleSpec::car(Some("BMW"), 1500, None).build().unwrap_err();
        assert_eq!(err.field(), Some("year"));

        let mut spec = VehicleSpec::vehicle(Some("Generic"), 1500);
        spec.num_doors = Some(4);
        assert_eq!(spec.build().unwrap_err().field(), Some("year"));

        let err = VehicleSpec::motorcycle(None, 2020, Some(true)).build().unwrap_err();
        assert_eq!(err.field(), Some("brand"));
    }

    #[test]
    fn test_year_beyond_i32_is_rejected_not_truncated() {
        let err = VehicleSpec::vehicle(Some("Generic"), 99_999_999_999).build().unwrap_err();
        assert_eq!(err.field(), Some("year"));
        assert!(err.to_string().contains("future"));

        let err = VehicleSpec::vehicle(Some("Generic"), -99_999_999_999).build().unwrap_err();
        assert!(err.to_string().contains("1886"));
    }

    #[test]
    fn test_field_on_wrong_kind_is_config_error() {
        let mut spec = VehicleSpec::motorcycle(Some("Yamaha"), 2021, Some(false));
        spec.num_doors = Some(2);
        assert!(matches!(spec.build(), Err(VehicleError::ConfigError { .. })));
    }

    #[test]
    fn test_fleet_keeps_going_past_rejected_entries() {
        let specs = vec![
            VehicleSpec::car(Some("BMW"), 2021, Some(4)),
            VehicleSpec::car(Some("Toyota"), 2020, Some(7)),
            VehicleSpec::vehicle(Some("  "), 2022),
            VehicleSpec::motorcycle(Some("Harley Davidson"), 2020, Some(true)),
        ];

        let fleet = Fleet::from_specs("garage", &specs);

        assert_eq!(fleet.vehicles().len(), 2);
        let rejected: Vec<usize> = fleet.rejected().iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2]);

        let counts = fleet.count_by_kind();
        assert_eq!(counts.get(&VehicleKind::Car), Some(&1));
        assert_eq!(counts.get(&VehicleKind::Motorcycle), Some(&1));
        assert_eq!(counts.get(&VehicleKind::Vehicle), None);
    }

    #[test]
    fn test_render_text_lists_vehicles_and_rejections() {
        let specs = vec![
            VehicleSpec::car(Some("BMW"), 2021, Some(4)),
            VehicleSpec::car(Some("Toyota"), 2020, Some(0)),
        ];
        let lines = Fleet::from_specs("garage", &specs).render_text();

        assert_eq!(lines[0], "Fleet: garage");
        assert_eq!(lines[1], "► Car{brand='BMW', year=2021, numDoors=4} ➜ Car with 4 doors");
        assert_eq!(lines[2], "Totals: Vehicle: 0, Car: 1, Motorcycle: 0");
        assert!(lines[3].starts_with("✖ Entry #1 rejected"));
        assert!(lines[3].contains("between 1 and 6"));
    }

    #[test]
    fn test_to_json_report() {
        let specs = vec![
            VehicleSpec::motorcycle(Some("Ducati"), 2022, Some(false)),
            VehicleSpec::vehicle(None, 2022),
        ];
        let json = Fleet::from_specs("bikes", &specs).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "bikes");
        assert_eq!(value["counts"]["motorcycle"], 1);
        assert_eq!(value["vehicles"][0]["kind"], "motorcycle");
        assert_eq!(value["vehicles"][0]["has_side_car"], false);
        assert_eq!(value["rejected"][0]["index"], 1);
        assert!(value["rejected"][0]["brand"].is_null());
    }
}
