use crate::utils::error::{Result, VehicleError};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(
    field_name: &str,
    label: &str,
    value: &'a Option<T>,
) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| {
        VehicleError::validation(field_name, format!("{} cannot be null or empty", label))
    })
}

pub fn validate_non_empty_string(field_name: &str, label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VehicleError::validation(
            field_name,
            format!("{} cannot be null or empty", label),
        ));
    }
    Ok(())
}

pub fn validate_at_least<T: PartialOrd + Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(VehicleError::validation(
            field_name,
            format!("{} must be >= {}", label, min),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(VehicleError::validation(
            field_name,
            format!("{} must be between {} and {}", label, min, max),
        ));
    }
    Ok(())
}
