//! Validation errors raised at the input boundary.
//!
//! The estimator itself never fails. Everything that reaches it has been
//! checked by one of the `validate()` methods, which report the offending
//! field together with the range it must fall into.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("solar-eligible area {solar_area_ha} ha exceeds total land area {total_area_ha} ha")]
    SolarAreaExceedsTotal {
        solar_area_ha: f64,
        total_area_ha: f64,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("invalid estimator config: {field} = {value} {requirement}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("invalid sweep: {message}")]
    InvalidSweep { message: String },
}

impl Error {
    pub fn invalid_config(field: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::InvalidConfig {
            field,
            value,
            requirement,
        }
    }

    pub fn invalid_sweep(message: impl Into<String>) -> Self {
        Self::InvalidSweep {
            message: message.into(),
        }
    }
}

/// Checks that `value` is finite and within `[min, max]`.
pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NotFinite { field });
    }
    if value < min || value > max {
        return Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NotFinite { field });
    }
    if value < 0.0 {
        return Err(Error::Negative { field, value });
    }
    Ok(())
}
