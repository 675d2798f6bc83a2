//! Fuel estimation
//!
//! `g` is a surface gravity proxy: `0.5 / r²` for gas giants and `m / r²`
//! for terrestrial planets. Fuel is `distance / g² * crew`. Overflow follows
//! plain IEEE-754 double behaviour.

use thiserror::Error;

use super::model::{PlanetKind, PlanetRecord};

/// Fixed gravity numerator used for gas giants
const GAS_GIANT_GRAVITY_FACTOR: f64 = 0.5;

/// Estimator input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    #[error("invalid crew capacity")]
    InvalidCrewCapacity,

    #[error("invalid exoplanet type")]
    InvalidKind,
}

/// Parse a crew capacity from its textual form.
///
/// Anything that is not a positive integer is rejected.
pub fn parse_crew_capacity(raw: &str) -> Result<i64, EstimationError> {
    match raw.parse::<i64>() {
        Ok(crew) if crew > 0 => Ok(crew),
        _ => Err(EstimationError::InvalidCrewCapacity),
    }
}

/// Surface gravity proxy for a record
pub fn surface_gravity(record: &PlanetRecord) -> Result<f64, EstimationError> {
    let r2 = record.radius * record.radius;
    match record.kind {
        PlanetKind::GasGiant => Ok(GAS_GIANT_GRAVITY_FACTOR / r2),
        PlanetKind::Terrestrial => Ok(record.mass / r2),
        PlanetKind::Unrecognized => Err(EstimationError::InvalidKind),
    }
}

/// Estimate the fuel needed to reach `record` with `crew_capacity` people.
pub fn estimate_fuel(record: &PlanetRecord, crew_capacity: i64) -> Result<f64, EstimationError> {
    if crew_capacity <= 0 {
        return Err(EstimationError::InvalidCrewCapacity);
    }
    let g = surface_gravity(record)?;
    Ok(record.distance / (g * g) * crew_capacity as f64)
}
