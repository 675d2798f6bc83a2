//! Record validation
//!
//! Checks run in a fixed order and the first failure wins. On success the
//! record is returned normalized: gas giants always carry `mass == 0`.

use thiserror::Error;

use super::model::{PlanetKind, PlanetRecord};

/// Exclusive distance bounds, light-years
pub const DISTANCE_BOUNDS: (f64, f64) = (10.0, 1000.0);

/// Exclusive radius bounds, Earth radii
pub const RADIUS_BOUNDS: (f64, f64) = (0.1, 10.0);

/// Exclusive mass bounds for terrestrial planets, Earth masses
pub const MASS_BOUNDS: (f64, f64) = (0.1, 10.0);

/// A record failed one of the field constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name and description are required")]
    MissingText,

    #[error("distance must be between 10 and 1000 light years")]
    DistanceOutOfRange,

    #[error("radius must be between 0.1 and 10 Earth-radius units")]
    RadiusOutOfRange,

    #[error("invalid exoplanet type")]
    InvalidKind,

    #[error("mass must be between 0.1 and 10 Earth-mass units for terrestrial planets")]
    MassOutOfRange,
}

/// Open-interval check. NaN is never inside.
fn within(value: f64, (low, high): (f64, f64)) -> bool {
    value > low && value < high
}

/// Validate a candidate record and return its normalized form.
///
/// The `id` field is not inspected.
pub fn validate(mut record: PlanetRecord) -> Result<PlanetRecord, ValidationError> {
    if record.name.is_empty() || record.description.is_empty() {
        return Err(ValidationError::MissingText);
    }
    if !within(record.distance, DISTANCE_BOUNDS) {
        return Err(ValidationError::DistanceOutOfRange);
    }
    if !within(record.radius, RADIUS_BOUNDS) {
        return Err(ValidationError::RadiusOutOfRange);
    }

    match record.kind {
        PlanetKind::Terrestrial => {
            if !within(record.mass, MASS_BOUNDS) {
                return Err(ValidationError::MassOutOfRange);
            }
        }
        PlanetKind::GasGiant => record.mass = 0.0,
        PlanetKind::Unrecognized => return Err(ValidationError::InvalidKind),
    }

    Ok(record)
}
