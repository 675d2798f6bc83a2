//! Planet record model
//!
//! `type` travels over the wire as the literal strings `"GasGiant"` and
//! `"Terrestrial"`. Any other string decodes into [`PlanetKind::Unrecognized`]
//! so that the validator, not the JSON decoder, reports the bad kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Planet classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlanetKind {
    GasGiant,
    Terrestrial,
    /// Decode-only placeholder for a kind outside the closed set.
    /// Never accepted into the store.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl PlanetKind {
    /// Canonical wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetKind::GasGiant => "GasGiant",
            PlanetKind::Terrestrial => "Terrestrial",
            PlanetKind::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planet kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for PlanetKind {
    type Err = UnknownKind;

    /// Case-sensitive; only the canonical names parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GasGiant" => Ok(PlanetKind::GasGiant),
            "Terrestrial" => Ok(PlanetKind::Terrestrial),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// One exoplanet entry.
///
/// Distances are in light-years, radius in Earth radii, mass in Earth masses.
/// Every field defaults when missing from the request body; the validator
/// rejects the resulting empty or zero values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Assigned by the store. Client-supplied values are overwritten.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub distance: f64,

    #[serde(default)]
    pub radius: f64,

    /// Only meaningful for terrestrial planets; zero for gas giants
    #[serde(default)]
    pub mass: f64,

    #[serde(rename = "type", default)]
    pub kind: PlanetKind,
}

impl PlanetRecord {
    /// Build a terrestrial planet record (id left empty)
    pub fn terrestrial(
        name: impl Into<String>,
        description: impl Into<String>,
        distance: f64,
        radius: f64,
        mass: f64,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            distance,
            radius,
            mass,
            kind: PlanetKind::Terrestrial,
        }
    }

    /// Build a gas giant record (id left empty, mass zero)
    pub fn gas_giant(
        name: impl Into<String>,
        description: impl Into<String>,
        distance: f64,
        radius: f64,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            distance,
            radius,
            mass: 0.0,
            kind: PlanetKind::GasGiant,
        }
    }

    /// Return the same record carrying the given id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
