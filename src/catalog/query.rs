//! # List Filtering and Sorting
//!
//! Pure post-processing over a store snapshot. Unknown filter kinds yield an
//! empty list; unknown sort fields leave the order untouched. Neither is an
//! error. Repeated query keys resolve to their first occurrence.

use std::cmp::Ordering;
use std::str::FromStr;

use super::model::{PlanetKind, PlanetRecord};

/// Fields a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Distance,
    Radius,
    Mass,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "distance" => Ok(SortField::Distance),
            "radius" => Ok(SortField::Radius),
            "mass" => Ok(SortField::Mass),
            _ => Err(()),
        }
    }
}

impl SortField {
    fn compare(&self, a: &PlanetRecord, b: &PlanetRecord) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Distance => a.distance.total_cmp(&b.distance),
            SortField::Radius => a.radius.total_cmp(&b.radius),
            SortField::Mass => a.mass.total_cmp(&b.mass),
        }
    }
}

/// Keep only records whose kind's canonical name equals `kind`
pub fn filter_by_kind(records: Vec<PlanetRecord>, kind: &str) -> Vec<PlanetRecord> {
    let Ok(kind) = kind.parse::<PlanetKind>() else {
        return Vec::new();
    };
    records.into_iter().filter(|r| r.kind == kind).collect()
}

/// Stable ascending sort by the named field
pub fn sort_by(records: &mut [PlanetRecord], field: &str) {
    if let Ok(field) = field.parse::<SortField>() {
        records.sort_by(|a, b| field.compare(a, b));
    }
}

/// First value recorded for `key` in decoded query pairs
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query-string parameters accepted by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// `type`
    pub kind: Option<String>,

    /// `sortBy`
    pub sort_by: Option<String>,
}

impl ListQuery {
    /// Build from decoded query pairs, keeping the first value of each key
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            kind: first_value(pairs, "type"),
            sort_by: first_value(pairs, "sortBy"),
        }
    }

    /// Filter then sort a snapshot. Empty parameters are treated as absent.
    pub fn apply(&self, mut records: Vec<PlanetRecord>) -> Vec<PlanetRecord> {
        if let Some(kind) = self.kind.as_deref().filter(|k| !k.is_empty()) {
            records = filter_by_kind(records, kind);
        }
        if let Some(field) = self.sort_by.as_deref().filter(|f| !f.is_empty()) {
            sort_by(&mut records, field);
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PlanetRecord> {
        vec![
            PlanetRecord::terrestrial("Trappist-1e", "d", 40.0, 0.9, 0.7).with_id("a"),
            PlanetRecord::gas_giant("HD 189733 b", "d", 64.0, 1.1).with_id("b"),
            PlanetRecord::terrestrial("Kepler-186f", "d", 500.0, 1.2, 1.4).with_id("c"),
            PlanetRecord::gas_giant("WASP-12b", "d", 40.0, 1.9).with_id("d"),
        ]
    }

    fn ids(records: &[PlanetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_terrestrial() {
        let filtered = filter_by_kind(catalog(), "Terrestrial");
        assert_eq!(ids(&filtered), vec!["a", "c"]);
        assert!(filtered.iter().all(|r| r.kind == PlanetKind::Terrestrial));
    }

    #[test]
    fn test_filter_unknown_is_empty() {
        assert!(filter_by_kind(catalog(), "unknown").is_empty());
        assert!(filter_by_kind(catalog(), "gasgiant").is_empty());
        assert!(filter_by_kind(catalog(), "Unrecognized").is_empty());
    }

    #[test]
    fn test_sort_by_distance_is_stable() {
        let mut records = catalog();
        sort_by(&mut records, "distance");

        assert_eq!(ids(&records), vec!["a", "d", "b", "c"]);
        assert!(records.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_sort_by_name() {
        let mut records = catalog();
        sort_by(&mut records, "name");
        assert_eq!(ids(&records), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_sort_by_mass_keeps_equal_order() {
        let mut records = catalog();
        sort_by(&mut records, "mass");
        assert_eq!(ids(&records), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_by_unknown_field_is_noop() {
        let mut records = catalog();
        sort_by(&mut records, "colour");
        assert_eq!(ids(&records), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_list_query_filters_then_sorts() {
        let query = ListQuery {
            kind: Some("GasGiant".to_string()),
            sort_by: Some("radius".to_string()),
        };
        assert_eq!(ids(&query.apply(catalog())), vec!["b", "d"]);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_occurrence() {
        let query = ListQuery::from_pairs(&pairs(&[
            ("sortBy", "name"),
            ("type", "GasGiant"),
            ("sortBy", "mass"),
            ("type", "Terrestrial"),
        ]));
        assert_eq!(query.kind.as_deref(), Some("GasGiant"));
        assert_eq!(query.sort_by.as_deref(), Some("name"));
    }

    #[test]
    fn test_from_pairs_ignores_unrelated_keys() {
        let query = ListQuery::from_pairs(&pairs(&[("limit", "5")]));
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_list_query_empty_params_are_ignored() {
        let query = ListQuery {
            kind: Some(String::new()),
            sort_by: Some(String::new()),
        };
        assert_eq!(query.apply(catalog()).len(), 4);
    }
}
