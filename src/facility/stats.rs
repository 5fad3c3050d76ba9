//! Occupancy counts for the map stats panel and the floor switcher.

use super::filter::FilterSet;
use super::model::Floor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloorStats {
    pub vacant: usize,
    pub occupied: usize,
}

/// Vacant/occupied counts, restricted to the filtered categories when a filter is active.
pub fn floor_stats(floor: &Floor, filters: &FilterSet) -> FloorStats {
    floor
        .units
        .iter()
        .filter(|unit| !filters.is_active() || filters.contains(unit.unit_type))
        .fold(FloorStats::default(), |mut stats, unit| {
            if unit.occupied {
                stats.occupied += 1;
            } else {
                stats.vacant += 1;
            }
            stats
        })
}

/// Vacant units on a floor regardless of filters, shown on floor tabs.
pub fn vacant_count(floor: &Floor) -> usize {
    floor.units.iter().filter(|unit| unit.is_vacant()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::model::{FloorRect, Unit, UnitFeatures, UnitType};

    fn unit(id: &str, unit_type: UnitType, occupied: bool) -> Unit {
        Unit {
            id: id.into(),
            rect: FloorRect::new(0.0, 0.0, 10.0, 10.0),
            unit_type,
            occupied,
            features: UnitFeatures::default(),
        }
    }

    fn floor() -> Floor {
        Floor {
            id: "floor-1".into(),
            name: "Ground".into(),
            width: 100.0,
            height: 100.0,
            units: vec![
                unit("A", UnitType::Compact5x5, false),
                unit("B", UnitType::Compact5x5, true),
                unit("C", UnitType::Garage10x40, false),
                unit("D", UnitType::Garage10x40, false),
            ],
            site_features: Vec::new(),
        }
    }

    #[test]
    fn counts_all_units_without_filter() {
        let stats = floor_stats(&floor(), &FilterSet::default());
        assert_eq!(stats, FloorStats { vacant: 3, occupied: 1 });
        assert_eq!(vacant_count(&floor()), 3);
    }

    #[test]
    fn counts_only_filtered_categories() {
        let mut filters = FilterSet::default();
        filters.toggle(UnitType::Compact5x5);
        let stats = floor_stats(&floor(), &filters);
        assert_eq!(stats, FloorStats { vacant: 1, occupied: 1 });
    }
}
