use std::collections::BTreeSet;

use super::model::UnitType;

/// Active size-category filter. Empty means every unit is shown normally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: BTreeSet<UnitType>,
}

impl FilterSet {
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn contains(&self, unit_type: UnitType) -> bool {
        self.active.contains(&unit_type)
    }

    /// Add the category if absent, remove it otherwise. Returns whether it is now active.
    pub fn toggle(&mut self, unit_type: UnitType) -> bool {
        if self.active.remove(&unit_type) {
            false
        } else {
            self.active.insert(unit_type);
            true
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitType> + '_ {
        self.active.iter().copied()
    }

    /// True when an active filter includes the category.
    pub fn matches(&self, unit_type: UnitType) -> bool {
        self.is_active() && self.contains(unit_type)
    }

    /// True when the category is hidden behind an active filter.
    pub fn dims(&self, unit_type: UnitType) -> bool {
        self.is_active() && !self.contains(unit_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = FilterSet::default();
        assert!(filters.toggle(UnitType::Small5x10));
        assert!(filters.matches(UnitType::Small5x10));
        assert!(filters.dims(UnitType::Garage10x40));
        assert!(!filters.toggle(UnitType::Small5x10));
        assert!(!filters.is_active());
        assert!(!filters.dims(UnitType::Garage10x40));
    }
}
