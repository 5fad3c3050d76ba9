use super::*;

/// How a unit is drawn given filters and selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitVisualState {
    pub occupied: bool,
    pub selected: bool,
    pub dimmed: bool,
    pub highlighted: bool,
}

impl UnitVisualState {
    pub fn is_clickable(&self) -> bool {
        !self.occupied && !self.dimmed
    }
}

/// Occupied units are never selected or highlighted, whatever the store says.
pub fn classify_unit(unit: &Unit, filters: &FilterSet, selected: Option<&str>) -> UnitVisualState {
    let vacant = unit.is_vacant();
    UnitVisualState {
        occupied: unit.occupied,
        selected: vacant && selected == Some(unit.id.as_str()),
        dimmed: filters.dims(unit.unit_type),
        highlighted: vacant && filters.matches(unit.unit_type),
    }
}

/// Handle a click on a unit of the current floor. Dimmed and occupied units ignore it.
pub fn click_unit(store: &mut FacilityStore, unit_id: &str) -> bool {
    let Some(unit) = store.current_floor().and_then(|floor| floor.unit(unit_id)) else {
        return false;
    };
    let state = classify_unit(unit, store.filters(), store.selected_unit_id());
    if !state.is_clickable() {
        tracing::debug!(unit = %unit_id, ?state, "ignoring click on unavailable unit");
        return false;
    }
    store.select_unit(unit_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::controller::test_support::loaded_store;
    use crate::facility::UnitType;

    #[test]
    fn occupied_units_are_never_selected_or_highlighted() {
        let store = loaded_store();
        let floor = store.current_floor().unwrap();
        let occupied = floor.unit("A102").unwrap();
        let mut filters = FilterSet::default();
        filters.toggle(occupied.unit_type);
        let state = classify_unit(occupied, &filters, Some("A102"));
        assert!(state.occupied);
        assert!(!state.selected && !state.highlighted && !state.dimmed);
        assert!(!state.is_clickable());
    }

    #[test]
    fn filters_dim_and_highlight() {
        let store = loaded_store();
        let floor = store.current_floor().unwrap();
        let mut filters = FilterSet::default();
        filters.toggle(UnitType::Compact5x5);
        let small = classify_unit(floor.unit("B201").unwrap(), &filters, None);
        assert!(small.highlighted && !small.dimmed);
        let standard = classify_unit(floor.unit("A101").unwrap(), &filters, None);
        assert!(standard.dimmed && !standard.highlighted);
        assert!(!standard.is_clickable());
    }

    #[test]
    fn click_selects_only_available_units() {
        let mut store = loaded_store();
        assert!(!click_unit(&mut store, "A102"));
        store.toggle_filter(UnitType::Compact5x5);
        assert!(!click_unit(&mut store, "A101"));
        assert_eq!(store.phase(), AppPhase::Map);
        assert!(click_unit(&mut store, "B201"));
        assert_eq!(store.selected_unit_id(), Some("B201"));
        assert_eq!(store.phase(), AppPhase::Checkout);
    }
}
