use super::*;
use crate::facility::UnitType;

impl FacilityStore {
    /// Returns whether the category is active afterwards.
    pub fn toggle_filter(&mut self, unit_type: UnitType) -> bool {
        let active = self.filters.toggle(unit_type);
        tracing::debug!(unit_type = unit_type.tag(), active, "filter toggled");
        self.hide_tooltip();
        self.touch(&[Slice::Filters]);
        active
    }

    pub fn clear_filters(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        tracing::debug!("filters cleared");
        self.filters.clear();
        self.hide_tooltip();
        self.touch(&[Slice::Filters]);
    }

    pub fn toggle_filter_sidebar(&mut self) {
        self.filter_sidebar_open = !self.filter_sidebar_open;
        self.touch(&[Slice::Filters]);
    }
}
