use super::*;

impl FacilityStore {
    /// Show another floor of the loaded facility and glide to its fitted view.
    pub fn switch_floor(&mut self, floor_id: &str) -> bool {
        let Some(facility) = self.facility.as_ref() else {
            return false;
        };
        if facility.floor(floor_id).is_none() {
            tracing::debug!(floor = %floor_id, "ignoring unknown floor");
            return false;
        }
        tracing::debug!(floor = %floor_id, "switching floor");
        self.current_floor_id = Some(floor_id.to_string());
        // Unit ids are only unique per floor, so a selection never carries over.
        self.deselect_unit();
        self.hide_tooltip();
        self.touch(&[Slice::Floor]);
        self.reset_view();
        true
    }

    /// Select a vacant unit on the current floor and open checkout.
    pub fn select_unit(&mut self, unit_id: &str) -> bool {
        let Some(unit) = self.current_floor().and_then(|floor| floor.unit(unit_id)) else {
            return false;
        };
        if unit.occupied {
            return false;
        }
        tracing::debug!(unit = %unit_id, "unit selected");
        self.selected_unit_id = Some(unit_id.to_string());
        self.phase = AppPhase::Checkout;
        self.hide_tooltip();
        self.touch(&[Slice::Selection, Slice::Phase]);
        true
    }

    pub fn deselect_unit(&mut self) {
        let had_selection = self.selected_unit_id.take().is_some();
        let leaving_checkout = self.phase == AppPhase::Checkout;
        if leaving_checkout {
            self.phase = AppPhase::Map;
        }
        if had_selection || leaving_checkout {
            self.touch(&[Slice::Selection, Slice::Phase]);
        }
    }

    /// Leave checkout (Escape or "back to map").
    pub fn go_to_map(&mut self) {
        if self.facility.is_none() {
            return;
        }
        self.deselect_unit();
    }
}
