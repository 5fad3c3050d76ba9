//! Tooltip placement and content for the hovered unit.

use eframe::egui::{Pos2, pos2};

use super::*;
use crate::facility::{Feature, feature_list};

/// Horizontal gap between cursor and panel.
const TOOLTIP_OFFSET_X: f32 = 18.0;
/// The panel sits this far above the cursor.
const TOOLTIP_OFFSET_Y: f32 = 12.0;
/// Panel width used for the right-edge flip.
pub const TOOLTIP_WIDTH: f32 = 200.0;

/// Screen position of the panel for a cursor, flipped left near the right edge.
pub fn tooltip_position(pointer: Pos2, viewport_width: f32) -> Pos2 {
    let right = pointer.x + TOOLTIP_OFFSET_X;
    let x = if right + TOOLTIP_WIDTH > viewport_width {
        pointer.x - TOOLTIP_WIDTH
    } else {
        right
    };
    pos2(x, pointer.y - TOOLTIP_OFFSET_Y)
}

#[derive(Clone, Debug, PartialEq)]
pub enum TooltipStatus {
    Price(String),
    Occupied,
}

/// What the panel shows for the hovered unit.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub unit_id: String,
    /// Category name and dimensions, e.g. `Standard · 10'×10'`.
    pub category: String,
    pub features: Vec<Feature>,
    pub status: TooltipStatus,
}

/// Content for the visible tooltip, if its unit is on the current floor.
pub fn tooltip_content(store: &FacilityStore) -> Option<TooltipContent> {
    let tooltip = store.tooltip();
    if !tooltip.visible {
        return None;
    }
    let unit = store.current_floor()?.unit(&tooltip.unit_id)?;
    let info = unit.unit_type.info();
    Some(TooltipContent {
        unit_id: unit.id.clone(),
        category: format!("{} \u{b7} {}", info.name, info.dims),
        features: feature_list(&unit.features),
        status: if unit.occupied {
            TooltipStatus::Occupied
        } else {
            TooltipStatus::Price(unit.unit_type.price_label())
        },
    })
}

impl FacilityStore {
    pub fn show_tooltip(&mut self, unit_id: &str, x: f32, y: f32) {
        self.tooltip = TooltipState {
            visible: true,
            unit_id: unit_id.to_string(),
            x,
            y,
        };
        self.touch(&[Slice::Tooltip]);
    }

    pub fn move_tooltip(&mut self, x: f32, y: f32) {
        if !self.tooltip.visible {
            return;
        }
        self.tooltip.x = x;
        self.tooltip.y = y;
        self.touch(&[Slice::Tooltip]);
    }

    pub fn hide_tooltip(&mut self) {
        if !self.tooltip.visible {
            return;
        }
        self.tooltip = TooltipState::default();
        self.touch(&[Slice::Tooltip]);
    }
}

/// Turns per-frame hover observations into enter/move/leave tooltip actions.
pub struct TooltipTracker {
    store: SharedStore,
    hovered: Option<String>,
    last_pointer: Option<Pos2>,
}

impl TooltipTracker {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            hovered: None,
            last_pointer: None,
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Report the unit under the pointer this frame; `None` means hover-leave.
    pub fn observe(&mut self, unit_id: Option<&str>, pointer: Pos2, viewport_width: f32) {
        let Some(unit_id) = unit_id else {
            self.leave();
            return;
        };
        let position = tooltip_position(pointer, viewport_width);
        let mut store = self.store.borrow_mut();
        if self.hovered.as_deref() != Some(unit_id) || !store.tooltip().visible {
            store.show_tooltip(unit_id, position.x, position.y);
            self.hovered = Some(unit_id.to_string());
        } else if self.last_pointer != Some(pointer) {
            store.move_tooltip(position.x, position.y);
        }
        self.last_pointer = Some(pointer);
    }

    pub fn leave(&mut self) {
        if self.hovered.take().is_some() {
            self.store.borrow_mut().hide_tooltip();
        }
        self.last_pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::controller::test_support::loaded_store;

    #[test]
    fn tooltip_flips_at_right_edge() {
        assert_eq!(tooltip_position(pos2(100.0, 50.0), 1200.0), pos2(118.0, 38.0));
        assert_eq!(tooltip_position(pos2(1000.0, 50.0), 1200.0), pos2(800.0, 38.0));
        // 982 + 18 + 200 == 1200 stays on the right.
        assert_eq!(tooltip_position(pos2(982.0, 0.0), 1200.0).x, 1000.0);
        assert_eq!(tooltip_position(pos2(983.0, 0.0), 1200.0).x, 783.0);
    }

    #[test]
    fn tracker_reports_enter_move_leave() {
        let store = loaded_store().into_shared();
        let mut tracker = TooltipTracker::new(store.clone());
        tracker.observe(Some("A101"), pos2(100.0, 100.0), 1200.0);
        assert_eq!(
            store.borrow().tooltip(),
            &TooltipState {
                visible: true,
                unit_id: "A101".into(),
                x: 118.0,
                y: 88.0,
            }
        );
        tracker.observe(Some("A101"), pos2(120.0, 110.0), 1200.0);
        assert_eq!(store.borrow().tooltip().x, 138.0);
        tracker.observe(None, pos2(120.0, 110.0), 1200.0);
        assert!(!store.borrow().tooltip().visible);
    }

    #[test]
    fn content_shows_price_or_occupied() {
        let mut store = loaded_store();
        store.show_tooltip("A101", 0.0, 0.0);
        let content = tooltip_content(&store).unwrap();
        assert_eq!(content.category, "Standard \u{b7} 10'\u{d7}10'");
        assert_eq!(content.status, TooltipStatus::Price("$149/mo".into()));
        assert_eq!(content.features, vec![Feature::Standard]);

        store.show_tooltip("A102", 0.0, 0.0);
        assert_eq!(tooltip_content(&store).unwrap().status, TooltipStatus::Occupied);

        store.show_tooltip("missing", 0.0, 0.0);
        assert!(tooltip_content(&store).is_none());
    }
}
