//! Typed pointer hit-testing for the map container.
//!
//! Overlay panels register their screen rects every frame. A pointer that
//! lands on a registered control belongs to that control; otherwise the
//! floor plan is tested in world space, units before site features.

use eframe::egui::{Pos2, Rect};

use crate::egui_app::state::Viewport;
use crate::facility::Floor;

/// Overlay panels that sit above the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlId {
    TopBar,
    FilterSidebar,
    FloorSwitcher,
    MapStats,
    MapControls,
    CheckoutPanel,
}

/// What lies under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget {
    Control(ControlId),
    Unit(String),
    /// Index into the floor's site features.
    SiteFeature(usize),
    Empty,
}

impl PointerTarget {
    /// Panning may only start on the bare plan; site features are inert.
    pub fn starts_drag(&self) -> bool {
        matches!(self, PointerTarget::Empty | PointerTarget::SiteFeature(_))
    }

    pub fn unit_id(&self) -> Option<&str> {
        match self {
            PointerTarget::Unit(id) => Some(id),
            _ => None,
        }
    }
}

/// Screen rects of interactive overlays, rebuilt each frame.
#[derive(Clone, Debug, Default)]
pub struct InteractiveRegistry {
    regions: Vec<(ControlId, Rect)>,
}

impl InteractiveRegistry {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, control: ControlId, rect: Rect) {
        self.regions.push((control, rect));
    }

    /// Last registered region wins, matching paint order.
    pub fn control_at(&self, pointer: Pos2) -> Option<ControlId> {
        self.regions
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(pointer))
            .map(|(control, _)| *control)
    }
}

/// Classify `pointer` (container-local) against overlays, then the floor under `viewport`.
pub fn resolve_pointer_target(
    registry: &InteractiveRegistry,
    floor: Option<&Floor>,
    viewport: &Viewport,
    container_origin: Pos2,
    pointer: Pos2,
) -> PointerTarget {
    if let Some(control) = registry.control_at(container_origin + pointer.to_vec2()) {
        return PointerTarget::Control(control);
    }
    let Some(floor) = floor else {
        return PointerTarget::Empty;
    };
    if viewport.scale <= 0.0 || !viewport.scale.is_finite() {
        return PointerTarget::Empty;
    }
    let world = viewport.screen_to_world(pointer);
    if let Some(unit) = floor.unit_at(world.x, world.y) {
        return PointerTarget::Unit(unit.id.clone());
    }
    if let Some((index, _)) = floor.site_feature_at(world.x, world.y) {
        return PointerTarget::SiteFeature(index);
    }
    PointerTarget::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::controller::test_support::sample_facility;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn controls_shadow_units() {
        let facility = sample_facility();
        let floor = &facility.floors[0];
        let viewport = Viewport::new(1.0, 0.0, 0.0);
        let mut registry = InteractiveRegistry::default();
        let origin = pos2(0.0, 0.0);
        assert_eq!(
            resolve_pointer_target(&registry, Some(floor), &viewport, origin, pos2(150.0, 150.0)),
            PointerTarget::Unit("A101".into())
        );
        registry.register(
            ControlId::MapControls,
            Rect::from_min_size(pos2(140.0, 140.0), vec2(40.0, 40.0)),
        );
        assert_eq!(
            resolve_pointer_target(&registry, Some(floor), &viewport, origin, pos2(150.0, 150.0)),
            PointerTarget::Control(ControlId::MapControls)
        );
    }

    #[test]
    fn uses_viewport_transform_and_container_origin() {
        let facility = sample_facility();
        let floor = &facility.floors[0];
        let viewport = Viewport::new(0.5, 10.0, 20.0);
        let mut registry = InteractiveRegistry::default();
        registry.register(
            ControlId::TopBar,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(2000.0, 58.0)),
        );
        // World (150,150) -> local (85,95); container sits 100pt below the top bar.
        let target = resolve_pointer_target(
            &registry,
            Some(floor),
            &viewport,
            pos2(0.0, 100.0),
            pos2(85.0, 95.0),
        );
        assert_eq!(target, PointerTarget::Unit("A101".into()));
        assert!(!target.starts_drag());
    }

    #[test]
    fn site_features_and_empty_space_start_drags() {
        let facility = sample_facility();
        let floor = &facility.floors[0];
        let viewport = Viewport::default();
        let registry = InteractiveRegistry::default();
        let origin = pos2(0.0, 0.0);
        let office =
            resolve_pointer_target(&registry, Some(floor), &viewport, origin, pos2(1050.0, 150.0));
        assert_eq!(office, PointerTarget::SiteFeature(0));
        assert!(office.starts_drag());
        let empty =
            resolve_pointer_target(&registry, Some(floor), &viewport, origin, pos2(4000.0, 4000.0));
        assert!(empty.starts_drag());
    }
}
