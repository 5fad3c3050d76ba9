//! Pointer and wheel input to target-viewport mutations.

use eframe::egui::{Pos2, Vec2};

use super::*;

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    start_pointer: Pos2,
    start_pan: Vec2,
}

/// Converts container-local pointer input into store viewport actions.
///
/// Drags write instant updates; wheel zoom writes short smoothed updates
/// anchored at the cursor.
pub struct ViewportController {
    store: SharedStore,
    drag: Option<DragAnchor>,
}

impl ViewportController {
    pub fn new(store: SharedStore) -> Self {
        Self { store, drag: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag unless the pointer is over something interactive.
    pub fn pointer_down(&mut self, pointer: Pos2, target: &PointerTarget) -> bool {
        if !target.starts_drag() {
            return false;
        }
        let viewport = self.store.borrow().target_viewport();
        self.drag = Some(DragAnchor {
            start_pointer: pointer,
            start_pan: Vec2::new(viewport.pan_x, viewport.pan_y),
        });
        true
    }

    pub fn pointer_move(&mut self, pointer: Pos2) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let pan = anchor.start_pan + (pointer - anchor.start_pointer);
        let mut store = self.store.borrow_mut();
        let scale = store.target_viewport().scale;
        store.set_viewport(scale, pan.x, pan.y);
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn pointer_leave(&mut self) {
        self.drag = None;
    }

    /// Wheel zoom about `cursor`. Positive deltas zoom out, negative zoom in.
    pub fn wheel(&mut self, cursor: Pos2, raw_delta: f32) -> bool {
        if !raw_delta.is_finite() || raw_delta == 0.0 {
            return false;
        }
        let mut store = self.store.borrow_mut();
        let tuning = *store.tuning();
        let delta = raw_delta.clamp(-tuning.wheel_max_delta, tuning.wheel_max_delta);
        let strength = delta.abs() / tuning.wheel_max_delta * tuning.wheel_max_strength;
        let factor = if delta > 0.0 {
            1.0 - strength
        } else {
            1.0 + strength
        };
        store.zoom_at(cursor, factor, ViewportMotion::Wheel)
    }

    /// Trackpad pinch: `factor` is the ratio reported by the platform.
    pub fn pinch(&mut self, cursor: Pos2, factor: f32) -> bool {
        if factor <= 0.0 || factor == 1.0 {
            return false;
        }
        self.store
            .borrow_mut()
            .zoom_at(cursor, factor, ViewportMotion::Wheel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::controller::test_support::empty_store;
    use eframe::egui::pos2;

    #[test]
    fn drag_tracks_pointer_exactly() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        store.borrow_mut().set_viewport(0.5, 0.0, 0.0);
        assert!(controller.pointer_down(pos2(100.0, 100.0), &PointerTarget::Empty));
        controller.pointer_move(pos2(140.0, 130.0));
        let target = store.borrow().target_viewport();
        assert_eq!((target.pan_x, target.pan_y), (40.0, 30.0));
        assert_eq!(target.scale, 0.5);
        assert_eq!(store.borrow().motion(), ViewportMotion::Instant);
    }

    #[test]
    fn drag_never_starts_on_units_or_controls() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        assert!(!controller.pointer_down(pos2(0.0, 0.0), &PointerTarget::Unit("A101".into())));
        assert!(!controller.pointer_down(
            pos2(0.0, 0.0),
            &PointerTarget::Control(ControlId::MapControls)
        ));
        assert!(!controller.pointer_move(pos2(50.0, 50.0)));
        assert_eq!(store.borrow().target_viewport(), Viewport::default());
    }

    #[test]
    fn drag_ends_on_release_and_leave() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        controller.pointer_down(pos2(0.0, 0.0), &PointerTarget::Empty);
        controller.pointer_up();
        assert!(!controller.pointer_move(pos2(10.0, 10.0)));
        controller.pointer_down(pos2(0.0, 0.0), &PointerTarget::Empty);
        controller.pointer_leave();
        assert!(!controller.is_dragging());
        assert_eq!(store.borrow().target_viewport().pan_x, 0.0);
    }

    #[test]
    fn wheel_keeps_world_point_under_cursor() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        let cases = [
            (1.0, 0.0, 0.0, pos2(300.0, 200.0), -100.0),
            (0.12, 57.0, -31.0, pos2(640.0, 410.0), 53.0),
            (2.0, -900.0, 400.0, pos2(12.0, 700.0), -7.5),
            (0.05, 10.0, 10.0, pos2(500.0, 500.0), 100.0),
        ];
        for (scale, pan_x, pan_y, cursor, delta) in cases {
            store.borrow_mut().set_viewport(scale, pan_x, pan_y);
            let before = store.borrow().target_viewport().screen_to_world(cursor);
            controller.wheel(cursor, delta);
            let after = store.borrow().target_viewport();
            let projected = after.world_to_screen(before.x, before.y);
            assert!((projected.x - cursor.x).abs() < 1e-2, "{projected:?} vs {cursor:?}");
            assert!((projected.y - cursor.y).abs() < 1e-2, "{projected:?} vs {cursor:?}");
        }
    }

    #[test]
    fn wheel_strength_is_clamped_and_multiplicative() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        store.borrow_mut().set_viewport(1.0, 0.0, 0.0);
        controller.wheel(pos2(0.0, 0.0), -5000.0);
        assert!((store.borrow().target_viewport().scale - 1.06).abs() < 1e-6);
        assert_eq!(store.borrow().motion(), ViewportMotion::Wheel);
        controller.wheel(pos2(0.0, 0.0), 50.0);
        assert!((store.borrow().target_viewport().scale - 1.06 * 0.97).abs() < 1e-6);
    }

    #[test]
    fn scale_stays_in_range_under_any_zoom_sequence() {
        let store = empty_store().into_shared();
        let mut controller = ViewportController::new(store.clone());
        let tuning = *store.borrow().tuning();
        for step in 0..400 {
            let delta = if (step / 100) % 2 == 0 { -100.0 } else { 100.0 };
            controller.wheel(pos2(320.0, 240.0), delta);
            store.borrow_mut().zoom_by(if step % 3 == 0 { 0.2 } else { -0.2 });
            let scale = store.borrow().target_viewport().scale;
            assert!(scale >= tuning.min_scale && scale <= tuning.max_scale);
        }
        store.borrow_mut().zoom_by(-5.0);
        assert_eq!(store.borrow().target_viewport().scale, tuning.min_scale);
    }
}
