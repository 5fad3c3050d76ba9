use eframe::egui::{Pos2, pos2};

use crate::config::ViewportTuning;

/// Affine map from floor coordinates into container-local screen points:
/// `screen = pan + world * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(scale: f32, pan_x: f32, pan_y: f32) -> Self {
        Self {
            scale,
            pan_x,
            pan_y,
        }
    }

    pub fn world_to_screen(&self, x: f32, y: f32) -> Pos2 {
        pos2(self.pan_x + x * self.scale, self.pan_y + y * self.scale)
    }

    pub fn screen_to_world(&self, point: Pos2) -> Pos2 {
        pos2(
            (point.x - self.pan_x) / self.scale,
            (point.y - self.pan_y) / self.scale,
        )
    }

    /// Within the settle epsilons of `other` on every field.
    pub fn settled_on(&self, other: &Viewport, tuning: &ViewportTuning) -> bool {
        (self.scale - other.scale).abs() < tuning.settle_scale_epsilon
            && (self.pan_x - other.pan_x).abs() < tuning.settle_pan_epsilon
            && (self.pan_y - other.pan_y).abs() < tuning.settle_pan_epsilon
    }
}

/// How the latest target change should be animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportMotion {
    /// Drag: the drawn view tracks the target with no lag.
    #[default]
    Instant,
    /// Wheel zoom: short, snappy smoothing.
    Wheel,
    /// Buttons, resets and floor switches: long glide.
    Glide,
}

impl ViewportMotion {
    pub fn rate(self, tuning: &ViewportTuning) -> f32 {
        match self {
            ViewportMotion::Instant => tuning.instant_rate,
            ViewportMotion::Wheel => tuning.wheel_rate,
            ViewportMotion::Glide => tuning.glide_rate,
        }
    }
}

/// Measured size of the map container in screen points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Pos2 {
        pos2(self.width * 0.5, self.height * 0.5)
    }

    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_and_world_are_inverse() {
        let viewport = Viewport::new(0.25, 120.0, -48.0);
        let screen = viewport.world_to_screen(800.0, 64.0);
        assert_eq!(screen, pos2(320.0, -32.0));
        let world = viewport.screen_to_world(screen);
        assert!((world.x - 800.0).abs() < 1e-3 && (world.y - 64.0).abs() < 1e-3);
    }

    #[test]
    fn motion_rates_follow_tuning() {
        let tuning = ViewportTuning::default();
        assert_eq!(ViewportMotion::Instant.rate(&tuning), 1.0);
        assert_eq!(ViewportMotion::Wheel.rate(&tuning), 0.18);
        assert_eq!(ViewportMotion::Glide.rate(&tuning), 0.09);
    }
}
