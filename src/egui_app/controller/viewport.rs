use eframe::egui::{Pos2, pos2};

use super::fit::fit_viewport;
use super::*;

impl FacilityStore {
    /// Replace the target viewport with no smoothing. Used by drag.
    pub fn set_viewport(&mut self, scale: f32, pan_x: f32, pan_y: f32) {
        if !pan_x.is_finite() || !pan_y.is_finite() {
            return;
        }
        self.target = Viewport {
            scale: self.clamp_scale(scale),
            pan_x,
            pan_y,
        };
        self.motion = ViewportMotion::Instant;
        self.touch(&[Slice::Viewport]);
    }

    /// Multiplicative zoom about the container center, animated as a glide.
    pub fn zoom_by(&mut self, delta: f32) -> bool {
        let anchor = self
            .container
            .map(|container| container.center())
            .unwrap_or(pos2(0.0, 0.0));
        self.zoom_at(anchor, 1.0 + delta, ViewportMotion::Glide)
    }

    /// Scale by `factor` keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32, motion: ViewportMotion) -> bool {
        if !factor.is_finite() || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return false;
        }
        let scale = self.clamp_scale(self.target.scale);
        let next = self.clamp_scale(scale * factor);
        if next == self.target.scale {
            return false;
        }
        let ratio = next / scale;
        self.target = Viewport {
            scale: next,
            pan_x: anchor.x - (anchor.x - self.target.pan_x) * ratio,
            pan_y: anchor.y - (anchor.y - self.target.pan_y) * ratio,
        };
        self.motion = motion;
        self.touch(&[Slice::Viewport]);
        true
    }

    /// Fit the current floor into the cached container size.
    ///
    /// Without a measured container the fit is deferred until
    /// [`set_container_size`](Self::set_container_size) delivers one.
    pub fn reset_view(&mut self) -> bool {
        let Some((width, height)) = self
            .current_floor()
            .map(|floor| (floor.width, floor.height))
        else {
            return false;
        };
        let fitted = self
            .container
            .and_then(|container| fit_viewport(width, height, container, &self.tuning));
        let Some(fitted) = fitted else {
            tracing::debug!("deferring fit until the container is measured");
            self.fit_pending = true;
            return false;
        };
        tracing::debug!(
            scale = fitted.scale,
            pan_x = fitted.pan_x,
            pan_y = fitted.pan_y,
            "viewport reset to fit"
        );
        self.fit_pending = false;
        self.target = fitted;
        self.motion = ViewportMotion::Glide;
        self.touch(&[Slice::Viewport]);
        true
    }

    /// Cache the measured container. Unusable sizes keep the last good one.
    pub fn set_container_size(&mut self, size: ContainerSize) {
        if !size.is_usable() || self.container == Some(size) {
            return;
        }
        self.container = Some(size);
        if self.fit_pending {
            self.reset_view();
        }
    }

    fn clamp_scale(&self, scale: f32) -> f32 {
        if scale.is_finite() {
            scale.clamp(self.tuning.min_scale, self.tuning.max_scale)
        } else {
            self.tuning.min_scale
        }
    }
}
