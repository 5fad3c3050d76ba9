use crate::config::ViewportTuning;
use crate::egui_app::state::{ContainerSize, Viewport};

/// Fit a floor into the container below the top bar, centered with a margin.
///
/// Returns `None` when either size is empty or not finite, so callers never
/// store NaN pans. Equal inputs give bit-identical results.
pub fn fit_viewport(
    floor_width: f32,
    floor_height: f32,
    container: ContainerSize,
    tuning: &ViewportTuning,
) -> Option<Viewport> {
    if !container.is_usable()
        || !floor_width.is_finite()
        || !floor_height.is_finite()
        || floor_width <= 0.0
        || floor_height <= 0.0
    {
        return None;
    }
    let usable_height = container.height - tuning.top_inset;
    if usable_height <= 0.0 {
        return None;
    }
    let fit = (container.width / (floor_width + tuning.fit_margin))
        .min(usable_height / (floor_height + tuning.fit_margin))
        * tuning.fit_fill;
    let scale = fit.clamp(tuning.min_scale, tuning.max_scale);
    Some(Viewport {
        scale,
        pan_x: (container.width - floor_width * scale) / 2.0,
        pan_y: (usable_height - floor_height * scale) / 2.0 + tuning.top_inset / 2.0,
    })
}
