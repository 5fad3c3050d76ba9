use serde::{Deserialize, Serialize};

/// Persisted client settings stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub viewport: ViewportTuning,
    #[serde(default)]
    pub theme: Theme,
}

impl AppSettings {
    /// Clamp tuning values into usable ranges.
    pub fn normalized(mut self) -> Self {
        self.viewport = self.viewport.normalized();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// `http(s)://` origin or a directory containing `data/facilities.json`.
    #[serde(default = "default_data_source")]
    pub source: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: default_data_source(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Feel constants for pan, zoom, smoothing and fit-to-view.
///
/// Defaults are tuned by hand; they do not come from a physical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportTuning {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Raw wheel deltas are clamped to +/- this value.
    pub wheel_max_delta: f32,
    /// Fraction of the current scale applied by a full-strength wheel tick.
    pub wheel_max_strength: f32,
    /// Per-frame smoothing rate for drag updates.
    pub instant_rate: f32,
    /// Per-frame smoothing rate for wheel zoom.
    pub wheel_rate: f32,
    /// Per-frame smoothing rate for buttons, resets and floor switches.
    pub glide_rate: f32,
    /// Border added around the floor before fitting, in floor units.
    pub fit_margin: f32,
    /// Portion of the container the fitted floor may fill.
    pub fit_fill: f32,
    /// Height covered by the top bar; fitting happens below it.
    pub top_inset: f32,
    pub settle_scale_epsilon: f32,
    pub settle_pan_epsilon: f32,
    /// Upper bound on the normalized frame delta after a stall.
    pub max_frame_dt: f32,
    /// Frame duration treated as `dt = 1`.
    pub reference_frame_ms: f32,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            min_scale: 0.05,
            max_scale: 2.5,
            wheel_max_delta: 100.0,
            wheel_max_strength: 0.06,
            instant_rate: 1.0,
            wheel_rate: 0.18,
            glide_rate: 0.09,
            fit_margin: 48.0,
            fit_fill: 0.85,
            top_inset: 58.0,
            settle_scale_epsilon: 5e-5,
            settle_pan_epsilon: 0.01,
            max_frame_dt: 3.0,
            reference_frame_ms: 16.67,
        }
    }
}

impl ViewportTuning {
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let rate = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value.min(1.0)
            } else {
                fallback
            }
        };
        let min_scale = positive(self.min_scale, defaults.min_scale);
        let max_scale = positive(self.max_scale, defaults.max_scale);
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            min_scale,
            max_scale,
            wheel_max_delta: positive(self.wheel_max_delta, defaults.wheel_max_delta),
            wheel_max_strength: rate(self.wheel_max_strength, defaults.wheel_max_strength)
                .min(0.5),
            instant_rate: rate(self.instant_rate, defaults.instant_rate),
            wheel_rate: rate(self.wheel_rate, defaults.wheel_rate),
            glide_rate: rate(self.glide_rate, defaults.glide_rate),
            fit_margin: if self.fit_margin.is_finite() {
                self.fit_margin.max(0.0)
            } else {
                defaults.fit_margin
            },
            fit_fill: rate(self.fit_fill, defaults.fit_fill),
            top_inset: if self.top_inset.is_finite() {
                self.top_inset.max(0.0)
            } else {
                defaults.top_inset
            },
            settle_scale_epsilon: positive(
                self.settle_scale_epsilon,
                defaults.settle_scale_epsilon,
            ),
            settle_pan_epsilon: positive(self.settle_pan_epsilon, defaults.settle_pan_epsilon),
            max_frame_dt: positive(self.max_frame_dt, defaults.max_frame_dt),
            reference_frame_ms: positive(self.reference_frame_ms, defaults.reference_frame_ms),
        }
    }
}

fn default_data_source() -> String {
    "http://localhost:5173".to_string()
}
