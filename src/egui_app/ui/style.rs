use eframe::egui::{
    self, Color32, CornerRadius, Frame, Margin, Stroke, Visuals, epaint::Shadow,
    style::WidgetVisuals,
};

use crate::config::Theme;
use crate::egui_app::controller::UnitVisualState;
use crate::egui_app::state::StatusTone;
use crate::facility::SiteFeatureKind;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub floor_fill: Color32,
    pub floor_outline: Color32,
    pub unit_vacant: Color32,
    pub unit_occupied: Color32,
    pub unit_selected: Color32,
    pub unit_highlight: Color32,
    pub unit_outline: Color32,
    pub site_office: Color32,
    pub site_elevator: Color32,
    pub site_stairs: Color32,
    pub site_highlight: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub error: Color32,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg_primary: Color32::from_rgb(12, 14, 18),
            bg_secondary: Color32::from_rgb(22, 25, 31),
            bg_tertiary: Color32::from_rgb(36, 40, 48),
            panel_outline: Color32::from_rgb(48, 54, 64),
            text_primary: Color32::from_rgb(226, 230, 236),
            text_muted: Color32::from_rgb(140, 148, 160),
            accent: Color32::from_rgb(255, 196, 0),
            floor_fill: Color32::from_rgb(28, 31, 38),
            floor_outline: Color32::from_rgb(70, 76, 88),
            unit_vacant: Color32::from_rgb(46, 125, 92),
            unit_occupied: Color32::from_rgb(58, 62, 70),
            unit_selected: Color32::from_rgb(255, 196, 0),
            unit_highlight: Color32::from_rgb(72, 190, 140),
            unit_outline: Color32::from_rgb(16, 18, 22),
            site_office: Color32::from_rgb(52, 84, 140),
            site_elevator: Color32::from_rgb(96, 72, 140),
            site_stairs: Color32::from_rgb(84, 88, 96),
            site_highlight: Color32::from_rgb(140, 96, 40),
            warning: Color32::from_rgb(230, 150, 70),
            success: Color32::from_rgb(102, 196, 140),
            error: Color32::from_rgb(230, 90, 90),
        },
        Theme::Light => Palette {
            bg_primary: Color32::from_rgb(246, 247, 249),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(232, 235, 240),
            panel_outline: Color32::from_rgb(210, 214, 222),
            text_primary: Color32::from_rgb(24, 28, 36),
            text_muted: Color32::from_rgb(100, 108, 120),
            accent: Color32::from_rgb(214, 152, 0),
            floor_fill: Color32::from_rgb(238, 240, 244),
            floor_outline: Color32::from_rgb(170, 176, 188),
            unit_vacant: Color32::from_rgb(92, 180, 132),
            unit_occupied: Color32::from_rgb(196, 200, 208),
            unit_selected: Color32::from_rgb(240, 170, 0),
            unit_highlight: Color32::from_rgb(40, 160, 110),
            unit_outline: Color32::from_rgb(255, 255, 255),
            site_office: Color32::from_rgb(150, 180, 230),
            site_elevator: Color32::from_rgb(190, 170, 230),
            site_stairs: Color32::from_rgb(200, 204, 212),
            site_highlight: Color32::from_rgb(240, 200, 140),
            warning: Color32::from_rgb(210, 120, 40),
            success: Color32::from_rgb(40, 150, 96),
            error: Color32::from_rgb(200, 50, 50),
        },
    }
}

pub fn apply_visuals(ctx: &egui::Context, theme: Theme) {
    let palette = palette(theme);
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    set_widget(&mut visuals.widgets.open, palette);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
    visuals.popup_shadow = Shadow::NONE;
    ctx.set_visuals(visuals);
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Floating card used by every map overlay.
pub fn panel_frame(palette: &Palette) -> Frame {
    Frame::new()
        .fill(palette.bg_secondary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(12))
}

pub fn status_color(tone: StatusTone, palette: &Palette) -> Color32 {
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}

pub fn unit_fill(state: UnitVisualState, hovered: bool, palette: &Palette) -> Color32 {
    let base = if state.occupied {
        palette.unit_occupied
    } else if state.selected {
        palette.unit_selected
    } else if state.highlighted {
        palette.unit_highlight
    } else {
        palette.unit_vacant
    };
    let base = if hovered && state.is_clickable() {
        base.lerp_to_gamma(Color32::WHITE, 0.18)
    } else {
        base
    };
    if state.dimmed {
        base.gamma_multiply(0.25)
    } else {
        base
    }
}

pub fn unit_stroke(state: UnitVisualState, palette: &Palette) -> Stroke {
    if state.selected {
        Stroke::new(3.0, palette.accent)
    } else if state.highlighted {
        Stroke::new(2.0, palette.unit_highlight.lerp_to_gamma(Color32::WHITE, 0.3))
    } else {
        Stroke::new(1.0, palette.unit_outline)
    }
}

pub fn site_feature_fill(kind: SiteFeatureKind, palette: &Palette) -> Color32 {
    match kind {
        SiteFeatureKind::Office => palette.site_office,
        SiteFeatureKind::Elevator => palette.site_elevator,
        SiteFeatureKind::Stairs => palette.site_stairs,
        SiteFeatureKind::Highlight => palette.site_highlight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimmed_units_are_fainter_than_normal_ones() {
        let palette = palette(Theme::Dark);
        let normal = unit_fill(UnitVisualState::default(), false, &palette);
        let dimmed = unit_fill(
            UnitVisualState {
                dimmed: true,
                ..UnitVisualState::default()
            },
            false,
            &palette,
        );
        assert!(dimmed.a() < normal.a());
    }

    #[test]
    fn hover_does_not_brighten_occupied_units() {
        let palette = palette(Theme::Light);
        let occupied = UnitVisualState {
            occupied: true,
            ..UnitVisualState::default()
        };
        assert_eq!(
            unit_fill(occupied, true, &palette),
            unit_fill(occupied, false, &palette)
        );
    }
}
