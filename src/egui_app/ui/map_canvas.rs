use eframe::egui::{self, Align2, Color32, FontId, Frame, Painter, Pos2, Rect, Sense, Stroke};

use super::style::{self, Palette};
use super::*;
use crate::egui_app::controller::{PointerTarget, classify_unit, click_unit, resolve_pointer_target};
use crate::egui_app::state::ContainerSize;
use crate::facility::{Feature, FilterSet, Floor, FloorRect, feature_list};

/// Unit rects smaller than this on screen get no id label.
const MIN_LABEL_WIDTH: f32 = 28.0;
const MIN_LABEL_HEIGHT: f32 = 14.0;
/// Feature icons need a roomier rect.
const MIN_ICON_WIDTH: f32 = 64.0;

/// Pointer input for one frame, in screen points.
struct PointerInput {
    hover: Option<Pos2>,
    pressed: bool,
    down: bool,
    released: bool,
    scroll_y: f32,
    pinch: f32,
    zoom_modifier: bool,
}

impl PointerInput {
    fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            hover: i.pointer.hover_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
            scroll_y: i.raw_scroll_delta.y,
            pinch: i.zoom_delta(),
            zoom_modifier: i.modifiers.command,
        })
    }

    /// At most one zoom per frame. Ctrl/Cmd+wheel also shows up in `zoom_delta`,
    /// so the pinch path wins whenever it reports anything.
    fn zoom_gesture(&self) -> Option<ZoomGesture> {
        if self.pinch != 1.0 {
            return Some(ZoomGesture::Pinch(self.pinch));
        }
        if self.scroll_y != 0.0 && !self.zoom_modifier {
            // egui reports wheel-up as positive; the zoom math expects wheel-down positive.
            return Some(ZoomGesture::Wheel(-self.scroll_y));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ZoomGesture {
    Wheel(f32),
    Pinch(f32),
}

impl EguiApp {
    pub(super) fn render_map_canvas(&mut self, ctx: &egui::Context, palette: &Palette) {
        egui::CentralPanel::default()
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
                self.store
                    .borrow_mut()
                    .set_container_size(ContainerSize::new(rect.width(), rect.height()));
                self.handle_map_input(ctx, rect, &response);
                self.advance_animation(ctx);
                self.paint_floor(&ui.painter_at(rect), rect, palette);
            });
    }

    fn handle_map_input(&mut self, ctx: &egui::Context, rect: Rect, response: &egui::Response) {
        let Some(view) = self.map_view.as_mut() else {
            return;
        };
        let input = PointerInput::capture(ctx);
        let visual = view.visual();
        let viewport_width = rect.right();
        let Some(hover) = input.hover.filter(|pos| rect.contains(*pos)) else {
            view.controller.pointer_leave();
            view.tooltip.leave();
            return;
        };
        let local = (hover - rect.min).to_pos2();
        let target = {
            let store = self.store.borrow();
            resolve_pointer_target(&self.registry, store.current_floor(), &visual, rect.min, local)
        };

        if input.pressed {
            view.controller.pointer_down(local, &target);
        }
        if view.controller.is_dragging() {
            if input.down {
                view.controller.pointer_move(local);
            }
            if input.released || !input.down {
                view.controller.pointer_up();
            }
            view.tooltip.leave();
            return;
        }

        if response.clicked()
            && let PointerTarget::Unit(unit_id) = &target
        {
            click_unit(&mut self.store.borrow_mut(), unit_id);
        }

        if matches!(target, PointerTarget::Control(_)) {
            view.tooltip.leave();
            return;
        }
        view.tooltip.observe(target.unit_id(), hover, viewport_width);

        match input.zoom_gesture() {
            Some(ZoomGesture::Wheel(delta)) => {
                view.controller.wheel(local, delta);
            }
            Some(ZoomGesture::Pinch(factor)) => {
                view.controller.pinch(local, factor);
            }
            None => {}
        }
    }

    fn advance_animation(&mut self, ctx: &egui::Context) {
        let Some(view) = self.map_view.as_mut() else {
            return;
        };
        let now_ms = ctx.input(|i| i.time) * 1000.0;
        if view.animator.tick(now_ms) {
            ctx.request_repaint();
        }
    }

    fn paint_floor(&self, painter: &Painter, rect: Rect, palette: &Palette) {
        let Some(view) = self.map_view.as_ref() else {
            return;
        };
        let store = self.store.borrow();
        let Some(floor) = store.current_floor() else {
            return;
        };
        let viewport = view.visual();
        let to_screen = |r: &FloorRect| {
            let min = viewport.world_to_screen(r.x, r.y);
            let max = viewport.world_to_screen(r.right(), r.bottom());
            Rect::from_min_max(rect.min + min.to_vec2(), rect.min + max.to_vec2())
        };

        let margin = store.tuning().fit_margin / 2.0;
        let backdrop = to_screen(&FloorRect::new(
            -margin,
            -margin,
            floor.width + margin * 2.0,
            floor.height + margin * 2.0,
        ));
        painter.rect_filled(backdrop, 6.0, palette.floor_fill);
        painter.rect_stroke(
            backdrop,
            6.0,
            Stroke::new(1.5, palette.floor_outline),
            egui::StrokeKind::Inside,
        );

        paint_site_features(painter, floor, &to_screen, rect, palette);
        paint_units(
            painter,
            floor,
            store.filters(),
            store.selected_unit_id(),
            view.tooltip.hovered(),
            &to_screen,
            rect,
            palette,
        );
    }
}

fn paint_site_features(
    painter: &Painter,
    floor: &Floor,
    to_screen: &dyn Fn(&FloorRect) -> Rect,
    clip: Rect,
    palette: &Palette,
) {
    for feature in &floor.site_features {
        let screen = to_screen(&feature.rect);
        if !screen.intersects(clip) {
            continue;
        }
        painter.rect_filled(screen, 2.0, style::site_feature_fill(feature.kind, palette));
        if screen.width() >= MIN_LABEL_WIDTH * 2.0 && screen.height() >= MIN_LABEL_HEIGHT {
            painter.text(
                screen.center(),
                Align2::CENTER_CENTER,
                feature.display_label(),
                label_font(screen),
                palette.text_primary,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_units(
    painter: &Painter,
    floor: &Floor,
    filters: &FilterSet,
    selected: Option<&str>,
    hovered: Option<&str>,
    to_screen: &dyn Fn(&FloorRect) -> Rect,
    clip: Rect,
    palette: &Palette,
) {
    for unit in &floor.units {
        let screen = to_screen(&unit.rect);
        if !screen.intersects(clip) {
            continue;
        }
        let state = classify_unit(unit, filters, selected);
        let is_hovered = hovered == Some(unit.id.as_str());
        painter.rect_filled(screen, 1.5, style::unit_fill(state, is_hovered, palette));
        painter.rect_stroke(
            screen,
            1.5,
            style::unit_stroke(state, palette),
            egui::StrokeKind::Inside,
        );
        if screen.width() < MIN_LABEL_WIDTH || screen.height() < MIN_LABEL_HEIGHT {
            continue;
        }
        let text_color = if state.dimmed {
            palette.text_muted.gamma_multiply(0.5)
        } else {
            palette.text_primary
        };
        let show_icons = state.highlighted
            && screen.width() >= MIN_ICON_WIDTH
            && screen.height() >= MIN_LABEL_HEIGHT * 3.0;
        let label_pos = if show_icons {
            screen.center() - egui::vec2(0.0, screen.height() * 0.18)
        } else {
            screen.center()
        };
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            &unit.id,
            label_font(screen),
            text_color,
        );
        if show_icons {
            let icons: String = feature_list(&unit.features)
                .into_iter()
                .filter(|feature| *feature != Feature::Standard)
                .map(Feature::icon)
                .collect();
            if !icons.is_empty() {
                painter.text(
                    screen.center() + egui::vec2(0.0, screen.height() * 0.2),
                    Align2::CENTER_CENTER,
                    icons,
                    label_font(screen),
                    Color32::WHITE,
                );
            }
        }
    }
}

fn label_font(screen: Rect) -> FontId {
    FontId::proportional((screen.height() * 0.28).clamp(8.0, 16.0))
}
