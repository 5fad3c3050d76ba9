//! egui renderer for the map client.

use std::sync::Arc;

use eframe::egui;

use crate::config::{self, AppSettings, Theme};
use crate::egui_app::controller::{
    FacilityStore, FetchWorker, InteractiveRegistry, SharedStore, SurfaceTransform,
    TooltipTracker, ViewportAnimator, ViewportController,
};
use crate::egui_app::state::{AppPhase, StatusTone, Viewport};
use crate::facility::FacilityFetcher;

mod checkout;
mod landing;
mod map_canvas;
mod map_panels;
mod shell;
mod style;
mod tooltip_panel;

/// Height of the top bar overlaid on the map.
pub(crate) const TOP_BAR_HEIGHT: f32 = 58.0;
/// Smallest window that still fits the overlays around a usable map.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);

/// Input and animation state that only exists while a floor map is shown.
struct MapView {
    controller: ViewportController,
    animator: ViewportAnimator<SurfaceTransform>,
    tooltip: TooltipTracker,
}

impl MapView {
    fn mount(store: &SharedStore) -> Self {
        Self {
            controller: ViewportController::new(store.clone()),
            animator: ViewportAnimator::new(store.clone(), SurfaceTransform::default()),
            tooltip: TooltipTracker::new(store.clone()),
        }
    }

    fn visual(&self) -> Viewport {
        self.animator.sink().current()
    }
}

/// Renders the egui UI over the shared facility store.
pub struct EguiApp {
    store: SharedStore,
    settings: AppSettings,
    map_view: Option<MapView>,
    registry: InteractiveRegistry,
    applied_theme: Option<Theme>,
}

impl EguiApp {
    /// Spawn the fetch worker and request the facility list.
    pub fn new(
        ctx: &egui::Context,
        settings: AppSettings,
        fetcher: Arc<dyn FacilityFetcher>,
    ) -> Self {
        let repaint = ctx.clone();
        let worker = FetchWorker::spawn_with_waker(fetcher, Box::new(move || repaint.request_repaint()));
        let mut store = FacilityStore::new(settings.viewport, worker);
        store.load_facility_list();
        Self {
            store: store.into_shared(),
            settings,
            map_view: None,
            registry: InteractiveRegistry::default(),
            applied_theme: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.settings.theme) {
            return;
        }
        style::apply_visuals(ctx, self.settings.theme);
        self.applied_theme = Some(self.settings.theme);
    }

    fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        if let Err(err) = config::save(&self.settings) {
            tracing::warn!(error = %err, "failed to persist theme");
            self.store
                .borrow_mut()
                .set_status(format!("Could not save theme: {err}"), StatusTone::Warning);
        }
    }

    /// Mount the map view while a facility is open; cancel its animation otherwise.
    fn sync_map_view(&mut self) {
        let wants_map = {
            let store = self.store.borrow();
            store.phase() != AppPhase::Landing && store.facility().is_some()
        };
        if wants_map {
            if self.map_view.is_none() {
                self.map_view = Some(MapView::mount(&self.store));
            }
        } else if let Some(mut view) = self.map_view.take() {
            view.animator.cancel();
            view.tooltip.leave();
        }
    }
}
