//! Facility store and the controllers that drive the map view.
//!
//! [`FacilityStore`] is the single owner of application state. The map view
//! reaches it through a [`SharedStore`] handle injected into the
//! [`ViewportController`] and [`ViewportAnimator`]; all mutation goes through
//! the store's actions, each of which bumps the revision of the slices it
//! touches.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ViewportTuning;
use crate::egui_app::state::*;
use crate::facility::{Facility, FilterSet, Floor, ManifestEntry, Unit};

mod animator;
mod catalog;
mod filters;
mod fit;
mod hit_test;
mod jobs;
mod navigation;
mod slices;
mod tooltip;
mod unit_state;
mod viewport;
mod viewport_controller;

#[cfg(test)]
pub(crate) mod test_support;

pub use animator::{FrameOutcome, SurfaceTransform, TransformSink, ViewportAnimator};
pub use fit::fit_viewport;
pub use hit_test::{ControlId, InteractiveRegistry, PointerTarget, resolve_pointer_target};
pub use jobs::{FetchWorker, Waker};
pub use slices::{Slice, SliceWatcher};
pub use tooltip::{
    TOOLTIP_WIDTH, TooltipContent, TooltipStatus, TooltipTracker, tooltip_content,
    tooltip_position,
};
pub use unit_state::{UnitVisualState, classify_unit, click_unit};
pub use viewport_controller::ViewportController;

use jobs::PendingFetches;
use slices::SliceRevisions;

/// Store handle shared by the shell, the controller and the animator.
pub type SharedStore = Rc<RefCell<FacilityStore>>;

/// Single source of truth for the map client.
pub struct FacilityStore {
    tuning: ViewportTuning,
    worker: FetchWorker,
    pending: PendingFetches,
    manifest: Vec<ManifestEntry>,
    facility: Option<Rc<Facility>>,
    error: Option<String>,
    phase: AppPhase,
    current_floor_id: Option<String>,
    filters: FilterSet,
    filter_sidebar_open: bool,
    selected_unit_id: Option<String>,
    target: Viewport,
    motion: ViewportMotion,
    container: Option<ContainerSize>,
    /// A fit was requested before the container had a usable size.
    fit_pending: bool,
    tooltip: TooltipState,
    status: StatusBarState,
    revisions: SliceRevisions,
}

impl FacilityStore {
    pub fn new(tuning: ViewportTuning, worker: FetchWorker) -> Self {
        Self {
            tuning: tuning.normalized(),
            worker,
            pending: PendingFetches::default(),
            manifest: Vec::new(),
            facility: None,
            error: None,
            phase: AppPhase::Landing,
            current_floor_id: None,
            filters: FilterSet::default(),
            filter_sidebar_open: true,
            selected_unit_id: None,
            target: Viewport::default(),
            motion: ViewportMotion::Instant,
            container: None,
            fit_pending: false,
            tooltip: TooltipState::default(),
            status: StatusBarState::idle(),
            revisions: SliceRevisions::default(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn tuning(&self) -> &ViewportTuning {
        &self.tuning
    }

    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.manifest
    }

    pub fn facility(&self) -> Option<&Rc<Facility>> {
        self.facility.as_ref()
    }

    /// A manifest or facility fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.any()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    pub fn current_floor_id(&self) -> Option<&str> {
        self.current_floor_id.as_deref()
    }

    pub fn current_floor(&self) -> Option<&Floor> {
        let floor_id = self.current_floor_id.as_deref()?;
        self.facility.as_ref()?.floor(floor_id)
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filter_sidebar_open(&self) -> bool {
        self.filter_sidebar_open
    }

    pub fn selected_unit_id(&self) -> Option<&str> {
        self.selected_unit_id.as_deref()
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        let unit_id = self.selected_unit_id.as_deref()?;
        self.current_floor()?.unit(unit_id)
    }

    pub fn target_viewport(&self) -> Viewport {
        self.target
    }

    /// Motion tag of the most recent target change.
    pub fn motion(&self) -> ViewportMotion {
        self.motion
    }

    pub fn container_size(&self) -> Option<ContainerSize> {
        self.container
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn status(&self) -> &StatusBarState {
        &self.status
    }

    pub fn revision(&self, slice: Slice) -> u64 {
        self.revisions.get(slice)
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = StatusBarState {
            text: text.into(),
            tone,
        };
    }

    fn touch(&mut self, slices: &[Slice]) {
        for slice in slices {
            self.revisions.bump(*slice);
        }
    }
}
