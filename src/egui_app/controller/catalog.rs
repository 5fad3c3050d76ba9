use std::fmt::Display;

use super::jobs::{FetchJob, FetchMessage};
use super::*;
use crate::facility::validate_floor;

impl FacilityStore {
    /// Request the facility manifest. A newer request supersedes an older one.
    pub fn load_facility_list(&mut self) {
        let request_id = self.pending.next_request_id();
        self.pending.manifest = Some(request_id);
        self.error = None;
        if !self.worker.submit(FetchJob::Manifest { request_id }) {
            self.pending.manifest = None;
            self.fail_fetch("Could not load facilities", &"fetch worker stopped");
            return;
        }
        self.set_status("Loading facilities…", StatusTone::Busy);
        self.touch(&[Slice::Catalog]);
    }

    /// Fetch a facility from the manifest. Unknown ids and entries without a map are ignored.
    pub fn select_facility(&mut self, facility_id: &str) -> bool {
        let Some(entry) = self.manifest.iter().find(|entry| entry.id == facility_id) else {
            tracing::debug!(facility = %facility_id, "ignoring unknown facility");
            return false;
        };
        if !entry.is_selectable() {
            tracing::debug!(facility = %facility_id, "ignoring facility without map data");
            return false;
        }
        let entry = entry.clone();
        let request_id = self.pending.next_request_id();
        self.pending.facility = Some((request_id, entry.id.clone()));
        self.error = None;
        self.set_status(format!("Loading {}…", entry.name), StatusTone::Busy);
        if !self.worker.submit(FetchJob::Facility { request_id, entry }) {
            self.pending.facility = None;
            self.fail_fetch("Could not load facility", &"fetch worker stopped");
            return false;
        }
        self.touch(&[Slice::Catalog]);
        true
    }

    /// Apply every finished fetch. Returns how many messages were handled.
    pub fn poll_jobs(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.worker.try_recv() {
            self.handle_fetch_message(message);
            handled += 1;
        }
        handled
    }

    /// Apply one fetch result. Stale answers are dropped and reported as `false`.
    pub(crate) fn handle_fetch_message(&mut self, message: FetchMessage) -> bool {
        match message {
            FetchMessage::Manifest { request_id, result } => {
                if !self.pending.take_manifest(request_id) {
                    tracing::debug!(request_id, "discarding stale manifest response");
                    return false;
                }
                match result {
                    Ok(entries) => {
                        tracing::info!(count = entries.len(), "facility manifest loaded");
                        self.set_status(
                            format!("{} facilities available", entries.len()),
                            StatusTone::Info,
                        );
                        self.manifest = entries;
                        self.touch(&[Slice::Catalog]);
                    }
                    Err(err) => self.fail_fetch("Could not load facilities", &err),
                }
            }
            FetchMessage::Facility {
                request_id,
                facility_id,
                result,
            } => {
                if !self.pending.take_facility(request_id, &facility_id) {
                    tracing::debug!(
                        request_id,
                        facility = %facility_id,
                        "discarding stale facility response"
                    );
                    return false;
                }
                match result {
                    Ok(facility) => self.apply_facility(facility),
                    Err(err) => self.fail_fetch("Could not load facility", &err),
                }
            }
        }
        true
    }

    fn apply_facility(&mut self, facility: Facility) {
        for floor in &facility.floors {
            for issue in validate_floor(floor) {
                tracing::warn!(facility = %facility.id, floor = %floor.id, %issue, "floor data issue");
            }
        }
        tracing::info!(
            facility = %facility.id,
            floors = facility.floors.len(),
            "facility loaded"
        );
        self.set_status(
            format!("{}: {} floors", facility.name, facility.floors.len()),
            StatusTone::Info,
        );
        self.current_floor_id = facility.floors.first().map(|floor| floor.id.clone());
        self.facility = Some(Rc::new(facility));
        self.selected_unit_id = None;
        self.filters.clear();
        self.tooltip = TooltipState::default();
        self.phase = AppPhase::Map;
        self.touch(&[
            Slice::Catalog,
            Slice::Floor,
            Slice::Filters,
            Slice::Selection,
            Slice::Tooltip,
            Slice::Phase,
        ]);
        self.reset_view();
    }

    fn fail_fetch(&mut self, context: &str, err: &dyn Display) {
        let message = format!("{context}: {err}");
        tracing::warn!(error = %err, "{context}");
        self.error = Some(message.clone());
        self.set_status(message, StatusTone::Error);
        self.touch(&[Slice::Catalog]);
    }

    /// Drop the loaded facility and show the facility list again.
    pub fn return_to_landing(&mut self) {
        tracing::debug!("returning to facility list");
        self.pending.facility = None;
        self.facility = None;
        self.current_floor_id = None;
        self.selected_unit_id = None;
        self.filters.clear();
        self.tooltip = TooltipState::default();
        self.phase = AppPhase::Landing;
        self.fit_pending = false;
        self.status = StatusBarState::idle();
        self.touch(&[
            Slice::Catalog,
            Slice::Floor,
            Slice::Filters,
            Slice::Selection,
            Slice::Tooltip,
            Slice::Phase,
        ]);
    }
}
