use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::jobs::FetchMessage;
use super::*;
use crate::facility::{FacilityFetcher, FetchError};

pub(crate) const MANIFEST_JSON: &str = r#"[
    {"id": "richland", "name": "MooveIn Richland", "city": "Richland", "state": "WA", "zip": "99352",
     "hasMap": true, "dataUrl": "/data/facility-richland.json"},
    {"id": "pasco", "name": "MooveIn Pasco", "city": "Pasco", "state": "WA", "zip": "99301",
     "hasMap": false, "dataUrl": ""}
]"#;

pub(crate) const FACILITY_JSON: &str = r#"{
    "id": "richland",
    "name": "MooveIn Richland",
    "address": "1200 Jadwin Ave",
    "floors": [
        {
            "id": "floor-1", "name": "Ground Floor", "width": 4800, "height": 5200,
            "units": [
                {"id": "A101", "x": 100, "y": 100, "w": 100, "h": 100, "type": "10x10", "occ": 0},
                {"id": "A102", "x": 200, "y": 100, "w": 100, "h": 100, "type": "10x10", "occ": 1},
                {"id": "B201", "x": 400, "y": 100, "w": 50, "h": 50, "type": "5x5", "occ": 0},
                {"id": "C301", "x": 500, "y": 100, "w": 100, "h": 200, "type": "10x20", "occ": 0,
                 "climate": 1, "driveup": 1}
            ],
            "siteFeatures": [
                {"type": "office", "label": "Office", "x": 1000, "y": 100, "w": 200, "h": 120}
            ]
        },
        {
            "id": "floor-2", "name": "Second Floor", "width": 1000, "height": 800,
            "units": [
                {"id": "D401", "x": 0, "y": 0, "w": 50, "h": 100, "type": "5x10", "occ": 0}
            ],
            "siteFeatures": []
        }
    ]
}"#;

pub(crate) fn sample_manifest() -> Vec<ManifestEntry> {
    serde_json::from_str(MANIFEST_JSON).unwrap()
}

pub(crate) fn sample_facility() -> Facility {
    serde_json::from_str(FACILITY_JSON).unwrap()
}

/// In-memory fetcher keyed by facility id.
pub(crate) struct StaticFetcher {
    manifest: Vec<ManifestEntry>,
    facilities: HashMap<String, Facility>,
}

impl StaticFetcher {
    pub(crate) fn sample() -> Self {
        let facility = sample_facility();
        Self {
            manifest: sample_manifest(),
            facilities: HashMap::from([(facility.id.clone(), facility)]),
        }
    }
}

impl FacilityFetcher for StaticFetcher {
    fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>, FetchError> {
        Ok(self.manifest.clone())
    }

    fn fetch_facility(&self, entry: &ManifestEntry) -> Result<Facility, FetchError> {
        self.facilities
            .get(&entry.id)
            .cloned()
            .ok_or_else(|| FetchError::BadLocation {
                location: entry.data_url.clone(),
                reason: "not found".into(),
            })
    }
}

pub(crate) fn empty_store() -> FacilityStore {
    FacilityStore::new(
        ViewportTuning::default(),
        FetchWorker::spawn(Arc::new(StaticFetcher::sample())),
    )
}

/// Answer the pending manifest request directly, bypassing the worker.
pub(crate) fn deliver_manifest(store: &mut FacilityStore) {
    let request_id = store.pending.manifest.unwrap();
    assert!(store.handle_fetch_message(FetchMessage::Manifest {
        request_id,
        result: Ok(sample_manifest()),
    }));
}

/// Answer the pending facility request directly, bypassing the worker.
pub(crate) fn deliver_facility(store: &mut FacilityStore) {
    let (request_id, facility_id) = store.pending.facility.clone().unwrap();
    assert!(store.handle_fetch_message(FetchMessage::Facility {
        request_id,
        facility_id,
        result: Ok(sample_facility()),
    }));
}

/// Store with the sample facility on its first floor in a 1200x800 container.
pub(crate) fn loaded_store() -> FacilityStore {
    let mut store = empty_store();
    store.load_facility_list();
    deliver_manifest(&mut store);
    store.set_container_size(ContainerSize::new(1200.0, 800.0));
    assert!(store.select_facility("richland"));
    deliver_facility(&mut store);
    store
}

/// Frame timestamps exactly one reference frame apart.
pub(crate) fn frames_from(start_ms: f64) -> impl Iterator<Item = f64> {
    let step = f64::from(ViewportTuning::default().reference_frame_ms);
    (0..).map(move |frame| start_ms + step * f64::from(frame))
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber on this thread and return what it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
