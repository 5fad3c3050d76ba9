use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moovein::config::ViewportTuning;
use moovein::egui_app::controller::{FacilityStore, FetchWorker};
use moovein::facility::DataSource;
use tempfile::TempDir;

pub const MANIFEST: &str = r#"[
    {"id": "richland", "name": "MooveIn Richland", "city": "Richland", "state": "WA",
     "hasMap": true, "dataUrl": "/data/facility-richland.json"},
    {"id": "kennewick", "name": "MooveIn Kennewick", "city": "Kennewick", "state": "WA",
     "hasMap": true, "dataUrl": "/data/facility-kennewick.json"},
    {"id": "broken", "name": "MooveIn West", "hasMap": true, "dataUrl": "/data/missing.json"},
    {"id": "pasco", "name": "MooveIn Pasco", "hasMap": false}
]"#;

pub const RICHLAND: &str = r#"{
    "id": "richland", "name": "MooveIn Richland",
    "floors": [{
        "id": "floor-1", "name": "Ground Floor", "width": 4800, "height": 5200,
        "units": [
            {"id": "A101", "x": 100, "y": 100, "w": 100, "h": 100, "type": "10x10", "occ": 0},
            {"id": "A102", "x": 200, "y": 100, "w": 100, "h": 100, "type": "10x10", "occ": 1}
        ],
        "siteFeatures": [{"type": "office", "x": 1000, "y": 100, "w": 200, "h": 120}]
    }]
}"#;

pub const KENNEWICK: &str = r#"{
    "id": "kennewick", "name": "MooveIn Kennewick",
    "floors": [
        {"id": "k-1", "name": "Lower", "width": 2000, "height": 1000,
         "units": [{"id": "K1", "x": 0, "y": 0, "w": 50, "h": 50, "type": "5x5", "occ": 0}]},
        {"id": "k-2", "name": "Upper", "width": 2000, "height": 1000, "units": []}
    ]
}"#;

/// Facility data laid out like the web origin's `public/` folder.
pub fn write_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).expect("create data dir");
    std::fs::write(data.join("facilities.json"), MANIFEST).expect("write manifest");
    std::fs::write(data.join("facility-richland.json"), RICHLAND).expect("write richland");
    std::fs::write(data.join("facility-kennewick.json"), KENNEWICK).expect("write kennewick");
    dir
}

pub fn store_for(root: &Path) -> FacilityStore {
    let worker = FetchWorker::spawn(Arc::new(DataSource::Directory(root.to_path_buf())));
    FacilityStore::new(ViewportTuning::default(), worker)
}

/// Poll the store's fetch results until `done` holds or five seconds pass.
pub fn poll_until(store: &mut FacilityStore, done: impl Fn(&FacilityStore) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(store) {
        assert!(Instant::now() < deadline, "timed out waiting for fetch");
        store.poll_jobs();
        std::thread::sleep(Duration::from_millis(5));
    }
}
