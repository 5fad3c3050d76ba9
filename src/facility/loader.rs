//! Fetches the facility manifest and facility details over HTTP or from a local directory.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use url::Url;

use super::model::{Facility, ManifestEntry};
use crate::http_client::{self, HttpError, MAX_RESPONSE_BYTES};

/// Location of the manifest relative to the data source root.
pub const MANIFEST_PATH: &str = "/data/facilities.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed JSON in {location}: {source}")]
    Json {
        location: String,
        source: serde_json::Error,
    },
    #[error("Invalid data location {location}: {reason}")]
    BadLocation { location: String, reason: String },
}

/// Anything able to produce facility data. The store's worker thread owns one.
pub trait FacilityFetcher: Send + Sync {
    fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>, FetchError>;
    fn fetch_facility(&self, entry: &ManifestEntry) -> Result<Facility, FetchError>;
}

/// Where facility JSON lives: a web origin or a directory with the same layout.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    Http(Url),
    Directory(PathBuf),
}

impl DataSource {
    /// `http(s)://` strings become web origins, anything else a directory path.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|err| FetchError::BadLocation {
                location: trimmed.to_string(),
                reason: err.to_string(),
            })?;
            return Ok(Self::Http(url));
        }
        if trimmed.is_empty() {
            return Err(FetchError::BadLocation {
                location: raw.to_string(),
                reason: "empty data source".into(),
            });
        }
        Ok(Self::Directory(PathBuf::from(trimmed)))
    }

    /// Locations resolve below the base path, like they do for directories.
    fn resolve_url(base: &Url, location: &str) -> Result<Url, FetchError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(location.trim_start_matches('/'))
            .map_err(|err| FetchError::BadLocation {
                location: location.to_string(),
                reason: err.to_string(),
            })
    }

    fn resolve_path(root: &Path, location: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(location.trim_start_matches('/'));
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(FetchError::BadLocation {
                location: location.to_string(),
                reason: "path must stay inside the data directory".into(),
            });
        }
        Ok(root.join(relative))
    }

    fn load<T: serde::de::DeserializeOwned>(&self, location: &str) -> Result<T, FetchError> {
        let (bytes, resolved) = match self {
            Self::Http(base) => {
                let url = Self::resolve_url(base, location)?;
                let bytes = http_client::get_bytes(
                    url.as_str(),
                    MAX_RESPONSE_BYTES,
                    http_client::DEFAULT_RETRY,
                )?;
                (bytes, url.to_string())
            }
            Self::Directory(root) => {
                let path = Self::resolve_path(root, location)?;
                let bytes = std::fs::read(&path).map_err(|source| FetchError::Io {
                    path: path.clone(),
                    source,
                })?;
                (bytes, path.display().to_string())
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Json {
            location: resolved,
            source,
        })
    }
}

impl FacilityFetcher for DataSource {
    fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>, FetchError> {
        self.load(MANIFEST_PATH)
    }

    fn fetch_facility(&self, entry: &ManifestEntry) -> Result<Facility, FetchError> {
        self.load(&entry.data_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{ok_json, serve, serve_recording, status};
    use tempfile::tempdir;

    const MANIFEST: &str = r#"[{"id": "richland", "name": "Richland", "hasMap": true, "dataUrl": "/data/facility-richland.json"}]"#;
    const FACILITY: &str = r#"{"id": "richland", "name": "Richland", "floors": [{"id": "floor-1", "name": "Ground", "width": 100, "height": 80, "units": [], "siteFeatures": []}]}"#;

    #[test]
    fn parse_distinguishes_urls_and_directories() {
        assert!(matches!(
            DataSource::parse("http://localhost:5173").unwrap(),
            DataSource::Http(_)
        ));
        assert_eq!(
            DataSource::parse(" ./public ").unwrap(),
            DataSource::Directory(PathBuf::from("./public"))
        );
        assert!(DataSource::parse("   ").is_err());
    }

    #[test]
    fn loads_manifest_and_facility_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/facilities.json"), MANIFEST).unwrap();
        std::fs::write(dir.path().join("data/facility-richland.json"), FACILITY).unwrap();

        let source = DataSource::Directory(dir.path().to_path_buf());
        let manifest = source.fetch_manifest().unwrap();
        assert_eq!(manifest.len(), 1);
        let facility = source.fetch_facility(&manifest[0]).unwrap();
        assert_eq!(facility.floors[0].id, "floor-1");
    }

    #[test]
    fn directory_source_rejects_escaping_paths() {
        let dir = tempdir().unwrap();
        let source = DataSource::Directory(dir.path().to_path_buf());
        let entry: ManifestEntry = serde_json::from_str(
            r#"{"id": "x", "name": "X", "hasMap": true, "dataUrl": "../secret.json"}"#,
        )
        .unwrap();
        assert!(matches!(
            source.fetch_facility(&entry),
            Err(FetchError::BadLocation { .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/facilities.json"), "[{").unwrap();
        let source = DataSource::Directory(dir.path().to_path_buf());
        assert!(matches!(
            source.fetch_manifest(),
            Err(FetchError::Json { .. })
        ));
    }

    #[test]
    fn loads_manifest_over_http() {
        let base = serve(vec![ok_json(MANIFEST)]);
        let source = DataSource::parse(&base).unwrap();
        let manifest = source.fetch_manifest().unwrap();
        assert_eq!(manifest[0].data_url, "/data/facility-richland.json");
    }

    #[test]
    fn http_not_found_surfaces_status() {
        let base = serve(vec![status(404)]);
        let source = DataSource::parse(&base).unwrap();
        assert!(matches!(
            source.fetch_manifest(),
            Err(FetchError::Http(HttpError::Status { status: 404, .. }))
        ));
    }

    #[test]
    fn http_locations_stay_under_base_path() {
        let base = Url::parse("https://example.com/moovein").unwrap();
        assert_eq!(
            DataSource::resolve_url(&base, MANIFEST_PATH).unwrap().as_str(),
            "https://example.com/moovein/data/facilities.json"
        );
        assert_eq!(
            DataSource::resolve_url(&base, "https://cdn.example.com/f.json")
                .unwrap()
                .as_str(),
            "https://cdn.example.com/f.json"
        );
    }

    #[test]
    fn loads_manifest_from_prefixed_base() {
        let (base, requests) = serve_recording(vec![ok_json(MANIFEST), ok_json(FACILITY)]);
        let source = DataSource::parse(&format!("{base}/moovein/")).unwrap();
        let manifest = source.fetch_manifest().unwrap();
        source.fetch_facility(&manifest[0]).unwrap();
        let lines: Vec<String> = requests.try_iter().collect();
        assert_eq!(
            lines,
            vec![
                "GET /moovein/data/facilities.json HTTP/1.1",
                "GET /moovein/data/facility-richland.json HTTP/1.1",
            ]
        );
    }
}
