//! Library exports for the MooveIn facility map client.
/// Application directory resolution.
pub mod app_dirs;
/// TOML-backed client settings.
pub mod config;
/// egui store, controllers and renderer.
pub mod egui_app;
/// Facility data model and loaders.
pub mod facility;
/// Shared HTTP helpers for facility fetches.
pub mod http_client;
/// Tracing subscriber setup.
pub mod logging;
