//! egui front end: store and controllers, plain state, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
