//! Plain state types held by the facility store.

mod status;
mod tooltip;
mod viewport;

pub use status::*;
pub use tooltip::*;
pub use viewport::*;

/// Which top-level surface the shell renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Facility list.
    #[default]
    Landing,
    /// Interactive floor map.
    Map,
    /// Map plus the checkout panel for the selected unit.
    Checkout,
}
