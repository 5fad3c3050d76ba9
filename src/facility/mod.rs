//! Facility, floor and unit data plus the loaders that fetch it.

mod catalog;
mod features;
mod filter;
pub mod loader;
mod model;
mod stats;
mod validate;

pub use catalog::UnitTypeInfo;
pub use features::{Feature, feature_list};
pub use filter::FilterSet;
pub use loader::{DataSource, FacilityFetcher, FetchError};
pub use model::{
    Facility, FacilityHours, Floor, FloorRect, ManifestEntry, OfficeHoursRow, SiteFeature,
    SiteFeatureKind, Unit, UnitFeatures, UnitType,
};
pub use stats::{FloorStats, floor_stats, vacant_count};
pub use validate::{FloorIssue, validate_floor};
