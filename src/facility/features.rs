use super::model::UnitFeatures;

/// Amenity shown as an icon on units and in the tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Climate,
    DriveUp,
    Exterior,
    SmartLock,
    Power,
    Alarm,
    /// Shown alone when a unit has no amenities.
    Standard,
}

impl Feature {
    /// Amenities listed in the map legend, in display order.
    pub const LEGEND: [Feature; 6] = [
        Feature::Climate,
        Feature::DriveUp,
        Feature::Exterior,
        Feature::SmartLock,
        Feature::Power,
        Feature::Alarm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Feature::Climate => "Climate Control",
            Feature::DriveUp => "Drive-up",
            Feature::Exterior => "Exterior",
            Feature::SmartLock => "Smart Lock",
            Feature::Power => "Power Outlet",
            Feature::Alarm => "Unit Alarm",
            Feature::Standard => "Standard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Feature::Climate => "\u{2744}",
            Feature::DriveUp => "\u{1f697}",
            Feature::Exterior => "\u{1f3e0}",
            Feature::SmartLock => "\u{1f512}",
            Feature::Power => "\u{26a1}",
            Feature::Alarm => "\u{1f6a8}",
            Feature::Standard => "\u{1f6aa}",
        }
    }

    fn is_set(self, features: &UnitFeatures) -> bool {
        match self {
            Feature::Climate => features.climate,
            Feature::DriveUp => features.drive_up,
            Feature::Exterior => features.exterior,
            Feature::SmartLock => features.smart_lock,
            Feature::Power => features.power,
            Feature::Alarm => features.alarm,
            Feature::Standard => false,
        }
    }
}

/// Amenities of a unit in legend order, or `[Standard]` when it has none.
pub fn feature_list(features: &UnitFeatures) -> Vec<Feature> {
    let list: Vec<Feature> = Feature::LEGEND
        .into_iter()
        .filter(|feature| feature.is_set(features))
        .collect();
    if list.is_empty() {
        vec![Feature::Standard]
    } else {
        list
    }
}
