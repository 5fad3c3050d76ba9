use serde::{Deserialize, Deserializer};

/// Size category of a rentable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum UnitType {
    #[serde(rename = "5x5")]
    Compact5x5,
    #[serde(rename = "5x10")]
    Small5x10,
    #[serde(rename = "5x15")]
    Small5x15,
    #[serde(rename = "7.6x10")]
    Mid7x10,
    #[serde(rename = "10x10")]
    Standard10x10,
    #[serde(rename = "10x15")]
    Large10x15,
    #[serde(rename = "10x20")]
    Large10x20,
    #[serde(rename = "10x25")]
    Oversized10x25,
    #[serde(rename = "10x30")]
    Warehouse10x30,
    #[serde(rename = "10x40")]
    Garage10x40,
}

impl UnitType {
    /// Every category, smallest first.
    pub const ALL: [UnitType; 10] = [
        UnitType::Compact5x5,
        UnitType::Small5x10,
        UnitType::Small5x15,
        UnitType::Mid7x10,
        UnitType::Standard10x10,
        UnitType::Large10x15,
        UnitType::Large10x20,
        UnitType::Oversized10x25,
        UnitType::Warehouse10x30,
        UnitType::Garage10x40,
    ];

    /// Wire tag as it appears in facility JSON.
    pub fn tag(self) -> &'static str {
        match self {
            UnitType::Compact5x5 => "5x5",
            UnitType::Small5x10 => "5x10",
            UnitType::Small5x15 => "5x15",
            UnitType::Mid7x10 => "7.6x10",
            UnitType::Standard10x10 => "10x10",
            UnitType::Large10x15 => "10x15",
            UnitType::Large10x20 => "10x20",
            UnitType::Oversized10x25 => "10x25",
            UnitType::Warehouse10x30 => "10x30",
            UnitType::Garage10x40 => "10x40",
        }
    }
}

/// Axis-aligned rectangle in floor-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FloorRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FloorRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// True when the interiors intersect; shared edges do not count.
    pub fn overlaps(&self, other: &FloorRect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Independent per-unit amenities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UnitFeatures {
    pub climate: bool,
    pub drive_up: bool,
    pub exterior: bool,
    pub smart_lock: bool,
    pub power: bool,
    pub alarm: bool,
}

/// A rentable unit on a floor. Selection and hover live in the store, keyed by `id`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "UnitWire")]
pub struct Unit {
    pub id: String,
    pub rect: FloorRect,
    pub unit_type: UnitType,
    pub occupied: bool,
    pub features: UnitFeatures,
}

impl Unit {
    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }
}

#[derive(Deserialize)]
struct UnitWire {
    id: String,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    #[serde(rename = "type")]
    unit_type: UnitType,
    #[serde(default, deserialize_with = "flag")]
    occ: bool,
    #[serde(default, deserialize_with = "flag")]
    climate: bool,
    #[serde(default, deserialize_with = "flag")]
    driveup: bool,
    #[serde(default, deserialize_with = "flag")]
    ext: bool,
    #[serde(default, deserialize_with = "flag")]
    smartlock: bool,
    #[serde(default, deserialize_with = "flag")]
    power: bool,
    #[serde(default, deserialize_with = "flag")]
    alarm: bool,
}

impl From<UnitWire> for Unit {
    fn from(wire: UnitWire) -> Self {
        Self {
            id: wire.id,
            rect: FloorRect::new(wire.x, wire.y, wire.w, wire.h),
            unit_type: wire.unit_type,
            occupied: wire.occ,
            features: UnitFeatures {
                climate: wire.climate,
                drive_up: wire.driveup,
                exterior: wire.ext,
                smart_lock: wire.smartlock,
                power: wire.power,
                alarm: wire.alarm,
            },
        }
    }
}

/// Facility data encodes flags as `0`/`1`; booleans and null are accepted too.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Number(f64),
    }
    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Bool(value)) => value,
        Some(RawFlag::Number(value)) => value != 0.0,
        None => false,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteFeatureKind {
    Office,
    Elevator,
    Highlight,
    Stairs,
}

impl SiteFeatureKind {
    pub fn default_label(self) -> &'static str {
        match self {
            SiteFeatureKind::Office => "OFFICE",
            SiteFeatureKind::Elevator => "ELEVATOR",
            SiteFeatureKind::Highlight => "HIGHLIGHT",
            SiteFeatureKind::Stairs => "STAIRS",
        }
    }
}

/// Non-rentable obstacle drawn on the floor plan.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "SiteFeatureWire")]
pub struct SiteFeature {
    pub kind: SiteFeatureKind,
    pub label: Option<String>,
    pub rect: FloorRect,
}

impl SiteFeature {
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| self.kind.default_label())
    }
}

#[derive(Deserialize)]
struct SiteFeatureWire {
    #[serde(rename = "type")]
    kind: SiteFeatureKind,
    #[serde(default)]
    label: Option<String>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl From<SiteFeatureWire> for SiteFeature {
    fn from(wire: SiteFeatureWire) -> Self {
        Self {
            kind: wire.kind,
            label: wire.label,
            rect: FloorRect::new(wire.x, wire.y, wire.w, wire.h),
        }
    }
}

/// One level of a facility with its own coordinate space.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub site_features: Vec<SiteFeature>,
}

impl Floor {
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Topmost unit containing the floor-space point. Later units paint above earlier ones.
    pub fn unit_at(&self, x: f32, y: f32) -> Option<&Unit> {
        self.units.iter().rev().find(|unit| unit.rect.contains(x, y))
    }

    pub fn site_feature_at(&self, x: f32, y: f32) -> Option<(usize, &SiteFeature)> {
        self.site_features
            .iter()
            .enumerate()
            .rev()
            .find(|(_, feature)| feature.rect.contains(x, y))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OfficeHoursRow {
    pub label: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FacilityHours {
    #[serde(default)]
    pub office: Vec<OfficeHoursRow>,
    #[serde(default)]
    pub gate: String,
}

/// Full facility detail; immutable once loaded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub office_hours: Option<FacilityHours>,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

impl Facility {
    pub fn floor(&self, id: &str) -> Option<&Floor> {
        self.floors.iter().find(|floor| floor.id == id)
    }
}

/// One row of `facilities.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub has_map: bool,
    #[serde(default)]
    pub data_url: String,
}

impl ManifestEntry {
    /// Whether the entry can be opened on the floor map.
    pub fn is_selectable(&self) -> bool {
        self.has_map && !self.data_url.trim().is_empty()
    }

    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
            .trim_matches(|c: char| c == ',' || c.is_whitespace())
            .to_string()
    }
}
