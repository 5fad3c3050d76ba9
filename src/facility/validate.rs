//! Sanity checks run when a facility is loaded. Findings are warnings, never rejections.

use std::collections::HashSet;

use super::model::Floor;

#[derive(Clone, Debug, PartialEq)]
pub enum FloorIssue {
    DuplicateUnitId(String),
    OutOfBounds(String),
    Overlap(String, String),
}

impl std::fmt::Display for FloorIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorIssue::DuplicateUnitId(id) => write!(f, "unit id {id} appears more than once"),
            FloorIssue::OutOfBounds(id) => write!(f, "unit {id} extends past the floor bounds"),
            FloorIssue::Overlap(a, b) => write!(f, "units {a} and {b} overlap"),
        }
    }
}

pub fn validate_floor(floor: &Floor) -> Vec<FloorIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for unit in &floor.units {
        if !seen.insert(unit.id.as_str()) {
            issues.push(FloorIssue::DuplicateUnitId(unit.id.clone()));
        }
        let rect = unit.rect;
        if rect.x < 0.0 || rect.y < 0.0 || rect.right() > floor.width || rect.bottom() > floor.height
        {
            issues.push(FloorIssue::OutOfBounds(unit.id.clone()));
        }
    }
    // Pairwise scan; floors hold a few hundred units at most.
    for (idx, unit) in floor.units.iter().enumerate() {
        for other in &floor.units[idx + 1..] {
            if unit.rect.overlaps(&other.rect) {
                issues.push(FloorIssue::Overlap(unit.id.clone(), other.id.clone()));
            }
        }
    }
    issues
}
