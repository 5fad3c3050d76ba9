//! Display metadata and list prices for each unit size category.

use super::model::UnitType;

/// Static description of a size category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitTypeInfo {
    pub name: &'static str,
    pub dims: &'static str,
    pub sqft: &'static str,
    /// Monthly list price in whole dollars.
    pub price: u32,
    pub ceiling: &'static str,
    pub access: &'static str,
}

impl UnitType {
    pub fn info(self) -> &'static UnitTypeInfo {
        match self {
            UnitType::Compact5x5 => &COMPACT,
            UnitType::Small5x10 => &SMALL,
            UnitType::Small5x15 => &SMALL_PLUS,
            UnitType::Mid7x10 => &MID_SIZE,
            UnitType::Standard10x10 => &STANDARD,
            UnitType::Large10x15 => &LARGE,
            UnitType::Large10x20 => &EXTRA_LARGE,
            UnitType::Oversized10x25 => &OVERSIZED,
            UnitType::Warehouse10x30 => &WAREHOUSE,
            UnitType::Garage10x40 => &GARAGE,
        }
    }

    /// Price label such as `$149/mo`.
    pub fn price_label(self) -> String {
        format!("${}/mo", self.info().price)
    }
}

const COMPACT: UnitTypeInfo = UnitTypeInfo {
    name: "Compact",
    dims: "5'\u{d7}5'",
    sqft: "25 sq ft",
    price: 49,
    ceiling: "8 ft",
    access: "Walk-in",
};
const SMALL: UnitTypeInfo = UnitTypeInfo {
    name: "Small",
    dims: "5'\u{d7}10'",
    sqft: "50 sq ft",
    price: 79,
    ceiling: "8 ft",
    access: "Roll-up",
};
const SMALL_PLUS: UnitTypeInfo = UnitTypeInfo {
    name: "Small+",
    dims: "5'\u{d7}15'",
    sqft: "75 sq ft",
    price: 109,
    ceiling: "8 ft",
    access: "Roll-up",
};
const MID_SIZE: UnitTypeInfo = UnitTypeInfo {
    name: "Mid-Size",
    dims: "7\u{2032}6\u{2033}\u{d7}10'",
    sqft: "76 sq ft",
    price: 119,
    ceiling: "9 ft",
    access: "Roll-up",
};
const STANDARD: UnitTypeInfo = UnitTypeInfo {
    name: "Standard",
    dims: "10'\u{d7}10'",
    sqft: "100 sq ft",
    price: 149,
    ceiling: "9 ft",
    access: "Roll-up",
};
const LARGE: UnitTypeInfo = UnitTypeInfo {
    name: "Large",
    dims: "10'\u{d7}15'",
    sqft: "150 sq ft",
    price: 189,
    ceiling: "9 ft",
    access: "Roll-up",
};
const EXTRA_LARGE: UnitTypeInfo = UnitTypeInfo {
    name: "Extra Large",
    dims: "10'\u{d7}20'",
    sqft: "200 sq ft",
    price: 229,
    ceiling: "10 ft",
    access: "Drive-up",
};
const OVERSIZED: UnitTypeInfo = UnitTypeInfo {
    name: "Oversized",
    dims: "10'\u{d7}25'",
    sqft: "250 sq ft",
    price: 269,
    ceiling: "10 ft",
    access: "Drive-up",
};
const WAREHOUSE: UnitTypeInfo = UnitTypeInfo {
    name: "Warehouse",
    dims: "10'\u{d7}30'",
    sqft: "300 sq ft",
    price: 309,
    ceiling: "10 ft",
    access: "Drive-up",
};
const GARAGE: UnitTypeInfo = UnitTypeInfo {
    name: "Garage",
    dims: "10'\u{d7}40'",
    sqft: "400 sq ft",
    price: 399,
    ceiling: "10 ft",
    access: "Drive-up",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_increase_with_size() {
        let prices: Vec<u32> = UnitType::ALL.iter().map(|t| t.info().price).collect();
        assert!(prices.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(UnitType::Standard10x10.price_label(), "$149/mo");
        assert_eq!(UnitType::Garage10x40.info().name, "Garage");
    }
}
