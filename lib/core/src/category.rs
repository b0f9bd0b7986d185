//! Canonical outfit slots
//!
//! Raw category labels are free-form; composition only knows five slots.
//! Unrecognized labels fall back to [`Slot::Accessory`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
    Bag,
    Accessory,
}

impl Slot {
    /// Slots in the order they appear within an outfit
    pub const PRIORITY: [Slot; 5] = [Slot::Top, Slot::Bottom, Slot::Shoes, Slot::Bag, Slot::Accessory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Shoes => "shoes",
            Slot::Bag => "bag",
            Slot::Accessory => "accessory",
        }
    }

    /// Position of this slot in [`Slot::PRIORITY`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw category parent label to its slot (case-insensitive)
pub fn normalize(raw_parent: &str) -> Slot {
    match raw_parent.to_lowercase().as_str() {
        "tops" | "outerwear" => Slot::Top,
        "pants" => Slot::Bottom,
        "shoes" => Slot::Shoes,
        "bag" => Slot::Bag,
        "accessories" | "accessory" | "headwear" | "jewelry" | "other" => Slot::Accessory,
        _ => Slot::Accessory,
    }
}
