// crates/garage-core/src/slot.rs

use std::fmt;

use crate::vehicle::VehicleClass;

/// Occupancy marker for one garage slot.
///
/// Vans span three slots: the leftmost is tagged `VanHead`, the two after it
/// `VanBody`. Only a head is a valid release handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    Empty,
    Car,
    Motorcycle,
    VanHead,
    VanBody,
}

impl Slot {
    /// One-character marker used by the raw status view.
    pub fn symbol(self) -> char {
        match self {
            Slot::Empty => '_',
            Slot::Car => 'c',
            Slot::Motorcycle => 'm',
            Slot::VanHead => 'V',
            Slot::VanBody => 'v',
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Slot::Empty
    }

    pub fn class(self) -> Option<VehicleClass> {
        match self {
            Slot::Empty => None,
            Slot::Car => Some(VehicleClass::Car),
            Slot::Motorcycle => Some(VehicleClass::Motorcycle),
            Slot::VanHead | Slot::VanBody => Some(VehicleClass::Van),
        }
    }

    /// True if this slot is where an occupant of `class` starts.
    #[inline]
    pub fn is_head_of(self, class: VehicleClass) -> bool {
        self == Slot::head(class)
    }

    /// Marker written into the leftmost slot of a `class` occupant.
    pub fn head(class: VehicleClass) -> Slot {
        match class {
            VehicleClass::Car => Slot::Car,
            VehicleClass::Motorcycle => Slot::Motorcycle,
            VehicleClass::Van => Slot::VanHead,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
