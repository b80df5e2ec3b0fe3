// crates/garage-core/src/vehicle.rs

use std::fmt;
use std::str::FromStr;

use crate::error::GarageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Car,
    Motorcycle,
    /// Occupies three contiguous slots.
    Van,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Car,
        VehicleClass::Motorcycle,
        VehicleClass::Van,
    ];

    /// Number of contiguous slots one vehicle of this class takes.
    #[inline]
    pub fn width(self) -> usize {
        match self {
            VehicleClass::Car | VehicleClass::Motorcycle => 1,
            VehicleClass::Van => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Motorcycle => "motorcycle",
            VehicleClass::Van => "van",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            VehicleClass::Car => "cars",
            VehicleClass::Motorcycle => "motorcycles",
            VehicleClass::Van => "vans",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleClass {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleClass::Car),
            "motorcycle" => Ok(VehicleClass::Motorcycle),
            "van" => Ok(VehicleClass::Van),
            _ => Err(GarageError::InvalidClass(s.to_string())),
        }
    }
}
