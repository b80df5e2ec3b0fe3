// crates/garage-core/src/garage.rs

use tracing::{debug, warn};

use crate::config::{CountPolicy, GarageConfig};
use crate::error::{GarageError, Result};
use crate::slot::Slot;
use crate::vehicle::VehicleClass;

/// Number of slots in every garage.
pub const CAPACITY: usize = 20;

/// Running per-class counters.
///
/// Signed because `CountPolicy::Legacy` decrements on failed releases too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub cars: i32,
    pub motorcycles: i32,
    pub vans: i32,
}

impl Counts {
    pub fn get(&self, class: VehicleClass) -> i32 {
        match class {
            VehicleClass::Car => self.cars,
            VehicleClass::Motorcycle => self.motorcycles,
            VehicleClass::Van => self.vans,
        }
    }

    fn get_mut(&mut self, class: VehicleClass) -> &mut i32 {
        match class {
            VehicleClass::Car => &mut self.cars,
            VehicleClass::Motorcycle => &mut self.motorcycles,
            VehicleClass::Van => &mut self.vans,
        }
    }
}

/// Fixed-capacity occupancy tracker.
///
/// Slot indices are 0-based here; the shell shows them 1-based.
#[derive(Clone, Debug)]
pub struct Garage {
    slots: [Slot; CAPACITY],
    counts: Counts,
    config: GarageConfig,
}

impl Default for Garage {
    fn default() -> Self {
        Self::new()
    }
}

impl Garage {
    pub fn new() -> Self {
        Self::with_config(GarageConfig::default())
    }

    pub fn with_config(config: GarageConfig) -> Self {
        Self {
            slots: [Slot::Empty; CAPACITY],
            counts: Counts::default(),
            config,
        }
    }

    pub fn slots(&self) -> &[Slot; CAPACITY] {
        &self.slots
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn config(&self) -> GarageConfig {
        self.config
    }

    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }

    /// 0-based start index of every `class` occupant, left to right.
    pub fn occupied_by(&self, class: VehicleClass) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_head_of(class))
            .map(|(i, _)| i)
            .collect()
    }

    /// Park one vehicle and return the 0-based index of its leftmost slot.
    ///
    /// Takes the leftmost run of `class.width()` contiguous empty slots.
    /// Nothing changes on `NoSpace`.
    pub fn allocate(&mut self, class: VehicleClass) -> Result<usize> {
        let width = class.width();
        let start = self.find_run(width).ok_or(GarageError::NoSpace(class))?;

        self.slots[start] = Slot::head(class);
        for s in &mut self.slots[start + 1..start + width] {
            *s = Slot::VanBody;
        }
        *self.counts.get_mut(class) += 1;

        debug!(%class, spot = start, "allocated");
        Ok(start)
    }

    /// Remove the first `class` occupant, or the one starting at `spot`.
    ///
    /// A van is only matched by its leftmost slot. Under
    /// `CountPolicy::Legacy` the counter is decremented even when nothing
    /// was found.
    pub fn release(&mut self, class: VehicleClass, spot: Option<usize>) -> Result<usize> {
        let found = self
            .slots
            .iter()
            .enumerate()
            .find(|(i, s)| s.is_head_of(class) && spot.map_or(true, |want| *i == want))
            .map(|(i, _)| i);

        if let Some(start) = found {
            for s in &mut self.slots[start..start + class.width()] {
                *s = Slot::Empty;
            }
        }

        if found.is_some() || self.config.count_policy == CountPolicy::Legacy {
            let count = self.counts.get_mut(class);
            *count -= 1;
            if *count < 0 {
                warn!(%class, count = *count, "counter went negative after failed release");
            }
        }

        match found {
            Some(start) => {
                debug!(%class, spot = start, "released");
                Ok(start)
            }
            None => {
                warn!(%class, ?spot, "release found no matching vehicle");
                Err(GarageError::NotFound { class, spot })
            }
        }
    }

    /// String-typed `release`. An unknown class name is reported as
    /// `InvalidClass` and leaves every counter alone.
    pub fn release_named(&mut self, class: &str, spot: Option<usize>) -> Result<usize> {
        let class: VehicleClass = class.parse().map_err(|e| {
            warn!(input = class, "invalid vehicle type");
            e
        })?;
        self.release(class, spot)
    }

    fn find_run(&self, width: usize) -> Option<usize> {
        let mut run = 0usize;
        for (i, s) in self.slots.iter().enumerate() {
            if s.is_empty() {
                run += 1;
                if run == width {
                    return Some(i + 1 - width);
                }
            } else {
                run = 0;
            }
        }
        None
    }
}
