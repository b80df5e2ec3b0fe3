// crates/garage-core/src/validate.rs

use crate::error::{GarageError, Result};
use crate::garage::{Counts, Garage};
use crate::slot::Slot;

/// Check slot layout and counters against each other.
///
/// Under `CountPolicy::Legacy` a failed release leaves the counters out of
/// step with the slots; that shows up here as a counter mismatch.
pub fn validate_garage(g: &Garage) -> Result<()> {
    let tally = validate_layout(g.slots())?;
    let counts = g.counts();
    if counts != tally {
        return Err(GarageError::Validation(format!(
            "counters {counts:?} disagree with slots {tally:?}"
        )));
    }
    Ok(())
}

/// Every `VanHead` must be followed by exactly two `VanBody` slots and no
/// `VanBody` may stand on its own. Returns the occupant tally.
pub fn validate_layout(slots: &[Slot]) -> Result<Counts> {
    let mut tally = Counts::default();
    let mut i = 0;
    while i < slots.len() {
        match slots[i] {
            Slot::Empty => {}
            Slot::Car => tally.cars += 1,
            Slot::Motorcycle => tally.motorcycles += 1,
            Slot::VanHead => {
                let body = slots.get(i + 1..i + 3);
                if body != Some(&[Slot::VanBody, Slot::VanBody][..]) {
                    return Err(GarageError::Validation(format!(
                        "van at spot {} is not followed by two van slots",
                        i + 1
                    )));
                }
                tally.vans += 1;
                i += 2;
            }
            Slot::VanBody => {
                return Err(GarageError::Validation(format!(
                    "spot {} is part of a van with no leading slot",
                    i + 1
                )));
            }
        }
        i += 1;
    }
    Ok(tally)
}
