// crates/garage-core/src/report.rs

use std::fmt;

use crate::garage::{Counts, Garage};
use crate::slot::Slot;
use crate::vehicle::VehicleClass;

/// One line of the summarized view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// 1-based; for a van, its leftmost slot.
    pub spot: usize,
    /// `None` for an empty slot.
    pub occupant: Option<VehicleClass>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Every slot marker, in order.
    Raw(Vec<Slot>),
    /// One entry per occupant or empty slot; vans appear once.
    Summary(Vec<Entry>),
}

impl View {
    pub fn len(&self) -> usize {
        match self {
            View::Raw(v) => v.len(),
            View::Summary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub counts: Counts,
    pub view: View,
}

impl Garage {
    /// Snapshot of the counters plus a raw or summarized slot view.
    pub fn report(&self, raw: bool) -> Report {
        let view = if raw {
            View::Raw(self.slots().to_vec())
        } else {
            View::Summary(summarize(self.slots()))
        };
        Report {
            counts: self.counts(),
            view,
        }
    }
}

fn summarize(slots: &[Slot]) -> Vec<Entry> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| **s != Slot::VanBody)
        .map(|(i, s)| Entry {
            spot: i + 1,
            occupant: s.class(),
        })
        .collect()
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Some(class) => write!(f, "{}: {}", self.spot, class),
            None => write!(f, "{}: empty", self.spot),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match self {
            View::Raw(slots) => write_joined(f, slots)?,
            View::Summary(entries) => write_joined(f, entries)?,
        }
        f.write_str("]")
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
