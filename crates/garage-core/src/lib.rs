pub mod error;
pub mod validate;

pub mod command;
pub mod config;
pub mod garage;
pub mod report;
pub mod slot;
pub mod vehicle;

pub use crate::command::Command;
pub use crate::config::{CountPolicy, GarageConfig};
pub use crate::error::{GarageError, Result};
pub use crate::garage::{Counts, Garage, CAPACITY};
pub use crate::report::{Entry, Report, View};
pub use crate::slot::Slot;
pub use crate::vehicle::VehicleClass;
