// crates/garage-core/src/error.rs

use thiserror::Error;

use crate::vehicle::VehicleClass;

pub type Result<T> = std::result::Result<T, GarageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GarageError {
    #[error("no space left for a {0}")]
    NoSpace(VehicleClass),

    /// `spot` is the 0-based index the caller asked for, if any.
    #[error("no {class} found{}", spot_suffix(.spot))]
    NotFound {
        class: VehicleClass,
        spot: Option<usize>,
    },

    #[error("invalid vehicle type: {0:?}")]
    InvalidClass(String),

    #[error("invalid spot number: {0:?}")]
    InvalidSpot(String),

    #[error("malformed command: {0:?}")]
    MalformedCommand(String),

    #[error("validation error: {0}")]
    Validation(String),
}

fn spot_suffix(spot: &Option<usize>) -> String {
    match spot {
        Some(i) => format!(" in spot {}", i + 1),
        None => String::new(),
    }
}
