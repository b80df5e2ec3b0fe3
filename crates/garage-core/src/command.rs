// crates/garage-core/src/command.rs

use crate::error::{GarageError, Result};
use crate::vehicle::VehicleClass;

/// One parsed shell line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Enter(VehicleClass),
    /// `spot` is already converted to a 0-based index.
    Leave {
        class: VehicleClass,
        spot: Option<usize>,
    },
    Status {
        raw: bool,
    },
    Help,
    Exit,
}

impl Command {
    /// Parse `<type> entering`, `<type> leaving [spot]`, `status [raw]`,
    /// `help` or `exit`. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let words: Vec<String> = line
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        let cmd = match words.as_slice() {
            [] => return Ok(None),
            ["status"] => Command::Status { raw: false },
            ["status", "raw"] => Command::Status { raw: true },
            ["exit"] | ["quit"] => Command::Exit,
            ["help"] => Command::Help,
            [class, "entering"] => Command::Enter(class.parse()?),
            [class, "leaving"] => Command::Leave {
                class: class.parse()?,
                spot: None,
            },
            [class, "leaving", spot] => {
                let class: VehicleClass = class.parse()?;
                Command::Leave {
                    class,
                    spot: Some(parse_spot(spot)?),
                }
            }
            _ => return Err(GarageError::MalformedCommand(line.trim().to_string())),
        };
        Ok(Some(cmd))
    }
}

/// 1-based spot number to 0-based index.
fn parse_spot(tok: &str) -> Result<usize> {
    match tok.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(GarageError::InvalidSpot(tok.to_string())),
    }
}
