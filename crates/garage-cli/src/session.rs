// crates/garage-cli/src/session.rs

use std::io::{BufRead, Write};

use anyhow::Context;
use garage_core::validate::validate_garage;
use garage_core::{Command, Garage, GarageError, Report, VehicleClass};
use tracing::{debug, warn};

const BANNER: &str = "\
Welcome to this absolutely glorious garage!
Enter vehicle type and leaving or entering: \"car leaving\" or \"van entering\", for example.
Add a spot number to pick which one leaves: \"car leaving 4\".
Enter \"status\" for the current state of the garage or \"status raw\" for the raw slot markers
Enter \"exit\" to lock it up and throw away the key
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command loop around one owned `Garage`.
///
/// Interactive sessions print a prompt and pad replies with blank lines.
pub struct Session<W: Write> {
    garage: Garage,
    out: W,
    interactive: bool,
}

impl<W: Write> Session<W> {
    pub fn new(garage: Garage, out: W, interactive: bool) -> Self {
        Self {
            garage,
            out,
            interactive,
        }
    }

    #[cfg(test)]
    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{BANNER}").context("write banner")
    }

    /// Read lines until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.interactive {
                write!(self.out, "> ").context("write prompt")?;
                self.out.flush().context("flush prompt")?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("read command line")?;
            if self.execute_line(&line)? == Flow::Exit {
                return Ok(());
            }
        }
        self.say("Locked it up. See ya!")?;
        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let cmd = match Command::parse(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                warn!(%e, line, "rejected command");
                self.say(&input_error_message(&e))?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?cmd, "command");

        match cmd {
            Command::Enter(class) => {
                let msg = match self.garage.allocate(class) {
                    Ok(_) => format!("Successfully parked a {class}!"),
                    Err(_) => format!("No space left for a {class} in the garage :("),
                };
                self.say(&msg)?;
                self.check_state();
            }
            Command::Leave { class, spot } => {
                let msg = match self.garage.release(class, spot) {
                    Ok(_) => format!("Successfully removed a {class}!"),
                    Err(_) => not_found_message(class, spot),
                };
                self.say(&msg)?;
                self.check_state();
            }
            Command::Status { raw } => {
                let report = self.garage.report(raw);
                self.say(&status_message(&report))?;
            }
            Command::Help => self.banner()?,
            Command::Exit => {
                self.say("Locked it up. See ya!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn say(&mut self, msg: &str) -> anyhow::Result<()> {
        let res = if self.interactive {
            writeln!(self.out, "\n{msg}\n")
        } else {
            writeln!(self.out, "{msg}")
        };
        res.context("write reply")
    }

    fn check_state(&self) {
        if let Err(e) = validate_garage(&self.garage) {
            debug!(%e, "garage state check");
        }
    }
}

fn input_error_message(e: &GarageError) -> String {
    match e {
        GarageError::InvalidClass(_) => {
            "Invalid vehicle type. Vehicle types are: car, van, motorcycle".to_string()
        }
        GarageError::InvalidSpot(tok) => format!("Invalid spot number: {tok}"),
        _ => "Improper input".to_string(),
    }
}

fn not_found_message(class: VehicleClass, spot: Option<usize>) -> String {
    match spot {
        Some(i) => format!("Couldn't find a {class} in spot {} :(", i + 1),
        None => format!("Couldn't find any {} parked :(", class.plural()),
    }
}

fn count_phrase(n: i32, class: VehicleClass) -> String {
    if n == 1 {
        format!("{n} {class}")
    } else {
        format!("{n} {}", class.plural())
    }
}

fn status_message(r: &Report) -> String {
    let verb = if r.counts.get(VehicleClass::Car) == 1 {
        "There is"
    } else {
        "There are"
    };
    let [cars, motorcycles, vans] = VehicleClass::ALL.map(|c| count_phrase(r.counts.get(c), c));
    format!(
        "{verb} {cars}, {motorcycles}, and {vans} parked in the garage\n\
         Here's what it looks like: {}",
        r.view,
    )
}
