// crates/garage-cli/src/cmd/run.rs

use clap::Args;
use garage_core::Garage;

use crate::cmd::GarageArgs;
use crate::session::{Flow, Session};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub garage: GarageArgs,

    /// Command lines, e.g. "van entering" "status raw"
    #[arg(required = true)]
    pub commands: Vec<String>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let garage = Garage::with_config(args.garage.config());
    let stdout = std::io::stdout();
    let mut session = Session::new(garage, stdout.lock(), false);

    for line in &args.commands {
        if session.execute_line(line)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}
