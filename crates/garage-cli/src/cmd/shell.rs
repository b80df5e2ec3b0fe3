// crates/garage-cli/src/cmd/shell.rs

use clap::Args;
use garage_core::Garage;

use crate::cmd::GarageArgs;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct ShellArgs {
    #[command(flatten)]
    pub garage: GarageArgs,

    /// Skip the welcome text
    #[arg(long)]
    pub no_banner: bool,
}

pub fn run(args: ShellArgs) -> anyhow::Result<()> {
    let garage = Garage::with_config(args.garage.config());
    let stdout = std::io::stdout();
    let mut session = Session::new(garage, stdout.lock(), true);

    if !args.no_banner {
        session.banner()?;
    }
    session.run(std::io::stdin().lock())
}
