// crates/garage-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod logging;
mod session;

#[derive(Parser)]
#[command(name = "garage-cli")]
#[command(about = "Parking garage occupancy tracker", long_about = None)]
pub struct Cli {
    /// Log allocations, releases and state checks to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session on stdin/stdout
    Shell(cmd::shell::ShellArgs),

    /// Run each argument as one command line against a fresh garage
    Run(cmd::run::RunArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Shell(args) => cmd::shell::run(args),
        Commands::Run(args) => cmd::run::run(args),
    }
}
