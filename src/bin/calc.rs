use anyhow::Result;
use clap::Parser;
use radial_motif_rs::calc::{Dispatcher, Variant};
use std::io;

/// Menu-driven console calculator.
#[derive(Parser, Debug)]
#[command(name = "calc", about = "Menu-driven console calculator", version)]
struct Args {
    /// Dispatch a single menu selection and exit, instead of looping until
    /// Exit is chosen.
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if args.once {
        let mut dispatcher = Dispatcher::new(stdin.lock(), stdout.lock(), Variant::SingleShot);
        dispatcher.run_once()?;
    } else {
        let mut dispatcher = Dispatcher::new(stdin.lock(), stdout.lock(), Variant::Looping);
        dispatcher.run_until_exit()?;
    }
    Ok(())
}
