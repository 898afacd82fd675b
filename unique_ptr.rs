use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

use scoped_ownership::{run, Transfer};

#[derive(Parser, Debug)]
#[command(version, about = "A car owned by exactly one handle at a time")]
struct Cli {
    /// Move the car into a second handle before checking the first one
    #[arg(long)]
    transfer: bool,
}

fn init_logger() {
    // Quiet by default so stdout and stderr carry only the transcript.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = try_main() {
        error!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let transfer = if cli.transfer {
        Transfer::Move
    } else {
        Transfer::Keep
    };

    // `main` owns the console. `run` and the `Car` it creates only hold
    // counted references to it, so the `Car` can still report its own
    // destruction after `run` has otherwise finished.
    let console = Rc::new(RefCell::new(io::stdout()));
    run(console, transfer).context("writing to stdout")
}
