//! Generic dependency inversion demo: calculators bound to a strategy and a payload.
//!
//! Run with: cargo run --bin generic_dip [-- config.toml]

use std::env;
use std::path::PathBuf;
use std::process;

use colored::Colorize;
use dep_inversion::demos::run_generic_dip;
use dep_inversion::{logging, Console, DemoConfig};

fn main() {
    logging::init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };

    let mut console = Console::from(&config.output);
    if config.output.banner {
        console.banner("-- generic DIP demo --");
        console.blank();
    }

    run_generic_dip(&config.calc, &mut console);

    if config.output.banner {
        console.blank();
        console.banner("That's all Folks!");
    }
}
