//! Basic dependency inversion demo: one generic host, two self-announcing parts.
//!
//! Run with: cargo run --bin basic_dip [-- config.toml]

use std::env;
use std::path::PathBuf;
use std::process;

use colored::Colorize;
use dep_inversion::demos::run_basic_dip;
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
        console.banner("-- basic_dip demo --");
        console.blank();
    }

    run_basic_dip(&config.basic, &mut console);

    if config.output.banner {
        console.blank();
        console.banner("That's all Folks!");
    }
}
