mod args;
mod batch_mode;
mod error;
mod regular;
mod testgen;

use args::{Args, Mode};
use clap::Parser;
use error::CliError;
use log::LevelFilter;

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    builder.init();

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(e.exit_code() as i32);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    match args.mode()? {
        Mode::Regular { regex, strings } => regular::run(&regex, &strings),
        Mode::Batch { input, output } => batch_mode::run(&input, &output, args.parallel),
        Mode::GenerateTests { count } => testgen::run(count),
    }
}
