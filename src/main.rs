mod args;
mod import;

use clap::Parser;
use log::{debug, error};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::import::{run_import, ImportSettings};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("args: {:?}", args);

    let res = ImportSettings::from_args(&args).and_then(|settings| run_import(&settings));

    if let Err(e) = res {
        error!("Error occured {:?}", e);
        eprintln!("The survey could not be imported: {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
