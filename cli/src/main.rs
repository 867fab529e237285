use std::io;
use std::process::ExitCode;

use clap::Parser;
use dadjoke_cli::{logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("warning: {err:#}");
    }

    let mut stdout = io::stdout().lock();
    match dadjoke_cli::run(&cli, &mut rand::thread_rng(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
