//! Host side of the dad joke CLI.
//!
//! # Overview
//! Parses arguments, performs the HTTP round-trips for requests built by
//! `dadjoke_core`, and prints the result. Errors travel back to `run` as
//! values; the binary turns them into a message on stderr and exit code 1.

pub mod args;
pub mod fetch;
pub mod logging;
pub mod random;

use std::io::Write;
use std::time::Duration;

use dadjoke_core::JokeClient;
use rand::Rng;

pub use args::{Bound, Cli, Command, RandomArgs};
pub use fetch::{Fetcher, UreqFetcher};

/// Execute the parsed command line, writing user-facing output to `out`.
pub fn run<R, W>(cli: &Cli, rng: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let client = JokeClient::new(&cli.api_url);
    let timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));
    let fetcher = UreqFetcher::new(timeout);

    match &cli.command {
        Command::Random(args) => random::run_random(&client, &fetcher, args, rng, out),
    }
}
