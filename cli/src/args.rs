//! Command-line surface.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dadjoke_core::{BoundPolicy, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "dadjoke", version, about = "Dad jokes from the command line")]
pub struct Cli {
    /// Base URL of the joke API.
    #[arg(long, global = true, env = "DADJOKE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds; 0 disables it.
    #[arg(
        long,
        global = true,
        env = "DADJOKE_TIMEOUT",
        default_value_t = 10,
        value_name = "SECS"
    )]
    pub timeout: u64,

    /// Increase log verbosity on stderr (-v, -vv, -vvv). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get a random dad joke
    #[command(long_about = "This command fetches a random dad joke from the icanhazdadjoke api")]
    Random(RandomArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// A search term for a dad joke.
    #[arg(long, default_value = "")]
    pub term: String,

    /// What bounds the random pick among search results.
    #[arg(long, value_enum, default_value_t = Bound::Results)]
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Bound {
    /// Number of jokes actually returned.
    Results,
    /// `total_jokes` as reported by the API.
    Reported,
}

impl From<Bound> for BoundPolicy {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Results => BoundPolicy::Results,
            Bound::Reported => BoundPolicy::Reported,
        }
    }
}
