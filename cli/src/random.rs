//! The `random` command: one random joke, or one random match for a term.

use std::io::Write;

use anyhow::Context;
use dadjoke_core::{ApiError, BoundPolicy, Joke, JokeClient, SearchResult, Selection};
use rand::Rng;
use tracing::{debug, info};

use crate::args::RandomArgs;
use crate::fetch::Fetcher;

/// Fetch and decode a single random joke.
pub fn random_joke<F>(client: &JokeClient, fetcher: &F) -> Result<Joke, ApiError>
where
    F: Fetcher + ?Sized,
{
    let response = fetcher.fetch(&client.build_random_joke())?;
    client.parse_random_joke(&response)
}

/// Fetch and decode the search envelope for `term`.
pub fn search_jokes<F>(client: &JokeClient, fetcher: &F, term: &str) -> Result<SearchResult, ApiError>
where
    F: Fetcher + ?Sized,
{
    let response = fetcher.fetch(&client.build_search(term))?;
    let result = client.parse_search(&response)?;
    info!(
        term,
        total_jokes = result.total_jokes,
        returned = result.results.len(),
        "search finished"
    );
    Ok(result)
}

/// Run `random` and write the chosen line to `out`.
///
/// An empty term fetches a single random joke. A term that matches nothing
/// writes the no-results message and still succeeds.
pub fn run_random<F, R, W>(
    client: &JokeClient,
    fetcher: &F,
    args: &RandomArgs,
    rng: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    F: Fetcher + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    if args.term.is_empty() {
        let joke = random_joke(client, fetcher).context("could not fetch a random joke")?;
        debug!(id = %joke.id, "fetched random joke");
        writeln!(out, "{}", joke.text)?;
        return Ok(());
    }

    let result = search_jokes(client, fetcher, &args.term)
        .with_context(|| format!("could not search for jokes matching {:?}", args.term))?;
    let policy = BoundPolicy::from(args.bound);
    let selection = result
        .choose(policy, rng)
        .with_context(|| format!("could not pick a joke using the {policy:?} bound"))?;
    if let Selection::Joke(joke) = selection {
        debug!(id = %joke.id, "picked joke");
    }
    writeln!(out, "{selection}")?;
    Ok(())
}
