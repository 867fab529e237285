//! Random choice of one joke out of a search result.
//!
//! # Design
//! The RNG is passed in by the caller so tests can seed it. The upper bound
//! of the draw is a plain `count`, and `BoundPolicy` decides where that count
//! comes from: the API-reported `total_jokes` or the length of the decoded
//! list. The two only differ when the API over-reports; with the `Reported`
//! policy that case surfaces as `ApiError::IndexOutOfRange`, never a panic.

use std::fmt;

use rand::Rng;

use crate::error::ApiError;
use crate::types::{Joke, SearchResult};

/// Shown when a term search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "no jokes found with this term";

/// Which number bounds the random index for a term search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundPolicy {
    /// Trust `total_jokes` as reported by the API.
    Reported,
    /// Use the number of jokes actually decoded from `results`.
    #[default]
    Results,
}

impl BoundPolicy {
    pub fn bound(self, result: &SearchResult) -> i64 {
        match self {
            BoundPolicy::Reported => result.total_jokes,
            BoundPolicy::Results => i64::try_from(result.results.len()).unwrap_or(i64::MAX),
        }
    }
}

/// Outcome of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Joke(&'a Joke),
    NoResults,
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Joke(joke) => f.write_str(&joke.text),
            Selection::NoResults => f.write_str(NO_RESULTS_MESSAGE),
        }
    }
}

/// Pick `jokes[i]` for `i` drawn uniformly from `[0, count)`.
///
/// `count <= 0` yields `Selection::NoResults` without touching the RNG.
pub fn select<'a, R>(count: i64, jokes: &'a [Joke], rng: &mut R) -> Result<Selection<'a>, ApiError>
where
    R: Rng + ?Sized,
{
    if count <= 0 {
        return Ok(Selection::NoResults);
    }
    let upper = usize::try_from(count).unwrap_or(usize::MAX);
    let index = rng.gen_range(0..upper);
    jokes
        .get(index)
        .map(Selection::Joke)
        .ok_or(ApiError::IndexOutOfRange {
            index,
            len: jokes.len(),
        })
}

impl SearchResult {
    /// Select from this result with the bound chosen by `policy`.
    pub fn choose<R>(&self, policy: BoundPolicy, rng: &mut R) -> Result<Selection<'_>, ApiError>
    where
        R: Rng + ?Sized,
    {
        select(policy.bound(self), &self.results, rng)
    }
}
