//! Free-text search over policy records
//!
//! A record matches when its beneficiary name, car brand, car type or
//! identifier contains the search term, ignoring case. Missing fields never
//! match. An empty term matches everything, and results always keep the
//! order of the input collection.

use std::borrow::Borrow;

use crate::record::Policy;

/// Narrows `records` to those matching `term`
///
/// Works on owned records (`Vec<Policy>`) as well as borrowed ones
/// (`records.iter()`), returning the same element type it was given.
pub fn filter<I, P>(records: I, term: &str) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    P: Borrow<Policy>,
{
    if term.is_empty() {
        return records.into_iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.borrow().matches_lowercase(&needle))
        .collect()
}
