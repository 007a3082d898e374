//! Uniform down-sampling of several collections to a common size.
//!
//! Every collection is cut to the size of the smallest one by drawing
//! indices uniformly at random without replacement. Collections are sampled
//! independently; nothing pairs element `i` of one with element `i` of
//! another. The random source is injected so runs can be reproduced.
//!
//! ```rust
//! use legalner::reduce::reduce_uniform;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reduced = reduce_uniform(&[vec![1, 2, 3, 4], vec![10, 20]], &mut rng);
//! assert_eq!(reduced[0].len(), 2);
//! assert_eq!(reduced[1].len(), 2);
//! ```

use std::path::Path;

use rand::seq::index;
use rand::Rng;

use crate::document::AnnotatedDocument;
use crate::io::{open_all, write_documents};
use crate::{Error, Result};

/// Draw `amount` distinct elements of `items` uniformly at random, in draw order.
///
/// `amount` is clamped to `items.len()`.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    amount: usize,
    rng: &mut R,
) -> Vec<T> {
    let amount = amount.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// Reduce every collection to the size of the smallest one.
///
/// The output has one entry per input, in the same order. Elements appear in
/// the order they were drawn, not their original order. No input → no output.
pub fn reduce_uniform<T: Clone, R: Rng + ?Sized>(collections: &[Vec<T>], rng: &mut R) -> Vec<Vec<T>> {
    let Some(min_size) = collections.iter().map(Vec::len).min() else {
        return Vec::new();
    };

    collections
        .iter()
        .map(|collection| sample_without_replacement(collection, min_size, rng))
        .collect()
}

/// Reduce the documents in `inputs` and write them to `outputs`, position by
/// position. Returns the common size.
///
/// All inputs are opened before any is parsed. If one cannot be opened, the
/// handles already opened are closed and the open error is returned.
pub fn reduce_datasets<P, Q, R>(inputs: &[P], outputs: &[Q], rng: &mut R) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: Rng + ?Sized,
{
    if inputs.is_empty() {
        return Err(Error::config("reduce: no input datasets"));
    }
    if inputs.len() != outputs.len() {
        return Err(Error::config(format!(
            "reduce: {} inputs but {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }

    let handles = open_all(inputs)?;
    let datasets = handles
        .into_iter()
        .map(|h| h.parse_json::<Vec<AnnotatedDocument>>())
        .collect::<Result<Vec<_>>>()?;

    for (input, docs) in inputs.iter().zip(&datasets) {
        log::debug!("{}: {} documents", input.as_ref().display(), docs.len());
    }

    let reduced = reduce_uniform(&datasets, rng);
    let size = reduced.first().map(Vec::len).unwrap_or(0);

    for (output, docs) in outputs.iter().zip(&reduced) {
        write_documents(output, docs)?;
    }
    log::info!(
        "reduced {} datasets to {} documents each",
        datasets.len(),
        size
    );
    Ok(size)
}
