//! Sliding-window candidate enumeration
//!
//! Enumerates fixed-length windows over the trimmed transcript, deduplicates
//! on the forward window sequence and filters on the reverse complement.
//! The dedup set is an FxHashSet for membership plus the emission Vec for
//! order; emission order is first-seen window order.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::filter::SequenceFilter;
use crate::sequence::reverse_complement;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no sequence found in input")]
    EmptySequence,
    #[error("trimmed sequence length ({actual}) is less than the oligo length ({required})")]
    InsufficientLength { actual: usize, required: usize },
}

/// A unique, filter-passing oligo candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Forward window sequence, uppercased.
    pub sequence: String,
    /// 0-based window start within the trimmed sequence, first occurrence.
    pub offset: usize,
}

/// Trim `trim_5prime` leading and `trim_3prime` trailing bases.
///
/// A 3' trim of 0 keeps the full 3' end; it never means "trim to empty".
/// The branch is explicit so the asymmetry cannot be lost to generic
/// slicing arithmetic.
pub fn trim_ends(seq: &str, trim_5prime: usize, trim_3prime: usize) -> &str {
    let end = if trim_3prime == 0 {
        seq.len()
    } else {
        seq.len().saturating_sub(trim_3prime)
    };
    if trim_5prime >= end {
        ""
    } else {
        &seq[trim_5prime..end]
    }
}

/// Enumerate, deduplicate and filter candidate windows.
///
/// The duplicate check runs on the forward window sequence before any
/// filter is evaluated; only windows that pass every filter join the
/// emitted set. A window identical to an earlier filter-rejected window is
/// therefore re-evaluated (and rejected again) rather than skipped - this
/// mirrors the established pipeline behavior and is pinned by tests.
pub fn generate(
    sequence: &str,
    oligo_length: usize,
    trim_5prime: usize,
    trim_3prime: usize,
    filters: &[Box<dyn SequenceFilter>],
) -> Result<Vec<Candidate>, GenerateError> {
    let trimmed = trim_ends(sequence, trim_5prime, trim_3prime);
    if trimmed.len() < oligo_length || oligo_length == 0 {
        return Err(GenerateError::InsufficientLength {
            actual: trimmed.len(),
            required: oligo_length,
        });
    }

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut emitted: Vec<Candidate> = Vec::new();

    for start in 0..=(trimmed.len() - oligo_length) {
        let window = trimmed[start..start + oligo_length].to_uppercase();
        if seen.contains(&window) {
            continue;
        }

        let antisense = reverse_complement(&window);
        if !filters.iter().all(|f| f.accepts(&antisense)) {
            continue;
        }

        seen.insert(window.clone());
        emitted.push(Candidate {
            sequence: window,
            offset: start,
        });
    }

    Ok(emitted)
}
