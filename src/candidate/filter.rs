//! Composable filters applied to the antisense strand of each window
//!
//! Filters receive the reverse complement of the forward window, already
//! uppercased by the generator. The duplicate check happens before any
//! filter runs and is not a filter itself.

use crate::sequence::gc_content;

/// A predicate over the antisense (reverse-complement) strand.
pub trait SequenceFilter {
    /// Returns true when the antisense strand passes this filter.
    fn accepts(&self, antisense: &str) -> bool;
}

/// Inclusive GC-content range, percentage scale.
pub struct GcContentFilter {
    min_gc: f64,
    max_gc: f64,
}

impl GcContentFilter {
    pub fn new(min_gc: f64, max_gc: f64) -> Self {
        Self { min_gc, max_gc }
    }
}

impl SequenceFilter for GcContentFilter {
    fn accepts(&self, antisense: &str) -> bool {
        let gc = gc_content(antisense);
        gc >= self.min_gc && gc <= self.max_gc
    }
}

/// Rejects sequences containing any configured motif as a substring.
pub struct ForbiddenMotifFilter {
    motifs: Vec<String>,
}

impl ForbiddenMotifFilter {
    pub fn new(motifs: impl IntoIterator<Item = String>) -> Self {
        Self {
            motifs: motifs.into_iter().map(|m| m.to_uppercase()).collect(),
        }
    }

    /// Parse a comma-separated motif list; whitespace is trimmed and empty
    /// entries are dropped.
    pub fn from_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

impl SequenceFilter for ForbiddenMotifFilter {
    fn accepts(&self, antisense: &str) -> bool {
        !self.motifs.iter().any(|m| antisense.contains(m.as_str()))
    }
}
