//! Nucleotide sequence helpers shared by the pipeline stages
//!
//! All candidate filtering is evaluated against the reverse complement of a
//! window (the strand that hybridizes with the target), so the complement
//! mapping here is the single source of truth for strand conversion.

/// Complement a single base, uppercasing it first.
/// `A<->T`, `C<->G`, `N->N`; anything else passes through uppercased.
#[inline]
fn complement(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'N' => b'N',
        other => other,
    }
}

/// Reverse complement of a nucleotide string, case-insensitive.
///
/// Involution over `{A,C,G,T,N}`: `reverse_complement(reverse_complement(s))`
/// equals the uppercased input.
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes().rev().map(complement).map(char::from).collect()
}

/// GC content as a percentage in `[0, 100]`, case-insensitive.
/// An empty sequence has a GC content of 0.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    (gc as f64 / seq.len() as f64) * 100.0
}
