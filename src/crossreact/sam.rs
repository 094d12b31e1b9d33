//! Lenient SAM-line parsing
//!
//! Parsing is a total function: a line either yields a well-formed
//! `AlignmentRecord` or `None`. Malformed records are dropped silently so a
//! single corrupt line cannot abort a large batch; nothing here returns an
//! error.

/// One candidate-vs-genome alignment hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub oligo_id: String,
    pub accession: String,
    pub mismatches: u32,
    pub sequence: String,
}

/// Parse one SAM body line.
///
/// Requirements for a usable record: not an `@` header, at least 11
/// tab-delimited fields, and an `NM` tag among the optional fields whose
/// value (the text after the last `:`) parses as a non-negative integer.
/// When `NM` appears more than once the last occurrence wins.
pub fn parse_alignment_line(line: &str) -> Option<AlignmentRecord> {
    if line.starts_with('@') {
        return None;
    }

    let fields: Vec<&str> = line.trim_end().split('\t').collect();
    if fields.len() < 11 {
        return None;
    }

    let mut nm_value: Option<&str> = None;
    for tag in &fields[11..] {
        if let Some(name) = tag.split(':').next() {
            if name == "NM" {
                nm_value = tag.rsplit(':').next();
            }
        }
    }
    let mismatches: u32 = nm_value?.parse().ok()?;

    Some(AlignmentRecord {
        oligo_id: fields[0].to_string(),
        accession: fields[2].to_string(),
        mismatches,
        sequence: fields[9].to_string(),
    })
}
