//! Accession -> gene-id table loading
//!
//! Tab-delimited input with a header line, columns `[0]=gene_id` and
//! `[2]=accession`. One accession may appear under multiple gene ids, so
//! the map value is a set. Lines with fewer than three columns are skipped.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub type GeneMap = FxHashMap<String, BTreeSet<String>>;

pub fn load_gene_map(path: &Path) -> Result<GeneMap> {
    let file = File::open(path)
        .with_context(|| format!("failed to open gene-id map {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut map = GeneMap::default();
    for line in reader.lines().skip(1) {
        let line = line?;
        let parts: Vec<&str> = line.trim_end().split('\t').collect();
        if parts.len() < 3 {
            continue;
        }
        map.entry(parts[2].to_string())
            .or_default()
            .insert(parts[0].to_string());
    }
    Ok(map)
}
