use super::Weight;
use fxhash::FxHashSet;
use std::io::BufRead;

/// A single raffle entry. Eligible for the draw iff its weight is positive;
/// identifiers are expected to be unique within one entry list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub id: String,
    pub weight: Weight,
}

impl Entry {
    pub fn new(id: impl Into<String>, weight: Weight) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.weight > 0
    }
}

/// Reads one entry per line: an identifier, optionally followed by a tab or
/// comma and an integer weight. A missing or unparseable weight field counts
/// as 1. Blank lines and lines starting with `#` are skipped, and repeated
/// identifiers keep their first occurrence.
///
/// Non-positive weights are kept as-is; excluding them is the draw's job.
pub fn read_entries(reader: impl BufRead) -> std::io::Result<Vec<Entry>> {
    let mut seen = FxHashSet::default();
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (id, weight) = match line.split_once(|c| c == '\t' || c == ',') {
            Some((id, weight)) => (id.trim(), weight.trim().parse().unwrap_or(1)),
            None => (line, 1),
        };

        if id.is_empty() || !seen.insert(id.to_string()) {
            continue;
        }

        entries.push(Entry::new(id, weight));
    }

    Ok(entries)
}
