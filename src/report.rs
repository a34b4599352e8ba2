use itertools::Itertools;
use std::io::Write;

/// Tallies winner identifiers across repeated draws, most frequent first;
/// ties break on the identifier.
pub fn win_counts(winner_ids: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts = winner_ids.counts().into_iter().collect_vec();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

pub fn report_counts(counts: &[(String, usize)], writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_all(
        counts
            .iter()
            .map(|(id, n)| format!("#WF {:>10} {:>10}\n", id, n))
            .join("")
            .as_bytes(),
    )?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_sort_by_frequency_then_identifier() {
        let ids = ["b", "a", "c", "a", "b", "a"].map(str::to_string);

        let counts = win_counts(ids.into_iter());

        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn report_lines_are_aligned() {
        let counts = vec![("alice".to_string(), 12), ("bob".to_string(), 3)];
        let mut out = Vec::new();

        report_counts(&counts, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#WF      alice         12\n#WF        bob          3\n"
        );
    }
}
