//! Substring filtering of the candidate list.

/// Project the candidate set through a pattern, returning indices into
/// `candidates` for every name containing `pattern` as a byte-wise,
/// case-sensitive substring. An empty pattern is the identity projection.
///
/// Pure and order-preserving: no ranking or scoring, the view always follows
/// candidate order.
pub fn filter(candidates: &[String], pattern: &str) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, name)| pattern.is_empty() || name.contains(pattern))
        .map(|(index, _)| index)
        .collect()
}
