//! Stepwise highlight transitions.
//!
//! A transition walks the highlight from its old row to its new one a single
//! row at a time so the selection appears to slide rather than jump. The
//! iterator is lazy and finite; the session consumes it to completion inside
//! one event dispatch, so transitions are never queued and a fresh
//! navigation input always starts from a settled highlight.

/// Lazy sequence of intermediate highlight indices, excluding `from` and
/// including `to`, strictly monotonic in steps of one.
pub fn transition(from: usize, to: usize) -> Transition {
    Transition { current: from, to }
}

#[derive(Debug, Clone)]
pub struct Transition {
    current: usize,
    to: usize,
}

impl Iterator for Transition {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == self.to {
            return None;
        }
        if self.current < self.to {
            self.current += 1;
        } else {
            self.current -= 1;
        }
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.abs_diff(self.to);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Transition {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_to_self_is_empty() {
        assert_eq!(transition(7, 7).count(), 0);
    }

    #[test]
    fn downward_transition_steps_through_every_row() {
        let steps: Vec<usize> = transition(2, 6).collect();
        assert_eq!(steps, vec![3, 4, 5, 6]);
    }

    #[test]
    fn upward_transition_steps_through_every_row() {
        let steps: Vec<usize> = transition(6, 2).collect();
        assert_eq!(steps, vec![5, 4, 3, 2]);
    }

    #[test]
    fn step_count_equals_distance() {
        for (from, to) in [(0, 1), (1, 0), (3, 11), (11, 3), (0, 0)] {
            let steps: Vec<usize> = transition(from, to).collect();
            assert_eq!(steps.len(), from.abs_diff(to));
            if let Some(&last) = steps.last() {
                assert_eq!(last, to);
            }
        }
    }

    #[test]
    fn steps_are_strictly_monotonic() {
        let steps: Vec<usize> = transition(10, 4).collect();
        assert!(steps.windows(2).all(|pair| pair[0] == pair[1] + 1));
    }

    #[test]
    fn size_hint_is_exact() {
        let mut steps = transition(5, 9);
        assert_eq!(steps.len(), 4);
        steps.next();
        assert_eq!(steps.len(), 3);
    }
}
