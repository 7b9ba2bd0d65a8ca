//! Cartesian product over alternation groups
//!
//! Yields one combination per choice of an element from every group, with
//! the last group varying fastest. No groups yield a single empty
//! combination; any empty group yields nothing.

use std::iter::FusedIterator;

/// Iterator over every combination of one element per group
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    groups: &'a [Vec<T>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(groups: &'a [Vec<T>]) -> Self {
        Self {
            groups,
            indices: vec![0; groups.len()],
            done: groups.iter().any(Vec::is_empty),
        }
    }

    /// Total number of combinations
    pub fn total(groups: &[Vec<T>]) -> usize {
        groups.iter().map(Vec::len).product()
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self
            .groups
            .iter()
            .zip(&self.indices)
            .map(|(group, &i)| &group[i])
            .collect();

        // Odometer increment, rightmost position first
        self.done = true;
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.groups[pos].len() {
                self.done = false;
                break;
            }
            self.indices[pos] = 0;
        }

        Some(current)
    }
}

impl<T> FusedIterator for Combinations<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_order() {
        let groups = vec![vec!["1", "2"], vec!["1", "2", "3"], vec!["1"]];
        let joined: Vec<String> = Combinations::new(&groups)
            .map(|combo| combo.into_iter().copied().collect::<Vec<_>>().join(","))
            .collect();
        assert_eq!(
            joined.join(" "),
            "1,1,1 1,2,1 1,3,1 2,1,1 2,2,1 2,3,1"
        );
        assert_eq!(Combinations::total(&groups), 6);
    }

    #[test]
    fn test_no_groups_yields_one_empty_combination() {
        let groups: Vec<Vec<&str>> = Vec::new();
        let mut combos = Combinations::new(&groups);
        assert_eq!(combos.next(), Some(Vec::new()));
        assert_eq!(combos.next(), None);
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        let groups = vec![vec!["a"], Vec::new()];
        assert_eq!(Combinations::new(&groups).count(), 0);
    }
}
