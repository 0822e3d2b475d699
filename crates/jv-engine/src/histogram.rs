use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub key: String,
    pub count: usize,
}

/// Frequency counter that remembers first-seen order.
///
/// `sorted()` orders by descending count; equal counts keep the order in
/// which their keys first appeared.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    entries: Vec<Count>,
    index: HashMap<String, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(Count {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sorted(&self) -> Vec<Count> {
        let mut out = self.entries.clone();
        // sort_by is stable, so ties stay in first-seen order
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_desc_with_stable_ties() {
        let mut h = Histogram::new();
        for key in ["b", "a", "c", "a", "c", "d"] {
            h.add(key);
        }
        let keys: Vec<_> = h.sorted().into_iter().map(|c| (c.key, c.count)).collect();
        assert_eq!(
            keys,
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1),
                ("d".to_string(), 1)
            ]
        );
        assert_eq!(h.total(), 6);
    }

    #[test]
    fn test_empty() {
        let h = Histogram::new();
        assert!(h.is_empty());
        assert_eq!(h.total(), 0);
        assert!(h.sorted().is_empty());
    }
}
