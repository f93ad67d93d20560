use std::collections::BTreeMap;

/// How many other nodes each rendered node visually collides with
///
/// Counts are tracked both per layout index and per package name. Several
/// tree positions can share a package name; their counts add up in the
/// by-name view. Display emphasis only, never used for correctness.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlapTable {
    by_index: Vec<usize>,
    by_name: BTreeMap<String, usize>,
    pair_count: usize,
}

impl OverlapTable {
    pub fn new(node_count: usize) -> Self {
        Self {
            by_index: vec![0; node_count],
            by_name: BTreeMap::new(),
            pair_count: 0,
        }
    }

    /// Records that the nodes at `a` and `b` overlap
    pub fn record_pair(&mut self, a: (usize, &str), b: (usize, &str)) {
        for (index, name) in [a, b] {
            if let Some(count) = self.by_index.get_mut(index) {
                *count += 1;
            }
            *self.by_name.entry(name.to_string()).or_insert(0) += 1;
        }
        self.pair_count += 1;
    }

    pub fn count_for(&self, name: &str) -> usize {
        self.by_name.get(name).copied().unwrap_or(0)
    }

    pub fn count_at(&self, index: usize) -> usize {
        self.by_index.get(index).copied().unwrap_or(0)
    }

    pub fn is_overlapping(&self, index: usize) -> bool {
        self.count_at(index) > 0
    }

    /// Number of overlapping unordered pairs
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }

    /// Names with a non-zero count, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_name.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
