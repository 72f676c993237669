//! Permutation enumeration with mirror-image pruning.

/// Advances `items` to the next permutation in lexicographic order.
///
/// Returns `false` (leaving `items` sorted descending) when `items` was
/// already the last permutation.
pub fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Orderings of `0..m` with exactly one representative per mirror pair.
///
/// A closed tour `start → p → start` and its reverse cost the same on an
/// undirected graph, so only orderings whose first element is smaller than
/// their last are produced. For `m ≥ 2` that yields `m!/2` orderings; for
/// `m ≤ 1` the single ordering.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::exact::CycleOrders;
///
/// let orders: Vec<Vec<usize>> = CycleOrders::new(3).collect();
/// assert_eq!(orders, vec![vec![0, 1, 2], vec![0, 2, 1], vec![1, 0, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct CycleOrders {
    current: Vec<usize>,
    exhausted: bool,
}

impl CycleOrders {
    /// Enumerates orderings of `0..m`.
    pub fn new(m: usize) -> Self {
        Self {
            current: (0..m).collect(),
            exhausted: false,
        }
    }

    fn is_canonical(order: &[usize]) -> bool {
        match (order.first(), order.last()) {
            (Some(first), Some(last)) if order.len() >= 2 => first < last,
            _ => true,
        }
    }
}

impl Iterator for CycleOrders {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let candidate = Self::is_canonical(&self.current).then(|| self.current.clone());
            self.exhausted = !next_permutation(&mut self.current);
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}
