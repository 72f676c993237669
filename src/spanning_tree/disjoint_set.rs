//! Disjoint-set union with path compression and union by size.

/// A partition of `0..n` into disjoint groups.
///
/// Groups only ever merge; nothing is split or removed.
///
/// # Examples
///
/// ```
/// use roadtrip_graph::spanning_tree::DisjointSet;
///
/// let mut ds = DisjointSet::new(4);
/// assert!(ds.union(0, 1));
/// assert!(ds.union(2, 3));
/// assert!(!ds.union(1, 0));
/// assert!(ds.same_set(0, 1));
/// assert!(!ds.same_set(1, 2));
/// assert_eq!(ds.num_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton groups.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Representative of the group containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the groups of `a` and `b`.
    ///
    /// Returns `false` if they were already in the same group.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same group.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of groups.
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
