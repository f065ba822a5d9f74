/// Disjoint set over a fixed range of vertex indices
/// - path compression on `root`
/// - union by rank
/// - cannot split a merged set
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(num_elements: usize) -> Self {
        DisjointSet {
            parent: (0..num_elements).collect(),
            rank: vec![0; num_elements],
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Compresses the chain it walks: every visited entry is re-parented
    /// straight to the root. Iterative, so a long unbalanced chain cannot
    /// blow the stack before its first compression.
    pub fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`, shallower tree under deeper.
    /// On equal rank one root is picked as parent and its rank grows by one.
    pub fn unite(&mut self, x: usize, y: usize) {
        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
    }

    pub fn is_same(&mut self, x: usize, y: usize) -> bool {
        self.root(x) == self.root(y)
    }

    /// Number of sets, read as the count of self-parented entries.
    pub fn count_roots(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set_unite() {
        let mut ds = DisjointSet::new(5);
        ds.unite(0, 1);
        ds.unite(3, 4);
        ds.unite(1, 2);
        assert!(ds.is_same(0, 2));
        assert!(!ds.is_same(0, 3));

        ds.unite(0, 3);
        assert!(ds.is_same(0, 4));
    }

    #[test]
    fn test_count_roots_tracks_merges() {
        let mut ds = DisjointSet::new(6);
        assert_eq!(ds.count_roots(), 6);

        ds.unite(0, 1);
        ds.unite(2, 3);
        assert_eq!(ds.count_roots(), 4);

        ds.unite(1, 3);
        assert_eq!(ds.count_roots(), 3);

        // already same set, nothing changes
        ds.unite(0, 2);
        assert_eq!(ds.count_roots(), 3);
    }

    #[test]
    fn test_rank_keeps_trees_shallow_on_ties() {
        let mut ds = DisjointSet::new(4);
        ds.unite(0, 1);
        ds.unite(2, 3);
        ds.unite(0, 2);
        // the equal-rank merge grew the surviving root by one
        let root = ds.root(0);
        assert_eq!(ds.rank[root], 2);
        for v in 0..4 {
            assert_eq!(ds.root(v), root);
        }
    }

    #[test]
    fn test_compression_flattens_walked_chains() {
        let mut ds = DisjointSet::new(5);
        // build a chain by hand: 0 <- 1 <- 2 <- 3 <- 4
        for v in 1..5 {
            ds.parent[v] = v - 1;
        }
        assert_eq!(ds.root(4), 0);
        // everything on the walked chain now points straight at the root
        for v in 1..5 {
            assert_eq!(ds.parent[v], 0);
        }
    }

    #[test]
    fn test_connectivity_matches_united_pairs() {
        let mut ds = DisjointSet::new(8);
        let pairs = [(0, 1), (1, 2), (4, 5), (6, 7)];
        for (x, y) in pairs {
            ds.unite(x, y);
        }

        assert!(ds.is_same(0, 2));
        assert!(ds.is_same(4, 5));
        assert!(!ds.is_same(2, 4));
        assert!(!ds.is_same(3, 0));
        assert!(!ds.is_same(5, 6));
    }
}
