/// Disjoint-set forest over logical maze cells.
///
/// `find` compresses paths iteratively; `union` hangs the first root under the second with no
/// rank or size heuristic.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `size` singleton sets, each cell its own root.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    /// Returns the root of `x`'s set and points every node on the way directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`.
    /// Returns `false` and leaves the forest untouched if they were already connected.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        self.parent[root_x] = root_y;
        true
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
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
    use proptest::prelude::*;

    impl UnionFind {
        fn connected(&mut self, x: usize, y: usize) -> bool {
            self.find(x) == self.find(y)
        }
    }

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.set_count(), 4);
        (0..4).for_each(|i| assert_eq!(uf.find(i), i));
        assert_eq!(UnionFind::new(0).set_count(), 0);
    }

    #[test]
    fn test_union_attaches_first_root_under_second() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(0), 1);
        assert!(uf.union(1, 2));
        assert_eq!(uf.find(0), 2);
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_union_of_connected_is_noop() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        let before = uf.parent.clone();
        assert!(!uf.union(1, 0));
        assert!(!uf.union(0, 0));
        assert_eq!(uf.parent, before);
    }

    #[test]
    fn test_find_compresses_path() {
        // The chain 0 -> 1 -> 2 -> 3 -> 4
        let mut uf = UnionFind {
            parent: vec![1, 2, 3, 4, 4],
        };
        assert_eq!(uf.find(0), 4);
        assert_eq!(uf.parent, vec![4, 4, 4, 4, 4]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_set_count_tracks_successful_unions(
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..60),
        ) {
            let mut uf = UnionFind::new(20);
            let mut merges = 0;
            for (a, b) in ops {
                let was_connected = uf.connected(a, b);
                let merged = uf.union(a, b);
                prop_assert_eq!(merged, !was_connected);
                prop_assert!(uf.connected(a, b));
                if merged {
                    merges += 1;
                }
            }
            prop_assert_eq!(uf.set_count(), 20 - merges);
        }

        #[test]
        fn prop_find_is_idempotent(
            ops in proptest::collection::vec((0_usize..16, 0_usize..16), 0..40),
        ) {
            let mut uf = UnionFind::new(16);
            for (a, b) in ops {
                uf.union(a, b);
            }
            for i in 0..16 {
                let root = uf.find(i);
                prop_assert_eq!(uf.find(root), root);
                prop_assert_eq!(uf.parent[i], root);
            }
        }
    }
}
