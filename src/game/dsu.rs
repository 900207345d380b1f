//! Disjoint-set forest over board cells.
//!
//! Each owned cell is a node; the partition into sets mirrors the partition
//! of a player's territory into 4-connected areas. Links are arena indices
//! stored inside the cells themselves, so the forest needs no allocation of
//! its own.

use crate::game::Board;

impl Board {
    /// Representative of the set containing `index`, with path halving:
    /// while walking to the root, every visited node is re-parented to its
    /// grandparent. Iterative, amortized near-constant.
    pub(crate) fn find(&mut self, mut index: usize) -> usize {
        loop {
            let parent = self.cell(index).parent;
            if parent == index {
                return index;
            }
            let grandparent = self.cell(parent).parent;
            self.cell_mut(index).parent = grandparent;
            index = grandparent;
        }
    }

    /// Merge the sets containing `a` and `b` using union by rank.
    ///
    /// Returns `true` iff a merge occurred, `false` when both were already
    /// in the same set. On equal ranks the second argument's root is
    /// attached under the first argument's root.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let rank_a = self.cell(root_a).rank;
        let rank_b = self.cell(root_b).rank;

        if rank_a < rank_b {
            self.cell_mut(root_a).parent = root_b;
        } else {
            self.cell_mut(root_b).parent = root_a;
            if rank_a == rank_b {
                self.cell_mut(root_a).rank += 1;
            }
        }

        true
    }

    /// Reset a cell to a union-find singleton.
    pub(crate) fn detach(&mut self, index: usize) {
        let cell = self.cell_mut(index);
        cell.parent = index;
        cell.rank = 1;
    }
}
