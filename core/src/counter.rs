use crate::*;

impl Board {
    /// Fills in `neighbor_mine_count` for every non-mine cell. Runs once,
    /// right after mines are laid.
    pub fn compute_counts(&mut self) {
        for coords in self.grid().coords() {
            let count = if self.grid()[coords].is_mine {
                0
            } else {
                self.adjacent_mine_count(coords)
            };
            self.grid_mut()[coords].neighbor_mine_count = count;
        }
    }

    /// Mines among the in-bounds Moore neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.grid()
            .iter_neighbors(coords)
            .filter(|&pos| self.grid()[pos].is_mine)
            .count()
            .try_into()
            .unwrap()
    }
}
