use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;

/// What a single reveal input did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// The directly targeted cell was a mine
    pub triggered_mine: bool,
    /// Cells that went from hidden to revealed, in no particular order
    pub revealed: Vec<Coord2>,
    /// Mines uncovered by the session after a loss, flagged mines excluded
    pub exposed_mines: Vec<Coord2>,
}

impl RevealOutcome {
    /// Whether any cell changed state
    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty() || !self.exposed_mines.is_empty()
    }
}

impl Board {
    /// Reveals the cell at `coords`, flooding through connected zero cells.
    ///
    /// Out-of-range, already revealed and flagged targets are no-ops. A mine
    /// target is revealed and stops there; the flood never reveals a mine.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let mut outcome = RevealOutcome::default();

        if !self.contains(coords) || !self.grid()[coords].is_revealable() {
            return outcome;
        }

        let target = &mut self.grid_mut()[coords];
        target.is_revealed = true;
        outcome.revealed.push(coords);
        log::debug!(
            "Reveal cell at {:?}, mine: {}, count: {}",
            coords,
            target.is_mine,
            target.neighbor_mine_count
        );

        if target.is_mine {
            outcome.triggered_mine = true;
            return outcome;
        }
        if target.neighbor_mine_count != 0 {
            return outcome;
        }

        let mut visited = HashSet::new();
        visited.insert(coords);
        let mut to_visit: VecDeque<Coord2> = VecDeque::new();
        self.queue_neighbors(coords, &mut visited, &mut to_visit);
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            coords,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.grid_mut()[visit_coords];

            // skip flagged or already revealed cells, and never flood into a mine
            if !cell.is_revealable() || cell.is_mine {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            cell.is_revealed = true;
            let visit_count = cell.neighbor_mine_count;
            outcome.revealed.push(visit_coords);
            log::trace!(
                "Flood revealed cell at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            // if this is also zero we visit the neighbors
            if visit_count == 0 {
                self.queue_neighbors(visit_coords, &mut visited, &mut to_visit);
            }
        }

        outcome
    }

    fn queue_neighbors(
        &self,
        coords: Coord2,
        visited: &mut HashSet<Coord2>,
        to_visit: &mut VecDeque<Coord2>,
    ) {
        for pos in self.grid().iter_neighbors(coords) {
            if self.grid()[pos].is_revealable() && visited.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }
}
