use core::num::Saturating;
use serde::Serialize;

use crate::*;

/// Minefield state for one session: the grid, its mine count and whether
/// the mines have been laid yet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    grid: Grid,
    mine_count: CellCount,
    flag_count: Saturating<CellCount>,
    mines_placed: bool,
}

impl Board {
    /// Empty board, mines are laid later by a [`MinePlacer`].
    pub fn new(config: GameConfig) -> Self {
        Self {
            grid: Grid::new(config.size()),
            mine_count: config.mines(),
            flag_count: Saturating(0),
            mines_placed: false,
        }
    }

    pub fn with_dimensions(width: Coord, height: Coord, mine_count: CellCount) -> Result<Self> {
        Ok(Self::new(GameConfig::new((width, height), mine_count)?))
    }

    /// Board with mines at exactly `mine_coords` and neighbor counts already computed.
    ///
    /// Duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Grid::new(size);

        for &coords in mine_coords {
            grid.update(coords, |cell| cell.is_mine = true)?;
        }

        let mine_count = grid
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap();
        let config = GameConfig::new(size, mine_count)?;

        let mut board = Self {
            grid,
            mine_count: config.mines(),
            flag_count: Saturating(0),
            mines_placed: true,
        };
        board.compute_counts();
        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count.0
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        self.grid.get(coords)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.grid.contains(coords)
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid.coords().filter(|&coords| self.grid[coords].is_mine)
    }

    /// Clear condition: every non-mine cell is revealed.
    pub fn is_cleared(&self) -> bool {
        self.grid.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn set_mines_placed(&mut self) {
        self.mines_placed = true;
    }

    pub(crate) fn record_flag(&mut self, flagged: bool) {
        if flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn new_board_has_no_mines_yet() {
        let board = Board::with_dimensions(4, 3, 5).unwrap();

        assert_eq!(board.size(), (4, 3));
        assert_eq!(board.mine_count(), 5);
        assert!(!board.mines_placed());
        assert_eq!(board.mine_coords().count(), 0);
        assert!(board.grid().iter().all(|&cell| cell == Cell::default()));
    }

    #[test]
    fn impossible_dimensions_are_rejected() {
        assert!(matches!(
            Board::with_dimensions(3, 3, 9),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Board::with_dimensions(0, 3, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn from_mine_coords_places_exactly_those_mines() {
        let board = Board::from_mine_coords((3, 3), &[(2, 2), (0, 1), (2, 2)]).unwrap();

        assert!(board.mines_placed());
        assert_eq!(board.mine_count(), 2);
        let mines: Vec<_> = board.mine_coords().collect();
        assert_eq!(mines, [(0, 1), (2, 2)]);
        assert_eq!(board.cell((1, 1)).unwrap().neighbor_mine_count, 2);
    }

    #[test]
    fn from_mine_coords_rejects_bad_input() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds {
                coords: (2, 0),
                size: (2, 2)
            })
        );
        assert!(matches!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn cleared_ignores_mine_cells() {
        let mut board = Board::from_mine_coords((2, 1), &[(0, 0)]).unwrap();
        assert!(!board.is_cleared());

        board.grid_mut()[(1, 0)].is_revealed = true;
        assert!(board.is_cleared());

        board.grid_mut()[(0, 0)].is_revealed = true;
        assert!(board.is_cleared());
    }

    #[test]
    fn mine_free_board_is_cleared_only_when_fully_revealed() {
        let mut board = Board::from_mine_coords((2, 2), &[]).unwrap();
        assert!(!board.is_cleared());

        for cell in board.grid_mut().iter_mut() {
            cell.is_revealed = true;
        }
        assert!(board.is_cleared());
    }
}
