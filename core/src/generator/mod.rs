use crate::*;
pub use random::*;

mod random;

/// Strategy that lays a board's mines before the first reveal.
pub trait MinePlacer {
    /// Sets `is_mine` on exactly `board.mine_count()` cells, never on `safe_cell`.
    fn place(&mut self, board: &mut Board, safe_cell: Coord2) -> Result<()>;
}
