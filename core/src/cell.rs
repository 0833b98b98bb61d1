use serde::{Deserialize, Serialize};

/// One grid position. Fixed layout, stored by value in the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the Moore neighbors, always 0 for mine cells.
    pub neighbor_mine_count: u8,
}

impl Cell {
    /// Whether a reveal would act on this cell.
    pub const fn is_revealable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn view(self) -> CellView {
        use CellView::*;
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, true, _) => Mine,
            (true, false, _) => Revealed(self.neighbor_mine_count),
            (false, _, true) => Flagged,
            (false, _, false) => Hidden,
        }
    }
}

/// Player-visible state of a cell, what a presentation layer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine exposed after the game was lost
    Mine,
    /// The mine whose reveal lost the game
    Exploded,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_hidden_and_safe() {
        let cell = Cell::default();
        assert!(!cell.is_mine);
        assert!(cell.is_revealable());
        assert_eq!(cell.view(), CellView::Hidden);
    }

    #[test]
    fn flagged_cell_is_not_revealable() {
        let cell = Cell {
            is_flagged: true,
            ..Cell::default()
        };
        assert!(!cell.is_revealable());
        assert_eq!(cell.view(), CellView::Flagged);
        assert!(cell.view().is_closed());
    }

    #[test]
    fn revealed_cell_shows_its_count() {
        let cell = Cell {
            is_revealed: true,
            neighbor_mine_count: 3,
            ..Cell::default()
        };
        assert_eq!(cell.view(), CellView::Revealed(3));
        assert!(!cell.view().is_closed());
    }
}
