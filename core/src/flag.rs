use crate::*;

/// Result of a flag input on one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    /// Revealed, out of range, or the game is over
    Ignored,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl Board {
    /// Flips the suspected-mine marker on a hidden cell. Revealed and
    /// out-of-range cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.contains(coords) {
            return FlagOutcome::Ignored;
        }

        let cell = &mut self.grid_mut()[coords];
        if cell.is_revealed {
            return FlagOutcome::Ignored;
        }

        cell.is_flagged = !cell.is_flagged;
        let flagged = cell.is_flagged;
        self.record_flag(flagged);
        log::trace!(
            "Toggled flag at {:?}, {} flags placed",
            coords,
            self.flag_count()
        );

        if flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        }
    }
}
