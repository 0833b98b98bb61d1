use rand::prelude::*;

use super::*;

/// Uniform rejection sampling over the whole board, excluding only the
/// single `safe_cell`.
#[derive(Debug)]
pub struct RejectionSampler<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RejectionSampler<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MinePlacer for RejectionSampler<'_, R> {
    fn place(&mut self, board: &mut Board, safe_cell: Coord2) -> Result<()> {
        let (width, height) = board.size();
        let total_cells = board.total_cells();
        let mine_count = board.mine_count();

        // guard against a sampling loop that can never finish
        if mine_count >= total_cells {
            return Err(ConfigError::TooManyMines {
                mines: mine_count,
                cells: total_cells,
            }
            .into());
        }
        if board.mines_placed() {
            log::warn!("Refusing to place mines twice on the same board");
            return Err(GameError::AlreadyPlaced);
        }
        let safe_cell = board.grid().validate_coords(safe_cell)?;

        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < mine_count {
            let coords = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            draws += 1;
            if coords == safe_cell || board.grid()[coords].is_mine {
                continue;
            }
            board.grid_mut()[coords].is_mine = true;
            mines_placed += 1;
        }
        board.set_mines_placed();

        log::debug!(
            "Placed {} mines on a {}x{} board in {} draws, safe cell {:?}",
            mine_count,
            width,
            height,
            draws,
            safe_cell
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg64;

    fn place(config: GameConfig, safe_cell: Coord2, seed: u64) -> Result<Board> {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut board = Board::new(config);
        RejectionSampler::new(&mut rng).place(&mut board, safe_cell)?;
        Ok(board)
    }

    #[test]
    fn places_exact_count_and_spares_safe_cell() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        for seed in 0..64 {
            let board = place(config, (4, 4), seed).unwrap();

            assert!(board.mines_placed());
            assert_eq!(board.mine_coords().count(), 10);
            assert!(!board.cell((4, 4)).unwrap().is_mine);
        }
    }

    #[test]
    fn only_the_safe_cell_is_excluded() {
        // one safe cell left means the whole neighborhood of the click is mined
        let config = GameConfig::new((3, 3), 8).unwrap();
        let board = place(config, (1, 1), 7).unwrap();

        assert!(!board.cell((1, 1)).unwrap().is_mine);
        assert_eq!(board.mine_coords().count(), 8);
    }

    #[test]
    fn neighborhood_is_eligible_for_mines() {
        let config = GameConfig::new((5, 5), 12).unwrap();
        let hit_neighbor = (0..64).any(|seed| {
            let board = place(config, (2, 2), seed).unwrap();
            board
                .grid()
                .iter_neighbors((2, 2))
                .any(|pos| board.grid()[pos].is_mine)
        });

        assert!(hit_neighbor);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::expert();
        let a = place(config, (0, 0), 42).unwrap();
        let b = place(config, (0, 0), 42).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn zero_mines_places_nothing() {
        let config = GameConfig::new((4, 4), 0).unwrap();
        let board = place(config, (0, 0), 1).unwrap();

        assert!(board.mines_placed());
        assert_eq!(board.mine_coords().count(), 0);
    }

    #[test]
    fn rejects_second_placement() {
        let mut rng = Pcg64::seed_from_u64(3);
        let mut board = Board::new(GameConfig::beginner());
        let mut placer = RejectionSampler::new(&mut rng);
        placer.place(&mut board, (0, 0)).unwrap();

        assert_eq!(placer.place(&mut board, (0, 0)), Err(GameError::AlreadyPlaced));
        assert_eq!(board.mine_coords().count(), 10);
    }

    #[test]
    fn rejects_out_of_bounds_safe_cell() {
        assert_eq!(
            place(GameConfig::beginner(), (9, 0), 0),
            Err(GameError::OutOfBounds {
                coords: (9, 0),
                size: (9, 9)
            })
        );
    }
}
