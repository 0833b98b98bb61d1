use alloc::vec::Vec;
use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Init -> Playing (first reveal lays the mines)
/// - Playing -> Won
/// - Playing -> Lost
///
/// `reset` returns to `Init` from any state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No mines placed yet
    Init,
    /// Mines placed, session live
    Playing,
    /// Every safe cell revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Init)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Init
    }
}

/// Coarse result reported to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl From<GameState> for Outcome {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Init | GameState::Playing => Self::Playing,
            GameState::Won => Self::Won,
            GameState::Lost => Self::Lost,
        }
    }
}

/// Represents a game from first click to win or loss.
///
/// Generic over the random source used to lay the mines so tests can inject
/// a seeded one.
#[derive(Clone, Debug)]
pub struct GameSession<R = Pcg64> {
    config: GameConfig,
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
    rng: R,
}

impl GameSession<Pcg64> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        log::debug!("New session {:?}", config);
        Self {
            config,
            board: Board::new(config),
            state: Default::default(),
            triggered_mine: None,
            rng,
        }
    }

    /// Session over an existing board. A board whose mines are already laid
    /// starts in `Playing`, so its layout is kept as is.
    pub fn from_board(board: Board, rng: R) -> Self {
        let state = if board.mines_placed() {
            GameState::Playing
        } else {
            GameState::Init
        };
        Self {
            config: board.game_config(),
            board,
            state,
            triggered_mine: None,
            rng,
        }
    }

    /// Discards the current board and starts over in `Init`, keeping the random source.
    pub fn reset(&mut self, config: GameConfig) {
        log::debug!("Reset session {:?}", config);
        self.config = config;
        self.board = Board::new(config);
        self.state = GameState::Init;
        self.triggered_mine = None;
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn result(&self) -> Outcome {
        self.state.into()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The mine whose reveal lost the game
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn remaining_mine_count(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flag_count() as isize)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.board.cell(coords)?;
        Ok(if self.triggered_mine == Some(coords) {
            CellView::Exploded
        } else {
            cell.view()
        })
    }

    /// Reveal input. Lays the mines on the first one, and ends the game on a
    /// mine or once every safe cell is open. Inputs that cannot act are no-ops.
    pub fn handle_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_terminal() {
            return RevealOutcome::default();
        }

        let Ok(cell) = self.board.cell(coords) else {
            return RevealOutcome::default();
        };
        if !cell.is_revealable() {
            return RevealOutcome::default();
        }

        if self.state.is_initial() {
            if let Err(err) = self.start(coords) {
                log::warn!("Could not start session at {:?}: {}", coords, err);
                return RevealOutcome::default();
            }
        }

        let mut outcome = self.board.reveal(coords);
        if outcome.triggered_mine {
            outcome.exposed_mines = self.mark_lost(coords);
        } else if self.board.is_cleared() {
            self.mark_won();
        }
        outcome
    }

    pub fn handle_flag_toggle(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_terminal() {
            return FlagOutcome::Ignored;
        }
        self.board.toggle_flag(coords)
    }

    fn start(&mut self, safe_cell: Coord2) -> Result<()> {
        RejectionSampler::new(&mut self.rng).place(&mut self.board, safe_cell)?;
        self.board.compute_counts();
        self.state = GameState::Playing;
        log::debug!("Session started at {:?}", safe_cell);
        Ok(())
    }

    fn mark_won(&mut self) {
        self.state = GameState::Won;
        log::debug!("Session won");
    }

    /// Ends the game and uncovers every mine that is not flagged.
    fn mark_lost(&mut self, coords: Coord2) -> Vec<Coord2> {
        self.state = GameState::Lost;
        self.triggered_mine = Some(coords);

        let mut exposed = Vec::new();
        for pos in self.board.grid().coords() {
            let cell = &mut self.board.grid_mut()[pos];
            if cell.is_mine && !cell.is_flagged && !cell.is_revealed {
                cell.is_revealed = true;
                exposed.push(pos);
            }
        }
        log::debug!(
            "Session lost at {:?}, exposed {} more mines",
            coords,
            exposed.len()
        );
        exposed
    }
}
