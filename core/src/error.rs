use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board dimensions must be at least 1x1")]
    ZeroDimension,
    #[error("Too many mines, requested {mines} but the board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates {coords:?} are outside of a {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Mines were already placed on this board")]
    AlreadyPlaced,
}

pub type Result<T> = core::result::Result<T, GameError>;
