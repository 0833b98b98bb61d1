#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use flag::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;

mod board;
mod cell;
mod counter;
mod engine;
mod error;
mod flag;
mod generator;
mod grid;
mod reveal;
mod types;

/// Resolved board dimensions and mine count. Always satisfies
/// `width >= 1`, `height >= 1` and `mines < width * height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Ok(Self::validate(size, mines)?)
    }

    fn validate(size: Coord2, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        let cells = area(size);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells });
        }
        Ok(Self { size, mines })
    }

    pub const fn beginner() -> Self {
        Self {
            size: (9, 9),
            mines: 10,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            size: (16, 16),
            mines: 40,
        }
    }

    pub const fn expert() -> Self {
        Self {
            size: (30, 16),
            mines: 99,
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Unvalidated wire shape of [`GameConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
struct RawGameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> core::result::Result<Self, Self::Error> {
        Self::validate((raw.width, raw.height), raw.mines)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            width: config.width(),
            height: config.height(),
            mines: config.mines(),
        }
    }
}
