/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Row-major storage index, `(x, y)` lands at `[y, x]` so the flat offset is `y * width + x`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Number of cells on a board of `size`.
pub const fn area((width, height): Coord2) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

/// Whether `coords` lies inside a board of `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

// row above, same row, row below; the center is never yielded
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn shifted((x, y): Coord2, (dx, dy): (i8, i8), size: Coord2) -> Option<Coord2> {
    let x = x.checked_add_signed(dx).filter(|&x| x < size.0)?;
    let y = y.checked_add_signed(dy).filter(|&y| y < size.1)?;
    Some((x, y))
}

/// Up to eight cells touching `center`, cut off at the board edge.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    next: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            next: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = shifted(self.center, offset, self.size) {
                return Some(coords);
            }
        }
        None
    }
}
