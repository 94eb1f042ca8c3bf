/// Unit step as `(d_row, d_col)`.
pub type Direction = (isize, isize);

/// The eight compass directions walked by linear search.
pub const COMPASS: [Direction; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Base vectors of the two arms of a cross. Each is walked in both senses
/// from the center.
pub const DIAGONALS: [Direction; 2] = [(1, 1), (1, -1)];

/// Coordinate reached after `distance` steps along `direction`.
pub fn step(
    (row, col): (isize, isize),
    (d_row, d_col): Direction,
    distance: isize,
) -> (isize, isize) {
    (row + d_row * distance, col + d_col * distance)
}

pub fn negate((d_row, d_col): Direction) -> Direction {
    (-d_row, -d_col)
}
