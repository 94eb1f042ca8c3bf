use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::instrument;

use crate::{
    direction::{step, Direction, COMPASS, DIAGONALS},
    grid::Grid,
};

/// Counts every straight run of `word` in the eight compass directions.
///
/// Overlapping runs are counted separately and runs never wrap around an
/// edge. A one-symbol word matches once per direction at each equal cell.
#[instrument(level = "debug", skip_all, fields(height = grid.height(), width = grid.width(), len = word.len()), ret)]
pub fn count_linear<T: PartialEq>(grid: &Grid<T>, word: &[T]) -> usize {
    count_linear_with(grid, word, &COMPASS)
}

/// Linear search over an arbitrary direction table.
pub fn count_linear_with<T: PartialEq>(
    grid: &Grid<T>,
    word: &[T],
    directions: &[Direction],
) -> usize {
    (0..grid.height())
        .map(|row| linear_in_row(grid, word, directions, row))
        .sum()
}

pub fn count_linear_in_row<T: PartialEq>(grid: &Grid<T>, word: &[T], row: usize) -> usize {
    linear_in_row(grid, word, &COMPASS, row)
}

fn linear_in_row<T: PartialEq>(
    grid: &Grid<T>,
    word: &[T],
    directions: &[Direction],
    row: usize,
) -> usize {
    if word.is_empty() {
        return 0;
    }
    (0..grid.width())
        .map(|col| {
            let start = (row as isize, col as isize);
            directions
                .iter()
                .filter(|&&dir| spells(grid, word, start, dir))
                .inspect(|dir| tracing::trace!(?start, ?dir, "linear match"))
                .count()
        })
        .sum()
}

fn spells<T: PartialEq>(
    grid: &Grid<T>,
    word: &[T],
    start: (isize, isize),
    dir: Direction,
) -> bool {
    for (i, symbol) in word.iter().enumerate() {
        let (row, col) = step(start, dir, i as isize);
        if !grid.in_bounds(row, col) || grid.symbol_at(row, col) != symbol {
            return false;
        }
    }
    true
}

/// Counts cells at the center of an X whose two diagonal arms each spell
/// `word` through that cell, forwards or backwards.
///
/// Even-length words have no center and always yield 0.
#[instrument(level = "debug", skip_all, fields(height = grid.height(), width = grid.width(), len = word.len()), ret)]
pub fn count_cross<T: PartialEq>(grid: &Grid<T>, word: &[T]) -> usize {
    if word.len() % 2 == 0 {
        return 0;
    }
    (0..grid.height())
        .map(|row| count_cross_in_row(grid, word, row))
        .sum()
}

pub fn count_cross_in_row<T: PartialEq>(grid: &Grid<T>, word: &[T], row: usize) -> usize {
    if word.len() % 2 == 0 {
        return 0;
    }
    (0..grid.width())
        .filter(|&col| is_cross(grid, word, (row as isize, col as isize)))
        .inspect(|col| tracing::trace!(row, col, "cross match"))
        .count()
}

fn is_cross<T: PartialEq>(grid: &Grid<T>, word: &[T], center: (isize, isize)) -> bool {
    let half = word.len() / 2;
    if *grid.symbol_at(center.0, center.1) != word[half] {
        return false;
    }

    let mut matched = 1;
    for dir in DIAGONALS {
        for distance in 1..=half {
            let (fwd_row, fwd_col) = step(center, dir, distance as isize);
            let (bwd_row, bwd_col) = step(center, dir, -(distance as isize));
            if !grid.in_bounds(fwd_row, fwd_col) || !grid.in_bounds(bwd_row, bwd_col) {
                break;
            }
            let fwd = grid.symbol_at(fwd_row, fwd_col);
            let bwd = grid.symbol_at(bwd_row, bwd_col);
            let (outer, inner) = (&word[half + distance], &word[half - distance]);
            if (fwd == outer && bwd == inner) || (fwd == inner && bwd == outer) {
                matched += 1;
            } else {
                break;
            }
        }
    }
    matched == word.len()
}

/// [`count_linear`] with rows evaluated on the rayon pool.
pub fn par_count_linear<T: PartialEq + Sync>(grid: &Grid<T>, word: &[T]) -> usize {
    (0..grid.height())
        .into_par_iter()
        .map(|row| count_linear_in_row(grid, word, row))
        .sum()
}

/// [`count_cross`] with rows evaluated on the rayon pool.
pub fn par_count_cross<T: PartialEq + Sync>(grid: &Grid<T>, word: &[T]) -> usize {
    (0..grid.height())
        .into_par_iter()
        .map(|row| count_cross_in_row(grid, word, row))
        .sum()
}
