use nom::{
    character::complete::{line_ending, not_line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    IResult,
};
use thiserror::Error;

use crate::grid::{Grid, GridError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed grid text: {0}")]
    Syntax(String),
    #[error(transparent)]
    Shape(#[from] GridError),
}

fn parse_rows(input: &str) -> IResult<&str, Vec<Vec<char>>> {
    all_consuming(separated_list1(
        line_ending,
        map(not_line_ending, |line: &str| line.chars().collect()),
    ))(input)
}

/// Reads one row of symbols per line. Trailing line breaks are ignored and
/// blank input gives the empty grid. Spaces are symbols like any other.
pub fn parse_grid(input: &str) -> Result<Grid<char>, ParseError> {
    let input = input.trim_end_matches(['\r', '\n']);
    if input.is_empty() {
        return Ok(Grid::empty());
    }
    let (_, rows) = parse_rows(input).map_err(|e| ParseError::Syntax(e.to_string()))?;
    Ok(Grid::new(rows)?)
}
