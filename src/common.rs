//! Word search over rectangular symbol grids.
//!
//! Two counting rules are supported: straight runs in any of the eight
//! compass directions ([`count_linear`]) and crossed diagonals centered on
//! a cell ([`count_cross`]).

use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod direction;
pub mod grid;
pub mod parse;
pub mod search;

pub use direction::{Direction, COMPASS, DIAGONALS};
pub use grid::{Grid, GridError};
pub use parse::{parse_grid, ParseError};
pub use search::{
    count_cross, count_cross_in_row, count_linear, count_linear_in_row, count_linear_with,
    par_count_cross, par_count_linear,
};

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .with(env_filter)
        .init();
    Ok(())
}
