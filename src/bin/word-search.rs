use anyhow::{bail, Context};
use indicatif::ProgressStyle;
use tracing::{Level, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use word_search::{
    count_cross_in_row, count_linear_in_row, par_count_cross, par_count_linear, parse_grid, Grid,
};

const USAGE: &str = "usage: word-search <INPUT> [WORD] [CROSS_WORD] [--parallel]";

#[derive(Debug)]
struct Args {
    input: String,
    word: Vec<char>,
    cross_word: Vec<char>,
    parallel: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let (flags, positional): (Vec<_>, Vec<_>) = args.partition(|arg| arg.starts_with("--"));
    let parallel = match flags.as_slice() {
        [] => false,
        [flag] if flag == "--parallel" => true,
        _ => bail!("unknown flags {flags:?}\n{USAGE}"),
    };
    let (input, word, cross_word) = match positional.as_slice() {
        [input] => (input, "XMAS", "MAS"),
        [input, word] => (input, word.as_str(), "MAS"),
        [input, word, cross_word] => (input, word.as_str(), cross_word.as_str()),
        _ => bail!(USAGE),
    };
    Ok(Args {
        input: input.clone(),
        word: word.chars().collect(),
        cross_word: cross_word.chars().collect(),
        parallel,
    })
}

fn main() -> anyhow::Result<()> {
    word_search::init_tracing()?;
    let args = parse_args(std::env::args().skip(1))?;
    tracing::debug!(?args);

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;
    let grid = parse_grid(&text).with_context(|| format!("parsing {}", args.input))?;
    tracing::info!(height = grid.height(), width = grid.width(), "grid loaded");

    let (linear, cross) = if args.parallel {
        (
            par_count_linear(&grid, &args.word),
            par_count_cross(&grid, &args.cross_word),
        )
    } else {
        scan(&grid, &args)?
    };
    tracing::info!(linear, cross);
    Ok(())
}

fn scan(grid: &Grid<char>, args: &Args) -> anyhow::Result<(usize, usize)> {
    let span = tracing::span!(Level::INFO, "scan");
    span.pb_set_style(&ProgressStyle::default_bar().template("{elapsed} {bar} {pos:>7}/{len:7}")?);
    span.pb_set_length(grid.height() as u64);
    let _span = span.enter();

    Ok((0..grid.height())
        .map(|row| {
            Span::current().pb_inc(1);
            (
                count_linear_in_row(grid, &args.word, row),
                count_cross_in_row(grid, &args.cross_word, row),
            )
        })
        .fold((0, 0), |(linear, cross), (l, c)| (linear + l, cross + c)))
}
