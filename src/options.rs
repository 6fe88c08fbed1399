use std::path::PathBuf;

use packsearch::Heuristic;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Finds the tightest atlas layout for a set of rectangles")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack the rects from a job file, trying each configured heuristic and
    /// keeping the layout with the smallest bounding area. Prints a JSON report
    /// to stdout unless --output is given.
    Pack(PackOptions),

    /// Print the order a single heuristic ranks the rects from a job file in,
    /// along with each rect's sort key.
    Rank(RankOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The path to the job file to pack.
    pub job: PathBuf,

    /// Heuristics to try instead of the ones named in the job file. Can be
    /// given more than once.
    ///
    /// Options: area, perimeter, bigger-side, width, height, pathological
    #[structopt(long = "heuristic")]
    pub heuristics: Vec<Heuristic>,

    /// Run one thread per heuristic. The result is the same either way.
    #[structopt(long)]
    pub parallel: bool,

    /// Where to write the JSON report.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct RankOptions {
    /// The path to the job file to rank.
    pub job: PathBuf,

    /// The heuristic to rank by.
    #[structopt(long)]
    pub heuristic: Heuristic,
}
