use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "raffle-draw",
    about = "Draws weighted raffle winners without replacement"
)]
pub struct Parameters {
    /// Entry list with one `identifier[<TAB or ,>weight]` per line; stdin if omitted
    #[structopt(short = "f", long, parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Number of winners to draw
    #[structopt(short = "w", long, default_value = "1")]
    pub winners: usize,

    /// Use a seeded generator instead of the operating system's entropy pool
    #[structopt(short = "s", long)]
    pub seed_value: Option<u64>,

    /// Repeat the draw and report per-entry win frequencies instead of winners
    #[structopt(short = "r", long)]
    pub report_win_frequencies: bool,

    /// Number of repeated draws in frequency-report mode
    #[structopt(short = "t", long, default_value = "1000")]
    pub trials: usize,
}

pub fn get_and_check_options() -> Parameters {
    let opt = Parameters::from_args();

    assert!(opt.trials >= 1);

    opt
}
