use raffle_draw::entry::{read_entries, Entry};
use raffle_draw::parameters::{get_and_check_options, Parameters};
use raffle_draw::random_source::{OsEntropy, RandomSource, SeededSource};
use raffle_draw::report::{report_counts, win_counts};
use raffle_draw::sampler::draw;

use std::fs::File;
use std::io::{stdin, stdout, BufReader};
use std::time::Instant;

fn execute(rng: &mut impl RandomSource, entries: &[Entry], opt: &Parameters) {
    let runtime = if opt.report_win_frequencies {
        let mut winner_ids = Vec::with_capacity(opt.trials * opt.winners);

        let start = Instant::now();
        for _ in 0..opt.trials {
            winner_ids.extend(draw(entries, opt.winners, rng).into_iter().map(|e| e.id));
        }
        let duration = start.elapsed();

        report_counts(&win_counts(winner_ids.into_iter()), &mut stdout().lock()).unwrap();

        duration
    } else {
        let start = Instant::now();
        let winners = draw(entries, opt.winners, rng);
        let duration = start.elapsed();

        for (rank, winner) in winners.iter().enumerate() {
            println!("{:>3} {}", rank + 1, winner.id);
        }

        duration
    };

    println!("runtime_s:{}", runtime.as_secs_f64());
}

fn main() {
    let opt = get_and_check_options();

    let entries = match &opt.input {
        Some(path) => read_entries(BufReader::new(File::open(path).unwrap())),
        None => read_entries(stdin().lock()),
    }
    .unwrap();

    match opt.seed_value {
        Some(seed) => execute(&mut SeededSource::new(seed), &entries, &opt),
        None => execute(&mut OsEntropy, &entries, &opt),
    };
}
