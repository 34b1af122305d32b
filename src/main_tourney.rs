// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{error, lexicon, logging, players, rules, server, stats};

struct GameRow {
    strategy: String,
    seed: u64,
    grid: String,
    points: i32,
    correct: usize,
    incorrect: usize,
    duration_ms: u64,
    gave_up: bool,
}

pub fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err("usage: tourney <dictionary> [games] [size]".into());
    }
    let rules = rules::make_standard_rules();
    let num_games = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => 100,
    };
    let size = match args.get(3) {
        Some(s) => s.parse::<usize>()?,
        None => rules.grid_size_default(),
    };
    rules.check_size(size)?;
    let lexicon = lexicon::Lexicon::load(&args[1])?;
    let server = server::Server::new(&rules, &lexicon);
    let num_threads = num_cpus::get();
    let next_seed = std::sync::atomic::AtomicU64::new(1);
    let t0 = std::time::Instant::now();
    tracing::info!(num_threads, num_games, size, "starting tourney");

    let (tx, rx) = std::sync::mpsc::channel::<Result<GameRow, String>>();
    let mut csv_log = csv::Writer::from_path("tourney.csv")?;
    csv_log.serialize((
        "strategy",
        "seed",
        "grid",
        "points",
        "correct",
        "incorrect",
        "duration_ms",
        "gave_up",
    ))?;
    let mut all_stats = std::collections::BTreeMap::<String, stats::ScoreStats>::new();
    std::thread::scope(|s| -> error::Returns<()> {
        for _ in 0..num_threads {
            let tx = tx.clone();
            let (server, lexicon, rules, next_seed) = (&server, &lexicon, &rules, &next_seed);
            s.spawn(move || {
                let mut scan = players::DictionaryScan::new(lexicon, rules.word_length_min());
                let mut walker = players::TrieWalker::new(lexicon, rules.word_length_min());
                loop {
                    let seed = next_seed.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    if seed > num_games {
                        break;
                    }
                    let participants: [&mut dyn server::Participant; 2] = [&mut scan, &mut walker];
                    for participant in participants {
                        let strategy = participant.name().to_string();
                        let row = match server.play(participant, seed, size) {
                            Ok(result) => Ok(result),
                            Err(server::PlayError::Turn { result, .. }) => Ok(*result),
                            Err(e) => Err(e.to_string()),
                        }
                        .map(|result| GameRow {
                            strategy,
                            seed,
                            grid: result.grid().rows().collect::<Vec<_>>().join("/"),
                            points: result.points(),
                            correct: result.num_correct(),
                            incorrect: result.num_incorrect(),
                            duration_ms: result.duration().as_millis() as u64,
                            gave_up: result.is_catastrophe(),
                        });
                        if tx.send(row).is_err() {
                            return;
                        }
                    }
                }
            });
        }
        drop(tx);

        for row in rx.iter() {
            let row = row.map_err(error::new)?;
            csv_log.serialize((
                &row.strategy,
                row.seed,
                &row.grid,
                row.points,
                row.correct,
                row.incorrect,
                row.duration_ms,
                row.gave_up,
            ))?;
            all_stats
                .entry(row.strategy)
                .or_default()
                .update_game(row.points, row.gave_up);
        }
        Ok(())
    })?;
    csv_log.flush()?;

    for (strategy, stats) in &all_stats {
        println!("{:>5}: {}", strategy, stats);
    }
    println!("{} games in {:?}", num_games, t0.elapsed());
    Ok(())
}
