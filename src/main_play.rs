// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{display, error, lexicon, logging, players, result, return_error, rules, server};

enum Output {
    Text,
    Json,
    Csv,
}

fn parse_or<T: std::str::FromStr>(arg: Option<&String>, default: T) -> error::Returns<T>
where
    T::Err: std::fmt::Display,
{
    match arg {
        Some(s) => s.parse().map_err(|e| {
            error::BoxAnyError::from(error::new(format!("invalid argument {:?}: {}", s, e)))
        }),
        None => Ok(default),
    }
}

pub fn main() -> error::Returns<()> {
    logging::init();
    let mut output = Output::Text;
    let mut args = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => output = Output::Json,
            "--csv" => output = Output::Csv,
            _ => args.push(arg),
        }
    }
    if args.is_empty() {
        return Err("usage: play <dictionary> [seed] [size] [scan|trie] [--json|--csv]".into());
    }
    let rules = rules::make_standard_rules();
    let seed = parse_or(args.get(1), 0u64)?;
    let size = parse_or(args.get(2), rules.grid_size_default())?;
    rules.check_size(size)?;
    let lexicon = lexicon::Lexicon::load(&args[0])?;
    let mut participant: Box<dyn server::Participant> =
        match args.get(3).map(|s| s.as_str()).unwrap_or("trie") {
            "scan" => Box::new(players::DictionaryScan::new(
                &lexicon,
                rules.word_length_min(),
            )),
            "trie" => Box::new(players::TrieWalker::new(&lexicon, rules.word_length_min())),
            other => {
                return_error!(format!("unknown strategy {:?}", other));
            }
        };

    let server = server::Server::new(&rules, &lexicon);
    // a failed turn still reports its penalized result before the error.
    let (result, failure) = match server.play(participant.as_mut(), seed, size) {
        Ok(result) => (result, None),
        Err(e) => match e.into_parts() {
            (Some(result), source) => (result, Some(source)),
            (None, source) => return Err(source),
        },
    };

    match output {
        Output::Text => {
            display::print_grid(result.grid());
            display::print_result(&result);
        }
        Output::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&result::JsonResult::from(&result))?
            );
        }
        Output::Csv => {
            result::write_csv(&result, std::io::stdout().lock())?;
        }
    }
    match failure {
        Some(source) => Err(source),
        None => Ok(()),
    }
}
