// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{
    display, error, grid, lexicon, logging, return_error, rules, server, session,
};

struct Human {
    id: session::ParticipantId,
    rl: rustyline::DefaultEditor,
}

impl Human {
    fn new() -> error::Returns<Self> {
        Ok(Self {
            id: session::ParticipantId::next(),
            rl: rustyline::DefaultEditor::new()?,
        })
    }
}

impl server::Participant for Human {
    fn id(&self) -> session::ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        "human"
    }

    fn start_turn(&mut self) {
        println!("enter words, :board to see the grid again, :quit when done");
    }

    fn solve(&mut self, grid: &grid::Grid, scorer: &server::Scorer<'_, '_>) -> error::Returns<()> {
        display::print_grid(grid);
        loop {
            let line = match self.rl.readline(">> ") {
                Ok(line) => {
                    self.rl.add_history_entry(line.as_str())?;
                    line
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => return Err(err.into()),
            };
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            for word in strings {
                match word.as_str() {
                    ":quit" => return Ok(()),
                    ":board" => display::print_grid(grid),
                    ":total" => println!("{}", scorer.running_total()?),
                    ":give-up" => {
                        return_error!("gave up".into());
                    }
                    _ if word.starts_with(':') => println!("unknown command {}", word),
                    _ => {
                        let points = scorer.score(&word)?;
                        println!("{:>4} {}", points, word.to_lowercase());
                    }
                }
            }
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err("usage: shell <dictionary> [seed] [size]".into());
    }
    let rules = rules::make_standard_rules();
    let seed = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => 0,
    };
    let size = match args.get(3) {
        Some(s) => s.parse::<usize>()?,
        None => rules.grid_size_default(),
    };
    rules.check_size(size)?;
    let lexicon = lexicon::Lexicon::load(&args[1])?;
    let server = server::Server::new(&rules, &lexicon);
    let mut human = Human::new()?;
    // a failed turn still reports its penalized result before the error.
    let (result, failure) = match server.play(&mut human, seed, size) {
        Ok(result) => (result, None),
        Err(e) => match e.into_parts() {
            (Some(result), source) => (result, Some(source)),
            (None, source) => return Err(source),
        },
    };
    display::print_result(&result);
    match failure {
        Some(source) => Err(source),
        None => Ok(()),
    }
}
