// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{display, error, grid, logging, rules};

pub fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    let rules = rules::make_standard_rules();
    let size = match args.get(1) {
        Some(s) => s.parse::<usize>()?,
        None => rules.grid_size_default(),
    };
    let seed = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => 0,
    };
    let grid = grid::Grid::generate(&rules, seed, size)?;
    println!("grid {} seed {}", grid.id(), grid.seed());
    println!("{}", grid);
    display::print_grid(&grid);
    print!("{}", display::neighbor_dump(&grid));
    Ok(())
}
