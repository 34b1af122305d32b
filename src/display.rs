// Copyright (C) 2020-2026 Andy Kurnia.

use super::{grid, result};

fn print_column_labels(cols: u8) {
    print!("  ");
    for c in 0..cols {
        print!(" {}", c);
    }
    println!();
}

fn print_rule(cols: u8) {
    print!("  +");
    for _ in 1..cols {
        print!("--");
    }
    println!("-+");
}

pub fn print_grid(grid: &grid::Grid) {
    let dim = grid.dim();
    print_column_labels(dim.cols);
    print_rule(dim.cols);
    for (r, row) in grid.rows().enumerate() {
        print!("{:2}|", r);
        for (c, letter) in row.chars().enumerate() {
            if c > 0 {
                print!(" ")
            }
            print!("{}", letter.to_ascii_uppercase());
        }
        println!("|{}", r);
    }
    print_rule(dim.cols);
    print_column_labels(dim.cols);
}

// one line per cell: its coordinates, letter and neighbors.
pub fn neighbor_dump(grid: &grid::Grid) -> String {
    let dim = grid.dim();
    let mut s = String::new();
    for idx in 0..dim.len() {
        let cell = dim.cell(idx);
        s.push_str(&format!("{} {}:", cell, grid.letters()[idx] as char));
        for neighbor in grid.adjacency().of_cell(cell) {
            s.push_str(&format!(" {}", neighbor));
        }
        s.push('\n');
    }
    s
}

pub fn summary(result: &result::GridResult) -> String {
    format!(
        "{} points, {} correct, {} incorrect{}, {:.3}s",
        result.points(),
        result.num_correct(),
        result.num_incorrect(),
        if result.is_catastrophe() {
            ", gave up"
        } else {
            ""
        },
        result.duration().as_secs_f64()
    )
}

pub fn print_result(result: &result::GridResult) {
    for (word, points) in result.sorted_words() {
        println!("{:>4} {}", points, word);
    }
    println!("{}", summary(result));
}
