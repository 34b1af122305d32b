// Copyright (C) 2020-2026 Andy Kurnia.

use super::{grid, matrix};

pub type Path = Vec<matrix::Cell>;

// Grows every candidate path one letter at a time, in lockstep, and returns
// the first one that spells the whole word. A cell may appear at most once in
// a path. The live set can get large on grids with many repeated letters.
pub fn find_path(grid: &grid::Grid, word: &str) -> Option<Path> {
    let word = word.as_bytes();
    let first = word.first()?.to_ascii_lowercase();
    let letters = grid.letters();
    let adjacency = grid.adjacency();

    let mut paths = (0..letters.len())
        .filter(|&idx| letters[idx] == first)
        .map(|idx| vec![idx as u16])
        .collect::<Vec<_>>();
    let mut next_paths = Vec::new();
    for &c in &word[1..] {
        if paths.is_empty() {
            return None;
        }
        let c = c.to_ascii_lowercase();
        next_paths.clear();
        for path in &paths {
            let last = path[path.len() - 1] as usize;
            for &next in adjacency.of(last) {
                if letters[next as usize] == c && !path.contains(&next) {
                    let mut new_path = Vec::with_capacity(word.len());
                    new_path.extend_from_slice(path);
                    new_path.push(next);
                    next_paths.push(new_path);
                }
            }
        }
        std::mem::swap(&mut paths, &mut next_paths);
    }

    let dim = grid.dim();
    paths.into_iter().next().map(|path| {
        path.into_iter()
            .map(|idx| dim.cell(idx as usize))
            .collect()
    })
}

pub fn spells(grid: &grid::Grid, path: &[matrix::Cell]) -> String {
    path.iter()
        .map(|&cell| grid.letter_at(cell) as char)
        .collect()
}

// simple and adjacent, regardless of what it spells.
pub fn is_valid(grid: &grid::Grid, path: &[matrix::Cell]) -> bool {
    let dim = grid.dim();
    if !path.iter().all(|&cell| dim.contains(cell)) {
        return false;
    }
    for (i, cell) in path.iter().enumerate() {
        if path[..i].contains(cell) {
            return false;
        }
    }
    path.windows(2)
        .all(|w| grid.adjacency().are_adjacent(dim.at(w[0]), dim.at(w[1])))
}
