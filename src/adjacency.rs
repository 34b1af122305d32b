// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

// neighbors of every cell, flattened. cell i owns
// neighbors[offsets[i]..offsets[i + 1]], in row-major order of the 3x3 window.
pub struct Adjacency {
    dim: matrix::Dim,
    offsets: Box<[u32]>,
    neighbors: Box<[u16]>,
}

impl Adjacency {
    pub fn new(dim: matrix::Dim) -> Self {
        let mut offsets = Vec::with_capacity(dim.len() + 1);
        let mut neighbors = Vec::with_capacity(dim.len() * 8);
        offsets.push(0);
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                let row_min = row.saturating_sub(1);
                let row_max = std::cmp::min(dim.rows - 1, row + 1);
                let col_min = col.saturating_sub(1);
                let col_max = std::cmp::min(dim.cols - 1, col + 1);
                for next_row in row_min..=row_max {
                    for next_col in col_min..=col_max {
                        if next_row == row && next_col == col {
                            continue;
                        }
                        neighbors.push(dim.at_row_col(next_row, next_col) as u16);
                    }
                }
                offsets.push(neighbors.len() as u32);
            }
        }
        Self {
            dim,
            offsets: offsets.into_boxed_slice(),
            neighbors: neighbors.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn of(&self, idx: usize) -> &[u16] {
        &self.neighbors[self.offsets[idx] as usize..self.offsets[idx + 1] as usize]
    }

    pub fn of_cell(&self, cell: matrix::Cell) -> impl Iterator<Item = matrix::Cell> + '_ {
        self.of(self.dim.at(cell))
            .iter()
            .map(move |&idx| self.dim.cell(idx as usize))
    }

    #[inline(always)]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.of(a).contains(&(b as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric() {
        for size in 1..=6 {
            let adj = Adjacency::new(matrix::Dim::square(size));
            let n = adj.dim().len();
            for a in 0..n {
                for b in 0..n {
                    assert_eq!(adj.are_adjacent(a, b), adj.are_adjacent(b, a));
                }
                assert!(!adj.are_adjacent(a, a));
            }
        }
    }

    #[test]
    fn neighbor_counts() {
        for size in 3..=6u8 {
            let dim = matrix::Dim::square(size);
            let adj = Adjacency::new(dim);
            for row in 0..size {
                for col in 0..size {
                    let on_row_edge = row == 0 || row == size - 1;
                    let on_col_edge = col == 0 || col == size - 1;
                    let expected = match (on_row_edge, on_col_edge) {
                        (true, true) => 3,
                        (true, false) | (false, true) => 5,
                        (false, false) => 8,
                    };
                    assert_eq!(adj.of(dim.at_row_col(row, col)).len(), expected);
                }
            }
        }
    }

    #[test]
    fn large_dims_keep_their_offsets() {
        // more than u16::MAX neighbor entries in total.
        let dim = matrix::Dim::square(100);
        let adj = Adjacency::new(dim);
        let total = (0..dim.len()).map(|idx| adj.of(idx).len()).sum::<usize>();
        assert!(total > u16::MAX as usize);
        assert_eq!(adj.of(dim.len() - 1).len(), 3);
        assert_eq!(adj.of(dim.at_row_col(50, 50)).len(), 8);
        assert!(adj.are_adjacent(dim.at_row_col(99, 98), dim.len() - 1));
    }

    #[test]
    fn window_order() {
        let adj = Adjacency::new(matrix::Dim::square(4));
        let got = adj.of_cell(matrix::Cell::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                matrix::Cell::new(0, 0),
                matrix::Cell::new(0, 1),
                matrix::Cell::new(0, 2),
                matrix::Cell::new(1, 0),
                matrix::Cell::new(1, 2),
                matrix::Cell::new(2, 0),
                matrix::Cell::new(2, 1),
                matrix::Cell::new(2, 2),
            ]
        );
    }
}
