// Copyright (C) 2020-2026 Andy Kurnia.

// cells are addressed either as (row, col) or by row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: u8,
    pub cols: u8,
}

impl Dim {
    #[inline(always)]
    pub fn square(size: u8) -> Self {
        Self {
            rows: size,
            cols: size,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: u8, col: u8) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    #[inline(always)]
    pub fn at(&self, cell: Cell) -> usize {
        self.at_row_col(cell.row, cell.col)
    }

    #[inline(always)]
    pub fn cell(&self, idx: usize) -> Cell {
        Cell {
            row: (idx / self.cols as usize) as u8,
            col: (idx % self.cols as usize) as u8,
        }
    }

    #[inline(always)]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_cell_agree() {
        let dim = Dim::square(5);
        for idx in 0..dim.len() {
            assert_eq!(dim.at(dim.cell(idx)), idx);
        }
        assert_eq!(dim.cell(7), Cell::new(1, 2));
        assert!(!dim.contains(Cell::new(5, 0)));
    }
}
