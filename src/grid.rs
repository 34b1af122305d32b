// Copyright (C) 2020-2026 Andy Kurnia.

use super::{adjacency, dice, error, matrix, rules};
use rand::prelude::*;

// largest grid from_rows accepts. keeps the enumerator's recursion shallow.
pub const MAX_FIXED_SIZE: usize = 16;

static NEXT_GRID_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(pub u64);

impl GridId {
    fn next() -> Self {
        Self(NEXT_GRID_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Grid {
    id: GridId,
    seed: u64, // 0 if not reproducible
    letters: Box<[u8]>,
    adjacency: adjacency::Adjacency,
}

impl Grid {
    // seed 0 asks for a fresh os-seeded rng.
    pub fn generate(rules: &rules::Rules, seed: u64, size: usize) -> error::Returns<Self> {
        if size < rules.grid_size_min() || size > rules.grid_size_max() {
            return Err(error::GridError::InvalidSize {
                size,
                min: rules.grid_size_min(),
                max: rules.grid_size_max(),
            }
            .into());
        }
        let mut rng = if seed == 0 {
            rand_chacha::ChaCha20Rng::from_os_rng()
        } else {
            rand_chacha::ChaCha20Rng::seed_from_u64(seed)
        };
        let dim = matrix::Dim::square(size as u8);
        let mut pool = dice::DicePool::new(rules.dice(), dim.len())?;
        let mut letters = Vec::with_capacity(dim.len());
        for _ in 0..dim.len() {
            let die = pool.draw(&mut rng).ok_or("dice pool ran out")?;
            letters.push(die.roll(&mut rng));
        }
        Ok(Self::new(seed, dim, letters.into_boxed_slice()))
    }

    // for fixed boards. any square up to MAX_FIXED_SIZE is accepted here, the
    // rules' size bounds only apply to generate.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> error::Returns<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_FIXED_SIZE {
            return_error!(format!("cannot build a grid with {} rows", size));
        }
        let mut letters = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return_error!(format!(
                    "row {:?} has length {}, expected {}",
                    row,
                    row.len(),
                    size
                ));
            }
            for c in row.bytes() {
                if !c.is_ascii_alphabetic() {
                    return_error!(format!("invalid letter {:?} in row {:?}", c as char, row));
                }
                letters.push(c.to_ascii_lowercase());
            }
        }
        Ok(Self::new(
            0,
            matrix::Dim::square(size as u8),
            letters.into_boxed_slice(),
        ))
    }

    fn new(seed: u64, dim: matrix::Dim, letters: Box<[u8]>) -> Self {
        Self {
            id: GridId::next(),
            seed,
            letters,
            adjacency: adjacency::Adjacency::new(dim),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> GridId {
        self.id
    }

    #[inline(always)]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.adjacency.dim().rows as usize
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.adjacency.dim()
    }

    #[inline(always)]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline(always)]
    pub fn letter_at(&self, cell: matrix::Cell) -> u8 {
        self.letters[self.dim().at(cell)]
    }

    #[inline(always)]
    pub fn adjacency(&self) -> &adjacency::Adjacency {
        &self.adjacency
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        // letters are always ascii.
        self.letters
            .chunks(self.size())
            .map(|row| std::str::from_utf8(row).unwrap_or_default())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
