// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dice, error};

pub const GRID_SIZE_MIN: usize = 4;
pub const GRID_SIZE_MAX: usize = 5;
pub const GRID_SIZE_DEFAULT: usize = 5;

pub const WORD_LENGTH_MIN: usize = 4;
pub const WORD_LENGTH_MAX: usize = 8;
pub const INCORRECT_WORD_SCORE: i32 = -5;
pub const CATASTROPHIC_SCORE: i32 = -50;

// indexed by clamped word length.
static STANDARD_SCORING_TABLE: &[i32] = &[
    INCORRECT_WORD_SCORE,
    INCORRECT_WORD_SCORE,
    INCORRECT_WORD_SCORE,
    INCORRECT_WORD_SCORE,
    1,  // 4
    2,  // 5
    3,  // 6
    5,  // 7
    11, // 8
];

pub struct StaticRules<'a> {
    dice: &'a [dice::Die],
    grid_size_min: usize,
    grid_size_max: usize,
    grid_size_default: usize,
    word_length_min: usize,
    scoring_table: &'a [i32], // len = max word length + 1
    incorrect_word_score: i32,
    catastrophic_score: i32,
}

pub enum Rules<'a> {
    Static(StaticRules<'a>),
}

impl<'a> Rules<'a> {
    #[inline(always)]
    pub fn dice(&self) -> &'a [dice::Die] {
        match self {
            Rules::Static(x) => x.dice,
        }
    }

    #[inline(always)]
    pub fn grid_size_min(&self) -> usize {
        match self {
            Rules::Static(x) => x.grid_size_min,
        }
    }

    #[inline(always)]
    pub fn grid_size_max(&self) -> usize {
        match self {
            Rules::Static(x) => x.grid_size_max,
        }
    }

    #[inline(always)]
    pub fn grid_size_default(&self) -> usize {
        match self {
            Rules::Static(x) => x.grid_size_default,
        }
    }

    #[inline(always)]
    pub fn word_length_min(&self) -> usize {
        match self {
            Rules::Static(x) => x.word_length_min,
        }
    }

    #[inline(always)]
    pub fn word_length_max(&self) -> usize {
        match self {
            Rules::Static(x) => x.scoring_table.len() - 1,
        }
    }

    #[inline(always)]
    pub fn incorrect_word_score(&self) -> i32 {
        match self {
            Rules::Static(x) => x.incorrect_word_score,
        }
    }

    #[inline(always)]
    pub fn catastrophic_score(&self) -> i32 {
        match self {
            Rules::Static(x) => x.catastrophic_score,
        }
    }

    // lengths past the table use its last entry.
    #[inline(always)]
    pub fn score(&self, word_length: usize) -> i32 {
        match self {
            Rules::Static(x) => {
                x.scoring_table[std::cmp::min(word_length, x.scoring_table.len() - 1)]
            }
        }
    }

    pub fn check_size(&self, size: usize) -> error::Returns<()> {
        if size < self.grid_size_min() || size > self.grid_size_max() {
            return Err(error::GridError::UnsupportedSize {
                size,
                min: self.grid_size_min(),
                max: self.grid_size_max(),
            }
            .into());
        }
        Ok(())
    }
}

pub fn make_standard_rules<'a>() -> Rules<'a> {
    Rules::Static(StaticRules {
        dice: dice::STANDARD_DICE,
        grid_size_min: GRID_SIZE_MIN,
        grid_size_max: GRID_SIZE_MAX,
        grid_size_default: GRID_SIZE_DEFAULT,
        word_length_min: WORD_LENGTH_MIN,
        scoring_table: STANDARD_SCORING_TABLE,
        incorrect_word_score: INCORRECT_WORD_SCORE,
        catastrophic_score: CATASTROPHIC_SCORE,
    })
}
