// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use rand::prelude::*;

pub const NUM_FACES: usize = 6;

pub struct Die {
    faces: [u8; NUM_FACES],
}

impl Die {
    #[inline(always)]
    pub const fn new(faces: &[u8; NUM_FACES]) -> Self {
        Self { faces: *faces }
    }

    #[inline(always)]
    pub fn faces(&self) -> &[u8; NUM_FACES] {
        &self.faces
    }

    #[inline(always)]
    pub fn roll(&self, rng: &mut dyn RngCore) -> u8 {
        self.faces[rng.random_range(0..NUM_FACES)]
    }
}

// canonical order matters: a grid of size n draws from the first n * n dice.
pub static STANDARD_DICE: &[Die] = &[
    Die::new(b"septic"),
    Die::new(b"sussen"),
    Die::new(b"piclet"),
    Die::new(b"afaras"),
    Die::new(b"eemeea"),
    Die::new(b"frispy"),
    Die::new(b"horndl"),
    Die::new(b"worvgr"),
    Die::new(b"zxjkbq"),
    Die::new(b"egameu"),
    Die::new(b"tietii"),
    Die::new(b"eeaeea"),
    Die::new(b"tonhdh"),
    Die::new(b"tootou"),
    Die::new(b"fairys"),
    Die::new(b"annend"),
    Die::new(b"farisa"),
    Die::new(b"prrhiy"),
    Die::new(b"hohrld"),
    Die::new(b"wouton"),
    Die::new(b"motett"),
    Die::new(b"dlornd"),
    Die::new(b"ccsnwt"),
    Die::new(b"lictie"),
    Die::new(b"anngem"),
];

// dice still available for the grid being filled.
pub struct DicePool<'a>(pub Vec<&'a Die>);

impl<'a> DicePool<'a> {
    pub fn new(dice: &'a [Die], num_dice: usize) -> error::Returns<Self> {
        if dice.len() < num_dice {
            return Err(error::GridError::DicePoolTooSmall {
                needed: num_dice,
                available: dice.len(),
            }
            .into());
        }
        Ok(Self(dice[..num_dice].iter().collect()))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // removing keeps the survivors in order, so the same rng stream gives the same grid.
    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Option<&'a Die> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(rng.random_range(0..self.0.len())))
        }
    }
}
