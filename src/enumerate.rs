// Copyright (C) 2020-2026 Andy Kurnia.

use super::{adjacency, error, grid, trie};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    Completed,
    Cancelled,
}

struct WordFinder<'a> {
    letters: &'a [u8],
    adjacency: &'a adjacency::Adjacency,
    cursor: trie::Cursor<'a>,
    used: Vec<bool>,
    cancel: Option<&'a std::sync::atomic::AtomicBool>,
}

impl WordFinder<'_> {
    fn iter_words<F: FnMut(&str)>(
        &mut self,
        idx: usize,
        f: &mut F,
    ) -> Result<Walk, error::GridError> {
        if let Some(cancel) = self.cancel {
            if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                return Ok(Walk::Cancelled);
            }
        }
        let letter = self.letters[idx];
        if !self.cursor.has_next(letter) {
            return Ok(Walk::Completed);
        }
        self.cursor.next(letter)?;
        self.used[idx] = true;
        if self.cursor.is_match() {
            f(self.cursor.prefix_matched());
        }
        let mut walk = Walk::Completed;
        let adjacency = self.adjacency;
        for &next in adjacency.of(idx) {
            if !self.used[next as usize] {
                walk = self.iter_words(next as usize, f)?;
                if walk == Walk::Cancelled {
                    break;
                }
            }
        }
        self.used[idx] = false;
        self.cursor.back()?;
        Ok(walk)
    }
}

// Calls f for every word of the trie that can be traced on the grid, once
// per distinct path, starting cells in row-major order. Branches are cut as
// soon as the letters so far are not a prefix of any word. The cancel flag is
// polled on every step.
pub fn for_each_word<F: FnMut(&str)>(
    grid: &grid::Grid,
    trie: &trie::Trie,
    cancel: Option<&std::sync::atomic::AtomicBool>,
    mut f: F,
) -> error::Returns<Walk> {
    let mut finder = WordFinder {
        letters: grid.letters(),
        adjacency: grid.adjacency(),
        cursor: trie.cursor(),
        used: vec![false; grid.letters().len()],
        cancel,
    };
    for idx in 0..grid.letters().len() {
        if finder.iter_words(idx, &mut f)? == Walk::Cancelled {
            tracing::debug!(grid = %grid.id(), "enumeration cancelled");
            return Ok(Walk::Cancelled);
        }
    }
    Ok(Walk::Completed)
}

// Single pass over every word found on a grid, duplicates included.
pub struct Words(std::vec::IntoIter<String>);

impl Iterator for Words {
    type Item = String;

    #[inline(always)]
    fn next(&mut self) -> Option<String> {
        self.0.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub fn enumerate(grid: &grid::Grid, trie: &trie::Trie) -> error::Returns<Words> {
    let mut found = Vec::new();
    for_each_word(grid, trie, None, |word| found.push(word.to_string()))?;
    Ok(Words(found.into_iter()))
}

// longest first, then alphabetical.
pub fn distinct_words(grid: &grid::Grid, trie: &trie::Trie) -> error::Returns<Box<[String]>> {
    let mut found = std::collections::HashSet::new();
    for_each_word(grid, trie, None, |word| {
        if !found.contains(word) {
            found.insert(word.to_string());
        }
    })?;
    let mut ans = found.into_iter().collect::<Box<[String]>>();
    ans.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    Ok(ans)
}
