// Copyright (C) 2020-2026 Andy Kurnia.

use super::{enumerate, error, grid, lexicon, path, server, session, trie};

// Checks every lexicon word against the grid with the path verifier.
pub struct DictionaryScan {
    id: session::ParticipantId,
    words: Box<[String]>,
}

impl DictionaryScan {
    pub fn new(lexicon: &lexicon::Lexicon, min_length: usize) -> Self {
        let mut words = lexicon
            .iter()
            .filter(|w| w.len() >= min_length)
            .map(|w| w.to_string())
            .collect::<Box<[String]>>();
        words.sort_unstable();
        Self {
            id: session::ParticipantId::next(),
            words,
        }
    }
}

impl server::Participant for DictionaryScan {
    fn id(&self) -> session::ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        "scan"
    }

    fn solve(&mut self, grid: &grid::Grid, scorer: &server::Scorer<'_, '_>) -> error::Returns<()> {
        for word in self.words.iter() {
            if path::find_path(grid, word).is_some() {
                scorer.score(word)?;
            }
        }
        Ok(())
    }
}

// Walks the grid guided by a trie of the long-enough words.
pub struct TrieWalker {
    id: session::ParticipantId,
    trie: trie::Trie,
}

impl TrieWalker {
    pub fn new(lexicon: &lexicon::Lexicon, min_length: usize) -> Self {
        Self {
            id: session::ParticipantId::next(),
            trie: lexicon.trie_of_min_length(min_length),
        }
    }
}

impl server::Participant for TrieWalker {
    fn id(&self) -> session::ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        "trie"
    }

    fn solve(&mut self, grid: &grid::Grid, scorer: &server::Scorer<'_, '_>) -> error::Returns<()> {
        for word in enumerate::distinct_words(grid, &self.trie)?.iter() {
            scorer.score(word)?;
        }
        Ok(())
    }
}

// Submits a fixed list regardless of the grid, e.g. answers worked out
// beforehand for a known seed.
pub struct WordList {
    id: session::ParticipantId,
    words: Vec<String>,
}

impl WordList {
    pub fn new<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        Self {
            id: session::ParticipantId::next(),
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }
}

impl server::Participant for WordList {
    fn id(&self) -> session::ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        "list"
    }

    fn solve(&mut self, _grid: &grid::Grid, scorer: &server::Scorer<'_, '_>) -> error::Returns<()> {
        for word in &self.words {
            scorer.score(word)?;
        }
        Ok(())
    }
}
