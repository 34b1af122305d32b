// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, trie};

// The reference word list, lowercased. Read-only once built, so it can be
// shared by reference between the server and any number of participants.
pub struct Lexicon {
    words: std::collections::HashSet<String>,
    trie: trie::Trie,
}

fn normalize(line: &str) -> error::Returns<Option<String>> {
    let s = line.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
        return_error!(format!("invalid letter {:?} in {:?}", c, s));
    }
    Ok(Some(s.to_ascii_lowercase()))
}

impl Lexicon {
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> error::Returns<Self> {
        let mut set = std::collections::HashSet::new();
        for word in words {
            if let Some(word) = normalize(word.as_ref())? {
                set.insert(word);
            }
        }
        let mut sorted = set.iter().collect::<Vec<_>>();
        sorted.sort_unstable();
        let trie = trie::Trie::build(sorted);
        tracing::debug!(
            words = set.len(),
            nodes = trie.num_nodes(),
            "built lexicon"
        );
        Ok(Self { words: set, trie })
    }

    // one word per line.
    pub fn from_text(text: &str) -> error::Returns<Self> {
        Self::from_words(text.lines())
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| error::new(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_text(&text)
    }

    // reads "A Words.txt" through "Z Words.txt", whichever exist.
    pub fn from_letter_files<P: AsRef<std::path::Path>>(dir: P) -> error::Returns<Self> {
        let dir = dir.as_ref();
        let mut text = String::new();
        let mut num_files = 0;
        for c in b'A'..=b'Z' {
            let path = dir.join(format!("{} Words.txt", c as char));
            match std::fs::read_to_string(&path) {
                Ok(s) => {
                    text.push_str(&s);
                    text.push('\n');
                    num_files += 1;
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no word file");
                }
                Err(e) => {
                    return_error!(format!("cannot read {}: {}", path.display(), e));
                }
            }
        }
        if num_files == 0 {
            return_error!(format!("no word files found in {}", dir.display()));
        }
        Self::from_text(&text)
    }

    // a directory is read as per-letter files, anything else as a single list.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::from_letter_files(path)
        } else {
            Self::from_file(path)
        }
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline(always)]
    pub fn trie(&self) -> &trie::Trie {
        &self.trie
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|s| s.as_str())
    }

    pub fn trie_of_min_length(&self, min_length: usize) -> trie::Trie {
        let mut sorted = self
            .words
            .iter()
            .filter(|w| w.len() >= min_length)
            .collect::<Vec<_>>();
        sorted.sort_unstable();
        trie::Trie::build(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_dedups() {
        let lexicon = Lexicon::from_text("Tea\n\n  ten \nTEA\ninn\n").unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("tea"));
        assert!(lexicon.contains("ten"));
        assert!(!lexicon.contains("Tea"));
        assert!(lexicon.trie().contains("inn"));
        assert_eq!(lexicon.trie().len(), 3);
    }

    #[test]
    fn rejects_junk() {
        assert!(Lexicon::from_text("tea\nit's\n").is_err());
        assert!(Lexicon::from_words(["caf\u{e9}"]).is_err());
    }

    #[test]
    fn min_length_trie() {
        let lexicon = Lexicon::from_words(["tea", "team", "teams"]).unwrap();
        let trie = lexicon.trie_of_min_length(4);
        assert_eq!(trie.len(), 2);
        assert!(!trie.contains("tea"));
        assert!(trie.contains("team"));
    }

    #[test]
    fn letter_files() {
        let dir = std::env::temp_dir().join(format!("wordgrid-lexicon-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("A Words.txt"), "aloft\nalto\n").unwrap();
        std::fs::write(dir.join("S Words.txt"), "salt\r\nsoma\r\n").unwrap();
        let lexicon = Lexicon::load(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.contains("salt"));
        assert!(lexicon.contains("soma"));
        assert!(Lexicon::from_letter_files(std::env::temp_dir().join("wordgrid-nothing-here")).is_err());
    }
}
