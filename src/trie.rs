// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Nodes live in one vec, root at 0. Children are kept sorted by letter so a
// letter maps to at most one child.
struct Node {
    children: Vec<(u8, u32)>,
    accepts: bool,
    payload: Option<u32>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            accepts: false,
            payload: None,
        }
    }

    #[inline(always)]
    fn child(&self, letter: u8) -> Option<u32> {
        self.children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| self.children[i].1)
    }
}

pub struct Trie {
    nodes: Vec<Node>,
    num_words: u32,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            num_words: 0,
        }
    }

    pub fn build<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    // the payload is the insertion ordinal of the word, starting from 1.
    // reinserting a word keeps its original payload.
    pub fn insert(&mut self, word: &str) {
        let mut p = 0usize;
        for b in word.bytes() {
            let b = b.to_ascii_lowercase();
            p = match self.nodes[p].children.binary_search_by_key(&b, |&(l, _)| l) {
                Ok(i) => self.nodes[p].children[i].1 as usize,
                Err(i) => {
                    let q = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[p].children.insert(i, (b, q as u32));
                    q
                }
            };
        }
        let node = &mut self.nodes[p];
        if !node.accepts {
            node.accepts = true;
            self.num_words += 1;
            node.payload = Some(self.num_words);
        }
    }

    fn seek(&self, word: &str) -> Option<usize> {
        let mut p = 0usize;
        for b in word.bytes() {
            p = self.nodes[p].child(b.to_ascii_lowercase())? as usize;
        }
        Some(p)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seek(word).is_some_and(|p| self.nodes[p].accepts)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.seek(prefix).is_some()
    }

    pub fn payload(&self, word: &str) -> Option<u32> {
        self.seek(word).and_then(|p| self.nodes[p].payload)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            trie: self,
            stack: vec![0],
            prefix: String::new(),
        }
    }

    // all words in lexicographic order.
    pub fn for_each_word<F: FnMut(&str)>(&self, mut f: F) {
        fn iter<F: FnMut(&str)>(trie: &Trie, p: usize, s: &mut String, f: &mut F) {
            let node = &trie.nodes[p];
            if node.accepts {
                f(s);
            }
            for &(letter, q) in &node.children {
                s.push(letter as char);
                iter(trie, q as usize, s, f);
                s.pop();
            }
        }
        iter(self, 0, &mut String::new(), &mut f);
    }
}

// Walks the trie one letter at a time. Every next() must be undone by exactly
// one back() before the cursor moves on to a sibling.
pub struct Cursor<'a> {
    trie: &'a Trie,
    stack: Vec<u32>,
    prefix: String,
}

impl Cursor<'_> {
    #[inline(always)]
    fn current(&self) -> &Node {
        &self.trie.nodes[self.stack[self.stack.len() - 1] as usize]
    }

    #[inline(always)]
    pub fn has_next(&self, letter: u8) -> bool {
        self.current().child(letter).is_some()
    }

    pub fn next(&mut self, letter: u8) -> Result<(), error::GridError> {
        match self.current().child(letter) {
            Some(q) => {
                self.stack.push(q);
                self.prefix.push(letter as char);
                Ok(())
            }
            None => Err(error::GridError::InvalidTransition(format!(
                "no {:?} after {:?}",
                letter as char, self.prefix
            ))),
        }
    }

    pub fn back(&mut self) -> Result<(), error::GridError> {
        if self.stack.len() <= 1 {
            return Err(error::GridError::InvalidTransition(
                "cannot go back from the root".into(),
            ));
        }
        self.stack.pop();
        self.prefix.pop();
        Ok(())
    }

    #[inline(always)]
    pub fn is_match(&self) -> bool {
        self.current().accepts
    }

    #[inline(always)]
    pub fn prefix_matched(&self) -> &str {
        &self.prefix
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}
