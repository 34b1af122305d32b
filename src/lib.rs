// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod adjacency;
pub mod dice;
pub mod display;
pub mod enumerate;
pub mod grid;
pub mod lexicon;
pub mod logging;
pub mod matrix;
pub mod path;
pub mod players;
pub mod result;
pub mod rules;
pub mod server;
pub mod session;
pub mod stats;
pub mod trie;
