// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, grid, result};

// never a dictionary word, so it cannot collide with a real submission.
pub const CATASTROPHE_KEY: &str = "<catastrophe>";

static NEXT_PARTICIPANT_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    pub fn next() -> Self {
        Self(NEXT_PARTICIPANT_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default)]
pub struct Stopwatch {
    instant: Option<std::time::Instant>, // Some while running
    elapsed: std::time::Duration,
}

impl Stopwatch {
    pub fn start(&mut self) {
        if self.instant.is_none() {
            self.instant = Some(std::time::Instant::now());
        }
    }

    pub fn stop(&mut self) {
        if let Some(instant) = self.instant.take() {
            self.elapsed += instant.elapsed();
        }
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.instant.is_some()
    }

    pub fn elapsed(&self) -> std::time::Duration {
        match self.instant {
            Some(instant) => self.elapsed + instant.elapsed(),
            None => self.elapsed,
        }
    }
}

// One participant's attempt at one grid.
pub struct Session {
    participant: ParticipantId,
    grid: std::sync::Arc<grid::Grid>,
    words: std::collections::HashMap<String, i32>,
    total: i32,
    stopwatch: Stopwatch,
    finalized: bool,
}

impl Session {
    pub fn new(participant: ParticipantId, grid: std::sync::Arc<grid::Grid>) -> Self {
        Self {
            participant,
            grid,
            words: std::collections::HashMap::new(),
            total: 0,
            stopwatch: Stopwatch::default(),
            finalized: false,
        }
    }

    pub fn start(&mut self) {
        self.stopwatch.start();
    }

    // zero points and empty words are not recorded. a later submission of the
    // same word replaces the earlier one.
    pub fn submit(&mut self, word: &str, points: i32) -> error::Returns<()> {
        if self.finalized {
            return Err(error::GridError::SessionFinalized.into());
        }
        if !word.is_empty() && points != 0 {
            self.words.insert(word.to_string(), points);
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.stopwatch.stop();
        self.finalized = true;
        self.recompute_total();
    }

    // allowed after stop. recording twice keeps a single entry.
    pub fn record_catastrophe(&mut self, score: i32) {
        self.stopwatch.stop();
        self.finalized = true;
        self.words.insert(CATASTROPHE_KEY.to_string(), score);
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.words.values().sum();
    }

    #[inline(always)]
    pub fn participant(&self) -> ParticipantId {
        self.participant
    }

    #[inline(always)]
    pub fn grid(&self) -> &std::sync::Arc<grid::Grid> {
        &self.grid
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    #[inline(always)]
    pub fn points(&self, word: &str) -> Option<i32> {
        self.words.get(word).copied()
    }

    // as of the last stop.
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.total
    }

    #[inline(always)]
    pub fn words(&self) -> &std::collections::HashMap<String, i32> {
        &self.words
    }

    #[inline(always)]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.stopwatch.elapsed()
    }

    pub fn into_result(self) -> result::GridResult {
        result::GridResult::new(
            self.participant,
            self.grid,
            self.words,
            self.total,
            self.stopwatch.elapsed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> Session {
        let grid = grid::Grid::from_rows(&["salt", "omid", "filp", "rtcs"]).unwrap();
        Session::new(ParticipantId::next(), std::sync::Arc::new(grid))
    }

    #[test]
    fn ignores_empty_and_zero() {
        let mut session = new_session();
        session.start();
        session.submit("", 5).unwrap();
        session.submit("salt", 0).unwrap();
        assert!(session.words().is_empty());
        session.submit("salt", 1).unwrap();
        session.submit("salt", 1).unwrap();
        session.submit("xyzzy", -5).unwrap();
        session.stop();
        assert_eq!(session.words().len(), 2);
        assert_eq!(session.total(), -4);
    }

    #[test]
    fn total_is_recomputed_on_stop() {
        let mut session = new_session();
        session.start();
        session.submit("soma", 1).unwrap();
        assert_eq!(session.total(), 0);
        session.stop();
        assert_eq!(session.total(), 1);
        assert!(!session.stopwatch.is_running());
    }

    #[test]
    fn no_submissions_after_stop() {
        let mut session = new_session();
        session.start();
        session.stop();
        let err = session.submit("salt", 1).unwrap_err();
        assert_eq!(
            error::as_grid_error(&err),
            Some(&error::GridError::SessionFinalized)
        );
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn catastrophe_is_recorded_once() {
        let mut session = new_session();
        session.start();
        session.submit("salt", 1).unwrap();
        session.stop();
        session.record_catastrophe(-50);
        session.record_catastrophe(-50);
        assert_eq!(session.points(CATASTROPHE_KEY), Some(-50));
        assert_eq!(session.total(), -49);
        let result = session.into_result();
        assert_eq!(result.points(), -49);
        assert_eq!(result.words().len(), 2);
    }

    #[test]
    fn stopwatch_accumulates() {
        let mut stopwatch = Stopwatch::default();
        assert_eq!(stopwatch.elapsed(), std::time::Duration::ZERO);
        stopwatch.start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        stopwatch.stop();
        let first = stopwatch.elapsed();
        assert!(first >= std::time::Duration::from_millis(2));
        assert_eq!(stopwatch.elapsed(), first);
    }
}
