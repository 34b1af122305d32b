// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, grid, lexicon, path, result, rules, session};
use tracing::{debug, info, instrument, warn};

// Something that takes turns on grids. solve() may call scorer.score() any
// number of times. An error from solve() costs the catastrophic score.
pub trait Participant {
    fn id(&self) -> session::ParticipantId;

    fn name(&self) -> &str;

    fn start_turn(&mut self) {}

    fn solve(&mut self, grid: &grid::Grid, scorer: &Scorer<'_, '_>) -> error::Returns<()>;
}

// handed to a participant for the duration of one turn.
pub struct Scorer<'s, 'a> {
    server: &'s Server<'a>,
    participant: session::ParticipantId,
    grid: grid::GridId,
}

impl Scorer<'_, '_> {
    pub fn score(&self, word: &str) -> error::Returns<i32> {
        self.server
            .score_submission(self.participant, self.grid, word)
    }

    pub fn running_total(&self) -> error::Returns<i32> {
        self.server.total_score(self.participant, self.grid)
    }

    #[inline(always)]
    pub fn lexicon(&self) -> &lexicon::Lexicon {
        self.server.lexicon
    }

    #[inline(always)]
    pub fn rules(&self) -> &rules::Rules<'_> {
        self.server.rules
    }
}

pub enum PlayError {
    // nothing was played, e.g. the size was out of range.
    Setup(error::BoxAnyError),
    // the turn failed. the session was still closed and penalized.
    Turn {
        result: Box<result::GridResult>,
        source: error::BoxAnyError,
    },
}

impl PlayError {
    pub fn result(&self) -> Option<&result::GridResult> {
        match self {
            PlayError::Setup(_) => None,
            PlayError::Turn { result, .. } => Some(result),
        }
    }

    // the penalized result, if the turn was played, and the underlying error.
    pub fn into_parts(self) -> (Option<result::GridResult>, error::BoxAnyError) {
        match self {
            PlayError::Setup(e) => (None, e),
            PlayError::Turn { result, source } => (Some(*result), source),
        }
    }
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::Setup(e) => write!(f, "cannot start: {}", e),
            PlayError::Turn { result, source } => write!(
                f,
                "turn failed on grid {} ({} points): {}",
                result.grid().id(),
                result.points(),
                source
            ),
        }
    }
}

impl std::fmt::Debug for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Setup(e) => Some(e.as_ref()),
            PlayError::Turn { source, .. } => Some(source.as_ref()),
        }
    }
}

type SessionKey = (session::ParticipantId, grid::GridId);

pub struct Server<'a> {
    rules: &'a rules::Rules<'a>,
    lexicon: &'a lexicon::Lexicon,
    sessions: std::sync::Mutex<std::collections::HashMap<SessionKey, session::Session>>,
}

impl<'a> Server<'a> {
    pub fn new(rules: &'a rules::Rules<'a>, lexicon: &'a lexicon::Lexicon) -> Self {
        Self {
            rules,
            lexicon,
            sessions: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    #[inline(always)]
    pub fn rules(&self) -> &'a rules::Rules<'a> {
        self.rules
    }

    #[inline(always)]
    pub fn lexicon(&self) -> &'a lexicon::Lexicon {
        self.lexicon
    }

    fn lock(
        &self,
    ) -> Result<
        std::sync::MutexGuard<'_, std::collections::HashMap<SessionKey, session::Session>>,
        error::GridError,
    > {
        self.sessions.lock().map_err(|_| error::GridError::LockPoisoned)
    }

    #[instrument(skip(self, participant), fields(participant = %participant.id(), name = participant.name()))]
    pub fn play(
        &self,
        participant: &mut dyn Participant,
        seed: u64,
        size: usize,
    ) -> Result<result::GridResult, PlayError> {
        let grid = std::sync::Arc::new(
            grid::Grid::generate(self.rules, seed, size).map_err(PlayError::Setup)?,
        );
        let key = (participant.id(), grid.id());
        {
            let mut sessions = self.lock().map_err(|e| PlayError::Setup(e.into()))?;
            let mut session = session::Session::new(key.0, std::sync::Arc::clone(&grid));
            session.start();
            sessions.insert(key, session);
        }
        info!(grid = %grid.id(), "turn started");

        let scorer = Scorer {
            server: self,
            participant: key.0,
            grid: key.1,
        };
        participant.start_turn();
        let outcome = participant.solve(&grid, &scorer);

        // the session leaves the registry whatever happened.
        let removed = self.lock().map(|mut sessions| sessions.remove(&key));
        let mut session = match removed {
            Ok(Some(session)) => session,
            Ok(None) => {
                return Err(PlayError::Setup(
                    error::GridError::NoSession {
                        participant: key.0.0,
                        grid: key.1.0,
                    }
                    .into(),
                ));
            }
            Err(e) => return Err(PlayError::Setup(e.into())),
        };
        session.stop();
        match outcome {
            Ok(()) => {
                let result = session.into_result();
                info!(
                    points = result.points(),
                    words = result.words().len(),
                    elapsed_ms = result.duration().as_millis() as u64,
                    "turn finished"
                );
                Ok(result)
            }
            Err(source) => {
                session.record_catastrophe(self.rules.catastrophic_score());
                let result = session.into_result();
                warn!(error = %source, points = result.points(), "turn failed");
                Err(PlayError::Turn {
                    result: Box::new(result),
                    source,
                })
            }
        }
    }

    // Already submitted words score 0. Words that are not in the lexicon or
    // cannot be traced on the grid score the incorrect-word penalty.
    #[instrument(level = "debug", skip(self))]
    pub fn score_submission(
        &self,
        participant: session::ParticipantId,
        grid_id: grid::GridId,
        word: &str,
    ) -> error::Returns<i32> {
        let word = word.to_lowercase();
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&(participant, grid_id))
            .ok_or(error::GridError::NoSession {
                participant: participant.0,
                grid: grid_id.0,
            })?;
        if word.is_empty() || session.contains(&word) {
            return Ok(0);
        }
        let points = if self.lexicon.contains(&word)
            && path::find_path(session.grid(), &word).is_some()
        {
            self.rules.score(word.len())
        } else {
            self.rules.incorrect_word_score()
        };
        session.submit(&word, points)?;
        debug!(points, "scored");
        Ok(points)
    }

    // sum of everything recorded so far in a live session.
    pub fn total_score(
        &self,
        participant: session::ParticipantId,
        grid_id: grid::GridId,
    ) -> error::Returns<i32> {
        let sessions = self.lock()?;
        let session = sessions
            .get(&(participant, grid_id))
            .ok_or(error::GridError::NoSession {
                participant: participant.0,
                grid: grid_id.0,
            })?;
        Ok(session.words().values().sum())
    }

    pub fn live_sessions(&self) -> error::Returns<usize> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Submitter {
        id: session::ParticipantId,
        words: Vec<&'static str>,
        scores: Vec<i32>,
        fail: bool,
    }

    impl Submitter {
        fn new(words: &[&'static str], fail: bool) -> Self {
            Self {
                id: session::ParticipantId::next(),
                words: words.to_vec(),
                scores: Vec::new(),
                fail,
            }
        }
    }

    impl Participant for Submitter {
        fn id(&self) -> session::ParticipantId {
            self.id
        }

        fn name(&self) -> &str {
            "submitter"
        }

        fn solve(&mut self, _grid: &grid::Grid, scorer: &Scorer<'_, '_>) -> error::Returns<()> {
            for word in &self.words {
                self.scores.push(scorer.score(word)?);
            }
            if self.fail {
                return_error!("gave up".into());
            }
            Ok(())
        }
    }

    fn words_on(grid_seed: u64) -> (lexicon::Lexicon, Vec<String>) {
        let rules = rules::make_standard_rules();
        let grid = grid::Grid::generate(&rules, grid_seed, 5).unwrap();
        // every four-letter path from the first cell, plus a decoy.
        let mut words = Vec::new();
        let adjacency = grid.adjacency();
        let letters = grid.letters();
        for &b in adjacency.of(0) {
            for &c in adjacency.of(b as usize) {
                if c == 0 {
                    continue;
                }
                for &d in adjacency.of(c as usize) {
                    if d == 0 || d == b {
                        continue;
                    }
                    let w = [0usize, b as usize, c as usize, d as usize]
                        .iter()
                        .map(|&i| letters[i] as char)
                        .collect::<String>();
                    words.push(w);
                }
            }
        }
        words.push("qqqq".to_string());
        let lexicon = lexicon::Lexicon::from_words(&words).unwrap();
        (lexicon, words)
    }

    #[test]
    fn scores_and_dedups() {
        let rules = rules::make_standard_rules();
        let (lexicon, words) = words_on(3);
        let server = Server::new(&rules, &lexicon);
        let first = words[0].clone().leak() as &'static str;
        let upper = words[0].to_uppercase().leak() as &'static str;
        let mut player = Submitter::new(&[first, upper, "qqqq", "zzzz", "ab"], false);
        let result = server.play(&mut player, 3, 5).unwrap();
        assert_eq!(player.scores, vec![1, 0, -5, -5, -5]);
        assert_eq!(result.points(), 1 - 5 - 5 - 5);
        assert_eq!(result.words().len(), 4);
        assert_eq!(server.live_sessions().unwrap(), 0);
    }

    #[test]
    fn catastrophe() {
        let rules = rules::make_standard_rules();
        let (lexicon, words) = words_on(4);
        let server = Server::new(&rules, &lexicon);
        let first = words[0].clone().leak() as &'static str;
        let mut player = Submitter::new(&[first], true);
        match server.play(&mut player, 4, 5) {
            Err(PlayError::Turn { result, source }) => {
                assert_eq!(source.to_string(), "gave up");
                assert_eq!(result.points(), 1 + rules::CATASTROPHIC_SCORE);
                assert!(result.is_catastrophe());
                assert_eq!(
                    result
                        .words()
                        .values()
                        .filter(|&&p| p == rules::CATASTROPHIC_SCORE)
                        .count(),
                    1
                );
            }
            _ => panic!("expected a failed turn"),
        }
        assert_eq!(server.live_sessions().unwrap(), 0);
    }

    #[test]
    fn failed_turn_splits_into_result_and_error() {
        let rules = rules::make_standard_rules();
        let (lexicon, words) = words_on(5);
        let server = Server::new(&rules, &lexicon);
        let first = words[0].clone().leak() as &'static str;
        let mut player = Submitter::new(&[first], true);
        let (result, source) = server.play(&mut player, 5, 5).unwrap_err().into_parts();
        let result = result.unwrap();
        assert_eq!(result.points(), 1 + rules::CATASTROPHIC_SCORE);
        assert_eq!(result.num_incorrect(), 0);
        assert_eq!(source.to_string(), "gave up");

        let (result, source) = server.play(&mut player, 5, 9).unwrap_err().into_parts();
        assert!(result.is_none());
        assert!(matches!(
            error::as_grid_error(&source),
            Some(error::GridError::InvalidSize { size: 9, .. })
        ));
    }

    #[test]
    fn bad_size_plays_nothing() {
        let rules = rules::make_standard_rules();
        let lexicon = lexicon::Lexicon::from_words(["salt"]).unwrap();
        let server = Server::new(&rules, &lexicon);
        let mut player = Submitter::new(&[], false);
        let err = server.play(&mut player, 1, 7).unwrap_err();
        assert!(err.result().is_none());
        assert_eq!(server.live_sessions().unwrap(), 0);
    }

    #[test]
    fn unknown_session() {
        let rules = rules::make_standard_rules();
        let lexicon = lexicon::Lexicon::from_words(["salt"]).unwrap();
        let server = Server::new(&rules, &lexicon);
        let err = server
            .score_submission(session::ParticipantId::next(), grid::GridId(0), "salt")
            .unwrap_err();
        assert!(matches!(
            error::as_grid_error(&err),
            Some(error::GridError::NoSession { .. })
        ));
    }
}
