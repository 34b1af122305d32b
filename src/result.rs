// Copyright (C) 2020-2026 Andy Kurnia.

use super::{grid, session};

// What a finished session leaves behind. Never changes after it is made.
pub struct GridResult {
    participant: session::ParticipantId,
    grid: std::sync::Arc<grid::Grid>,
    words: std::collections::HashMap<String, i32>,
    points: i32,
    duration: std::time::Duration,
}

impl GridResult {
    pub fn new(
        participant: session::ParticipantId,
        grid: std::sync::Arc<grid::Grid>,
        words: std::collections::HashMap<String, i32>,
        points: i32,
        duration: std::time::Duration,
    ) -> Self {
        Self {
            participant,
            grid,
            words,
            points,
            duration,
        }
    }

    #[inline(always)]
    pub fn participant(&self) -> session::ParticipantId {
        self.participant
    }

    #[inline(always)]
    pub fn grid(&self) -> &grid::Grid {
        &self.grid
    }

    #[inline(always)]
    pub fn words(&self) -> &std::collections::HashMap<String, i32> {
        &self.words
    }

    #[inline(always)]
    pub fn points(&self) -> i32 {
        self.points
    }

    #[inline(always)]
    pub fn duration(&self) -> std::time::Duration {
        self.duration
    }

    pub fn num_correct(&self) -> usize {
        self.words.values().filter(|&&p| p > 0).count()
    }

    // the catastrophe entry is not a word.
    pub fn num_incorrect(&self) -> usize {
        self.words.len() - self.num_correct() - self.is_catastrophe() as usize
    }

    pub fn is_catastrophe(&self) -> bool {
        self.words.contains_key(session::CATASTROPHE_KEY)
    }

    // best first, ties alphabetical.
    pub fn sorted_words(&self) -> Vec<(&str, i32)> {
        let mut v = self
            .words
            .iter()
            .map(|(w, &p)| (w.as_str(), p))
            .collect::<Vec<_>>();
        v.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        v
    }
}

impl std::fmt::Debug for GridResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridResult")
            .field("participant", &self.participant)
            .field("grid", &self.grid.id())
            .field("points", &self.points)
            .field("words", &self.words.len())
            .finish()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
pub struct JsonWord {
    pub word: String,
    pub points: i32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct JsonResult {
    pub participant: u64,
    pub grid: u64,
    pub seed: u64,
    pub board: Vec<String>,
    pub points: i32,
    pub correct: usize,
    pub incorrect: usize,
    #[serde(rename = "durationMs")]
    pub duration_ms: u64,
    pub words: Vec<JsonWord>,
}

impl From<&GridResult> for JsonResult {
    fn from(result: &GridResult) -> Self {
        Self {
            participant: result.participant.0,
            grid: result.grid.id().0,
            seed: result.grid.seed(),
            board: result.grid.rows().map(|s| s.to_string()).collect(),
            points: result.points,
            correct: result.num_correct(),
            incorrect: result.num_incorrect(),
            duration_ms: result.duration.as_millis() as u64,
            words: result
                .sorted_words()
                .into_iter()
                .map(|(word, points)| JsonWord {
                    word: word.to_string(),
                    points,
                })
                .collect(),
        }
    }
}

// one row per scored word, with a header.
pub fn write_csv<W: std::io::Write>(
    result: &GridResult,
    w: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_out = csv::Writer::from_writer(w);
    csv_out.serialize(("grid", "word", "length", "points"))?;
    for (word, points) in result.sorted_words() {
        csv_out.serialize((result.grid.id().0, word, word.len(), points))?;
    }
    csv_out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> GridResult {
        let grid = grid::Grid::from_rows(&["salt", "omid", "filp", "rtcs"]).unwrap();
        let mut words = std::collections::HashMap::new();
        words.insert("salt".to_string(), 1);
        words.insert("soma".to_string(), 1);
        words.insert("xyzzy".to_string(), -5);
        GridResult::new(
            session::ParticipantId(9),
            std::sync::Arc::new(grid),
            words,
            -3,
            std::time::Duration::from_millis(12),
        )
    }

    #[test]
    fn counts() {
        let result = make_result();
        assert_eq!(result.num_correct(), 2);
        assert_eq!(result.num_incorrect(), 1);
        assert!(!result.is_catastrophe());
        assert_eq!(
            result.sorted_words(),
            vec![("salt", 1), ("soma", 1), ("xyzzy", -5)]
        );
    }

    #[test]
    fn catastrophe_is_not_an_incorrect_word() {
        let grid = grid::Grid::from_rows(&["salt", "omid", "filp", "rtcs"]).unwrap();
        let mut words = std::collections::HashMap::new();
        words.insert("salt".to_string(), 1);
        words.insert("xyzzy".to_string(), -5);
        words.insert(session::CATASTROPHE_KEY.to_string(), -50);
        let result = GridResult::new(
            session::ParticipantId(3),
            std::sync::Arc::new(grid),
            words,
            -54,
            std::time::Duration::ZERO,
        );
        assert!(result.is_catastrophe());
        assert_eq!(result.num_correct(), 1);
        assert_eq!(result.num_incorrect(), 1);
        assert_eq!(JsonResult::from(&result).incorrect, 1);
    }

    #[test]
    fn json_view() {
        let result = make_result();
        let s = serde_json::to_string(&JsonResult::from(&result)).unwrap();
        let back = serde_json::from_str::<JsonResult>(&s).unwrap();
        assert_eq!(back.participant, 9);
        assert_eq!(back.board, vec!["salt", "omid", "filp", "rtcs"]);
        assert_eq!(back.points, -3);
        assert_eq!(back.duration_ms, 12);
        assert_eq!(back.words[2], JsonWord {
            word: "xyzzy".into(),
            points: -5
        });
        assert!(s.contains("\"durationMs\":12"));
    }

    #[test]
    fn csv_view() {
        let result = make_result();
        let mut buf = Vec::new();
        write_csv(&result, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "grid,word,length,points");
        assert!(lines[3].ends_with(",xyzzy,5,-5"));
    }
}
