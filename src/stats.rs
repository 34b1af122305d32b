// Copyright (C) 2020-2026 Andy Kurnia.

// Running statistics over session totals.
#[derive(Clone, Debug, Default)]
pub struct ScoreStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: Option<i32>,
    max: Option<i32>,
    catastrophes: u64,
}

impl ScoreStats {
    pub fn new() -> Self {
        Self::default()
    }

    // https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm
    pub fn update(&mut self, points: i32) {
        self.count += 1;
        let value = points as f64;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        self.min = Some(self.min.map_or(points, |m| m.min(points)));
        self.max = Some(self.max.map_or(points, |m| m.max(points)));
    }

    pub fn update_game(&mut self, points: i32, gave_up: bool) {
        self.update(points);
        if gave_up {
            self.catastrophes += 1;
        }
    }

    // https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Parallel_algorithm
    pub fn merge(&mut self, other: &ScoreStats) {
        if other.count == 0 {
            return;
        }
        let original_count = self.count as f64;
        self.count += other.count;
        let delta = other.mean - self.mean;
        let delta_mean = delta * (other.count as f64 / self.count as f64);
        self.mean += delta_mean;
        self.m2 += other.m2 + delta * delta_mean * original_count;
        self.min = self.min.into_iter().chain(other.min).min();
        self.max = self.max.into_iter().chain(other.max).max();
        self.catastrophes += other.catastrophes;
    }

    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    #[inline(always)]
    pub fn min(&self) -> Option<i32> {
        self.min
    }

    #[inline(always)]
    pub fn max(&self) -> Option<i32> {
        self.max
    }

    #[inline(always)]
    pub fn catastrophes(&self) -> u64 {
        self.catastrophes
    }
}

impl std::fmt::Display for ScoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(
                f,
                "n={} mean={:.3} sd={:.3} min={} max={} gave_up={}",
                self.count,
                self.mean,
                self.standard_deviation(),
                min,
                max,
                self.catastrophes
            ),
            _ => write!(f, "n=0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welford() {
        let mut stats = ScoreStats::new();
        for x in [2, 4, 4, 4, 5, 5, 7, 9] {
            stats.update(x);
        }
        assert_eq!(stats.count(), 8);
        assert!((stats.mean() - 5.0).abs() < 1e-9);
        assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-9);
        assert_eq!(stats.min(), Some(2));
        assert_eq!(stats.max(), Some(9));
    }

    #[test]
    fn merge_matches_sequential() {
        let values = [-50, 3, 11, -5, 0, 7, 2];
        let mut all = ScoreStats::new();
        let mut a = ScoreStats::new();
        let mut b = ScoreStats::new();
        for (i, &x) in values.iter().enumerate() {
            all.update(x);
            if i % 2 == 0 { a.update(x) } else { b.update(x) }
        }
        let mut merged = ScoreStats::new();
        merged.merge(&a);
        merged.merge(&b);
        merged.merge(&ScoreStats::new());
        assert_eq!(merged.count(), all.count());
        assert!((merged.mean() - all.mean()).abs() < 1e-9);
        assert!((merged.variance() - all.variance()).abs() < 1e-9);
        assert_eq!(merged.min(), Some(-50));
        assert_eq!(merged.max(), Some(11));
        assert_eq!(ScoreStats::new().to_string(), "n=0");
        let mut c = ScoreStats::new();
        c.update_game(-49, true);
        merged.merge(&c);
        assert_eq!(merged.catastrophes(), 1);
        assert_eq!(merged.min(), Some(-50));
    }
}
