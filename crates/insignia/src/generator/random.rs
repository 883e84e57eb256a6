use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 9;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of uniform draws backing every generator.
///
/// Tests substitute scripted sources to pin exact draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Inclusive integer in `[min, max]`.
    fn int_between(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.next_unit() * span).floor() as i64 + min
    }
}

/// `StdRng`-backed source; a fixed seed reproduces the whole dataset.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Sampling helpers layered over a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct Sampler<R = SeededRandom> {
    source: R,
}

impl Sampler<SeededRandom> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SeededRandom::from_entropy())
    }
}

impl<R: RandomSource> Sampler<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn unit(&mut self) -> f64 {
        self.source.next_unit()
    }

    /// Inclusive integer draw. A reversed range collapses to `min` without
    /// consuming a draw.
    pub fn number(&mut self, min: i64, max: i64) -> i64 {
        if max < min {
            return min;
        }
        self.source.int_between(min, max)
    }

    pub fn count(&mut self, min: usize, max: usize) -> usize {
        self.number(min as i64, max as i64).max(0) as usize
    }

    pub fn amount(&mut self, min: u64, max: u64) -> u64 {
        self.number(min as i64, max as i64).max(0) as u64
    }

    pub fn percent(&mut self, min: u32, max: u32) -> u32 {
        self.number(i64::from(min), i64::from(max)).max(0) as u32
    }

    /// Uniform float rounded to `decimals` places.
    pub fn float(&mut self, min: f64, max: f64, decimals: u32) -> f64 {
        let raw = self.unit() * (max - min) + min;
        let scale = 10_f64.powi(decimals as i32);
        (raw * scale).round() / scale
    }

    /// Uniform element of a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics when `items` is empty. Generators only pass fixed fixture lists
    /// here; dynamic lists go through [`Sampler::try_pick`].
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick needs at least one candidate");
        &items[self.index(items.len())]
    }

    pub fn try_pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Between one and `max_count` distinct positions of `items`, shuffled.
    pub fn pick_many<T: Clone>(&mut self, items: &[T], max_count: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        let take = self.count(1, max_count.min(items.len()).max(1));
        let mut pool = items.to_vec();
        for i in (1..pool.len()).rev() {
            let j = self.index(i + 1);
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }

    /// True when the draw lands strictly above `threshold`.
    pub fn chance(&mut self, threshold: f64) -> bool {
        self.unit() > threshold
    }

    pub fn maybe<T>(&mut self, threshold: f64, make: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.chance(threshold) {
            Some(make(self))
        } else {
            None
        }
    }

    /// Interpolates between the two midnights at millisecond resolution and
    /// truncates to the calendar date, so `end` itself is almost never drawn.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span_ms = (end - start).num_milliseconds() as f64;
        let offset_ms = (self.unit() * span_ms).floor() as i64;
        start + Duration::days(offset_ms.div_euclid(MILLIS_PER_DAY))
    }

    pub fn date_within_days(&mut self, start: NaiveDate, days: i64) -> NaiveDate {
        self.date_between(start, start + Duration::days(days))
    }

    /// Nine lowercase base-36 characters.
    pub fn id(&mut self) -> String {
        (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[self.index(ID_ALPHABET.len())] as char)
            .collect()
    }

    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

/// Calendar date from 1-based parts; invalid parts fall back to `NaiveDate::MIN`.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_draws() {
        let mut left = Sampler::seeded(7);
        let mut right = Sampler::seeded(7);
        let a: Vec<i64> = (0..20).map(|_| left.number(1, 100)).collect();
        let b: Vec<i64> = (0..20).map(|_| right.number(1, 100)).collect();
        assert_eq!(a, b);
        assert_eq!(left.id(), right.id());
    }

    #[test]
    fn number_stays_inside_inclusive_bounds() {
        let mut sampler = Sampler::seeded(11);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let value = sampler.number(3, 6);
            assert!((3..=6).contains(&value));
            seen_min |= value == 3;
            seen_max |= value == 6;
        }
        assert!(seen_min && seen_max);
        assert_eq!(sampler.number(9, 4), 9);
    }

    #[test]
    fn pick_many_returns_distinct_items_within_limit() {
        let mut sampler = Sampler::seeded(3);
        let items = ["a", "b", "c", "d", "e"];
        for _ in 0..200 {
            let chosen = sampler.pick_many(&items, 3);
            assert!((1..=3).contains(&chosen.len()));
            let mut deduped = chosen.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), chosen.len());
        }
        assert!(sampler.pick_many::<u8>(&[], 4).is_empty());
    }

    #[test]
    fn dates_fall_inside_requested_window() {
        let mut sampler = Sampler::seeded(21);
        let start = date(2023, 1, 1);
        let end = date(2024, 1, 1);
        for _ in 0..500 {
            let drawn = sampler.date_between(start, end);
            assert!(drawn >= start && drawn <= end);
        }
    }

    #[test]
    fn ids_are_nine_base36_characters() {
        let mut sampler = Sampler::seeded(5);
        let id = sampler.id();
        assert_eq!(id.len(), 9);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn floats_are_rounded_to_requested_precision() {
        let mut sampler = Sampler::seeded(8);
        for _ in 0..100 {
            let value = sampler.float(25.0, 25.2, 4);
            assert!((25.0..=25.2).contains(&value));
            assert!(((value * 10_000.0).round() - value * 10_000.0).abs() < 1e-6);
        }
        assert!(sampler.try_pick::<u8>(&[]).is_none());
    }
}
