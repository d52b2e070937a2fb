//! Benchmark fixtures for rummy.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Share of pictures taken on busy event days.
const EVENT_SHARE: f64 = 0.3;

/// Number of distinct event days in a year.
const EVENT_DAYS: u64 = 12;

/// Generates `count` capture days spread over 2024.
///
/// Most pictures land on a uniformly random day; a fixed share piles up on a
/// handful of event days, like holidays in a real library.
pub fn synthetic_days(count: usize, seed: u64) -> Vec<NaiveDate> {
    let mut rng = StdRng::seed_from_u64(seed);
    let Some(start) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return Vec::new();
    };
    let events: Vec<u64> = (0..EVENT_DAYS).map(|i| i * 30 + 5).collect();

    (0..count)
        .map(|_| {
            let offset = if rng.gen_bool(EVENT_SHARE) {
                events[rng.gen_range(0..events.len())]
            } else {
                rng.gen_range(0..366)
            };
            start + Days::new(offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_days_stay_within_the_year() {
        let days = synthetic_days(5_000, 1);
        assert_eq!(days.len(), 5_000);
        assert!(days.iter().all(|d| d.format("%Y").to_string() == "2024"));
    }

    #[test]
    fn test_same_seed_same_days() {
        assert_eq!(synthetic_days(100, 9), synthetic_days(100, 9));
    }

    #[test]
    fn test_event_days_are_busy() {
        let days = synthetic_days(10_000, 3);
        let distinct: HashSet<_> = days.iter().collect();
        assert!(distinct.len() <= 366);
        assert!(distinct.len() > 300);
    }
}
