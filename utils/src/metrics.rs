use std::collections::VecDeque;

use crate::comparison::ComparisonResult;

pub const HISTORY_LIMIT: usize = 10;

/// Most recent comparison runs, oldest first. Holds at most
/// [`HISTORY_LIMIT`] entries; pushing beyond that drops the oldest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonHistory {
    entries: VecDeque<ComparisonResult>,
}

impl ComparisonHistory {
    pub fn push(&mut self, result: ComparisonResult) {
        while self.entries.len() >= HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(result);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&ComparisonResult> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ComparisonResult> {
        self.entries.iter()
    }

    pub fn average(&self) -> Option<AverageMetrics> {
        average(self.entries.iter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AverageMetrics {
    pub batched_time: f64,
    pub individual_time: f64,
    pub time_saved: f64,
    pub percent_improvement: f64,
}

/// Arithmetic mean of the timing fields across `history`, `None` when empty.
pub fn average<'a>(
    history: impl IntoIterator<Item = &'a ComparisonResult>,
) -> Option<AverageMetrics> {
    let mut count = 0usize;
    let mut total = AverageMetrics {
        batched_time: 0.0,
        individual_time: 0.0,
        time_saved: 0.0,
        percent_improvement: 0.0,
    };

    for result in history {
        count += 1;
        total.batched_time += result.batched_time;
        total.individual_time += result.individual_time;
        total.time_saved += result.time_saved;
        total.percent_improvement += result.percent_improvement;
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(AverageMetrics {
        batched_time: total.batched_time / n,
        individual_time: total.individual_time / n,
        time_saved: total.time_saved / n,
        percent_improvement: total.percent_improvement / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(batched: f64, individual: f64) -> ComparisonResult {
        ComparisonResult::from_timings(batched, individual, 1, 4)
    }

    #[test]
    fn empty_history_has_no_average() {
        assert_eq!(average(&[] as &[ComparisonResult]), None);
        assert_eq!(ComparisonHistory::default().average(), None);
    }

    #[test]
    fn single_entry_average_is_itself() {
        let r = run(120.0, 800.0);
        let avg = average(&[r]).unwrap();
        assert_eq!(avg.batched_time, r.batched_time);
        assert_eq!(avg.individual_time, r.individual_time);
        assert_eq!(avg.time_saved, r.time_saved);
        assert_eq!(avg.percent_improvement, r.percent_improvement);
    }

    #[test]
    fn averages_each_field() {
        let avg = average(&[run(100.0, 400.0), run(200.0, 800.0)]).unwrap();
        assert_eq!(avg.batched_time, 150.0);
        assert_eq!(avg.individual_time, 600.0);
        assert_eq!(avg.time_saved, 450.0);
        assert_eq!(avg.percent_improvement, 75.0);
    }

    #[test]
    fn history_keeps_ten_most_recent_in_order() {
        let mut history = ComparisonHistory::default();
        for i in 0..11 {
            history.push(run(i as f64, 1000.0));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        let batched: Vec<f64> = history.iter().map(|r| r.batched_time).collect();
        assert_eq!(batched, (1..11).map(|i| i as f64).collect::<Vec<_>>());
        assert_eq!(history.latest().map(|r| r.batched_time), Some(10.0));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ComparisonHistory::default();
        history.push(run(1.0, 2.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
