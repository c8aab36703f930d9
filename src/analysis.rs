use serde::Serialize;

use std::collections::BTreeMap;

use crate::roulette::{Color, Wheel};

/// Observed vs. expected frequency of one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorFrequency {
    pub observed: usize,
    pub expected: f64,
    pub deviation: f64,
    /// Fraction of `expected`; `None` when the color has no slots (or no spins).
    pub deviation_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    pub trials: usize,
    pub colors: BTreeMap<Color, ColorFrequency>,
}

impl FrequencyReport {
    pub fn get(&self, color: Color) -> Option<&ColorFrequency> {
        self.colors.get(&color)
    }
}

pub fn analyze_frequency(wheel: &Wheel, outcomes: &[Color]) -> FrequencyReport {
    let trials = outcomes.len();
    let mut observed: BTreeMap<Color, usize> = Color::ALL.iter().map(|c| (*c, 0)).collect();
    for color in outcomes {
        *observed.entry(*color).or_insert(0) += 1;
    }

    let colors = observed
        .into_iter()
        .map(|(color, observed)| {
            let share = wheel.count_of(color) as f64 / wheel.slot_count() as f64;
            let expected = share * trials as f64;
            let deviation = (expected - observed as f64).abs();
            let deviation_pct = (expected > 0.0).then(|| deviation / expected);
            (
                color,
                ColorFrequency {
                    observed,
                    expected,
                    deviation,
                    deviation_pct,
                },
            )
        })
        .collect();

    FrequencyReport { trials, colors }
}

/// Streak length -> number of maximal runs of exactly that length.
pub type StreakTable = BTreeMap<usize, usize>;

/// First run of maximal length. `length == 0` means there were no spins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LongestStreak {
    pub length: usize,
    pub start: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakAnalysis {
    pub histogram: StreakTable,
    pub longest: LongestStreak,
}

impl StreakAnalysis {
    pub fn max_length(&self) -> usize {
        self.histogram.keys().next_back().copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
enum RunState {
    NoRun,
    InRun {
        color: Color,
        length: usize,
        start: usize,
    },
}

struct StreakScanner {
    state: RunState,
    analysis: StreakAnalysis,
}

impl StreakScanner {
    fn new() -> Self {
        StreakScanner {
            state: RunState::NoRun,
            analysis: StreakAnalysis::default(),
        }
    }

    fn push(&mut self, index: usize, next: Color) {
        let state = self.state;
        self.state = match state {
            RunState::InRun {
                color,
                length,
                start,
            } if color == next => RunState::InRun {
                color,
                length: length + 1,
                start,
            },
            RunState::InRun { length, start, .. } => {
                self.close(length, start);
                RunState::InRun {
                    color: next,
                    length: 1,
                    start: index,
                }
            }
            RunState::NoRun => RunState::InRun {
                color: next,
                length: 1,
                start: index,
            },
        };
    }

    /// The end of the sequence closes the run in progress.
    fn finish(mut self) -> StreakAnalysis {
        if let RunState::InRun { length, start, .. } = self.state {
            self.close(length, start);
        }
        self.analysis
    }

    fn close(&mut self, length: usize, start: usize) {
        *self.analysis.histogram.entry(length).or_insert(0) += 1;
        // Strictly longer only, so the earliest run wins ties.
        if length > self.analysis.longest.length {
            self.analysis.longest = LongestStreak { length, start };
        }
    }
}

/// Single pass producing both the streak histogram and the longest streak.
pub fn analyze_streaks(outcomes: &[Color]) -> StreakAnalysis {
    let mut scanner = StreakScanner::new();
    for (index, color) in outcomes.iter().enumerate() {
        scanner.push(index, *color);
    }
    scanner.finish()
}

pub fn count_streaks(outcomes: &[Color]) -> StreakTable {
    analyze_streaks(outcomes).histogram
}

pub fn find_longest_streak(outcomes: &[Color]) -> LongestStreak {
    analyze_streaks(outcomes).longest
}
