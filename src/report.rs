use serde::Serialize;

use std::fmt;

use crate::analysis::{FrequencyReport, StreakAnalysis};
use crate::rng::Generator;

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub generator: Generator,
    pub seed: Option<u64>,
    pub trials: usize,
    pub frequency: FrequencyReport,
    pub streaks: StreakAnalysis,
    pub spin_ms: u128,
    pub analysis_ms: u128,
}

/// Streak lengths 1..=max with missing lengths filled in as zero.
pub fn gap_filled(streaks: &StreakAnalysis) -> Vec<(usize, usize)> {
    (1..=streaks.max_length())
        .map(|len| (len, streaks.histogram.get(&len).copied().unwrap_or(0)))
        .collect()
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, freq) in &self.colors {
            write!(
                f,
                "{:<5}: {} times (expected {:.3}, off by {:.3} or ",
                color, freq.observed, freq.expected, freq.deviation
            )?;
            match freq.deviation_pct {
                Some(pct) => writeln!(f, "{:.3}%)", pct * 100.0)?,
                None => writeln!(f, "n/a)")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for StreakAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.longest.length == 0 {
            return writeln!(f, "No streaks (no spins)");
        }
        writeln!(
            f,
            "Max streak: {} (first at spin {})",
            self.longest.length,
            self.longest.start + 1
        )?;
        for (len, count) in gap_filled(self) {
            writeln!(f, "Streaks of length {:2}: {:5}", len, count)?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tests using {}:", self.generator)?;
        writeln!(f)?;
        writeln!(
            f,
            "Spun wheel {} times (took {}ms)",
            self.trials, self.spin_ms
        )?;
        writeln!(f)?;
        write!(f, "{}", self.frequency)?;
        writeln!(f)?;
        writeln!(f, "Counted streaks in {}ms", self.analysis_ms)?;
        write!(f, "{}", self.streaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_frequency, analyze_streaks};
    use crate::roulette::Color::{Black, Green, Red};
    use crate::roulette::Wheel;

    #[test]
    fn test_gap_filled_streaks() {
        let streaks = analyze_streaks(&[Red, Black, Black, Black, Black, Green]);
        assert_eq!(gap_filled(&streaks), vec![(1, 2), (2, 0), (3, 0), (4, 1)]);
    }

    #[test]
    fn test_streak_text() {
        let text = analyze_streaks(&[Red, Red, Black]).to_string();
        assert!(text.starts_with("Max streak: 2 (first at spin 1)"));
        assert!(text.contains("Streaks of length  1:     1"));
        assert!(text.contains("Streaks of length  2:     1"));
        assert_eq!(analyze_streaks(&[]).to_string(), "No streaks (no spins)\n");
    }

    #[test]
    fn test_frequency_text_marks_not_applicable() {
        let wheel = Wheel::new(1, 1, 0).unwrap();
        let text = analyze_frequency(&wheel, &[Black, Black, Red, Red]).to_string();
        assert!(text.contains("BLACK: 2 times (expected 2.000, off by 0.000 or 0.000%)"));
        assert!(text.contains("GREEN: 0 times (expected 0.000, off by 0.000 or n/a)"));
    }

    #[test]
    fn test_frequency_text_scales_percentage() {
        let wheel = Wheel::new(2, 2, 1).unwrap();
        let text = analyze_frequency(&wheel, &[Black, Black, Red, Green, Black]).to_string();
        assert!(text.contains("BLACK: 3 times (expected 2.000, off by 1.000 or 50.000%)"));
    }

    #[test]
    fn test_session_text_includes_timings() {
        let wheel = Wheel::new(2, 2, 1).unwrap();
        let outcomes = [Green, Green];
        let report = SessionReport {
            generator: Generator::Fast,
            seed: None,
            trials: outcomes.len(),
            frequency: analyze_frequency(&wheel, &outcomes),
            streaks: analyze_streaks(&outcomes),
            spin_ms: 3,
            analysis_ms: 7,
        };
        let text = report.to_string();
        assert!(text.starts_with("Tests using fast PRNG:"));
        assert!(text.contains("Spun wheel 2 times (took 3ms)"));
        assert!(text.contains("Counted streaks in 7ms\nMax streak: 2 (first at spin 1)"));
    }

    #[test]
    fn test_session_json() {
        let wheel = Wheel::new(2, 2, 1).unwrap();
        let outcomes = [Red, Red, Black];
        let report = SessionReport {
            generator: Generator::Secure,
            seed: Some(5),
            trials: outcomes.len(),
            frequency: analyze_frequency(&wheel, &outcomes),
            streaks: analyze_streaks(&outcomes),
            spin_ms: 0,
            analysis_ms: 0,
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["generator"], "secure");
        assert_eq!(json["frequency"]["colors"]["RED"]["observed"], 2);
        assert_eq!(json["streaks"]["histogram"]["2"], 1);
        assert_eq!(json["streaks"]["longest"]["start"], 0);
    }
}
