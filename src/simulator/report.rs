//! Simulation report generation.

use crate::game::types::RoundResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub score: i32,
    pub correct: u32,
    pub wrong: u32,
    /// Batches spawned, including the first.
    pub batches: u32,
    pub result: Option<RoundResult>,
}

/// Aggregated results from multiple rounds.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub win_score: i32,
    pub wins: u32,

    pub avg_score: f64,
    pub min_score: i32,
    pub max_score: i32,
    pub avg_throws: f64,
    pub avg_batches: f64,

    /// Final score -> number of rounds.
    pub score_distribution: BTreeMap<i32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, win_score: i32) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let wins = runs
            .iter()
            .filter(|r| r.result == Some(RoundResult::Win))
            .count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / denom;
        let avg_throws = runs
            .iter()
            .map(|r| (r.correct + r.wrong) as f64)
            .sum::<f64>()
            / denom;
        let avg_batches = runs.iter().map(|r| r.batches as f64).sum::<f64>() / denom;
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            win_score,
            wins,
            avg_score,
            min_score,
            max_score,
            avg_throws,
            avg_batches,
            score_distribution,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            self.wins as f64 / self.num_runs as f64
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Rounds: {}, Win score: {}\n\n",
            self.num_runs, self.win_score
        ));

        report.push_str("── RESULTS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Win Rate:        {:.1}%\n",
            self.win_rate() * 100.0
        ));
        report.push_str(&format!("  Avg Score:       {:.1}\n", self.avg_score));
        report.push_str(&format!(
            "  Score Range:     {} .. {}\n",
            self.min_score, self.max_score
        ));
        report.push_str(&format!("  Avg Throws:      {:.1}\n", self.avg_throws));
        report.push_str(&format!("  Avg Batches:     {:.1}\n\n", self.avg_batches));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            let marker = if *score >= self.win_score { "*" } else { " " };
            report.push_str(&format!("  {:>4}{} {:>5.1}% {}\n", score, marker, pct, bar));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
