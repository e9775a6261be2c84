use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Difficulty, Problem, ProblemFilter};
use crate::repository::ProblemRepository;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total: usize,
    pub created: usize,
    pub remaining: usize,
    /// Rounded percentage of problems with playground code.
    pub progress: u32,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl StatsSnapshot {
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }
}

pub fn compute(problems: &[Problem]) -> StatsSnapshot {
    let mut created = 0;
    let mut by_difficulty = BTreeMap::new();

    for problem in problems {
        if problem.has_playground {
            created += 1;
        }
        *by_difficulty.entry(problem.difficulty).or_insert(0) += 1;
    }

    let total = problems.len();
    let progress = if total == 0 {
        0
    } else {
        (created as f64 / total as f64 * 100.0).round() as u32
    };

    StatsSnapshot {
        total,
        created,
        remaining: total - created,
        progress,
        by_difficulty,
    }
}

impl ProblemRepository {
    pub fn stats(&self) -> Result<StatsSnapshot> {
        let problems = self.list(&ProblemFilter::default())?;
        Ok(compute(&problems))
    }
}
