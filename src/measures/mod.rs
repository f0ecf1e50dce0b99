//! Association engine
//!
//! Five independent measures turn the contingency counts of each candidate
//! bigram into a score. Every measure ranks the same record snapshot on its
//! own; none depends on another's output.
//!
//! # Measures
//!
//! With `c1 = o11 + o12` and `c2 = o11 + o21`:
//!
//! ```text
//! t    = (o11/N - c1*c2/N^2) / sqrt((o11/N)(1 - o11/N)/N)
//! chi2 = N(o11*o22 - o12*o21)^2 / (c1 * (o11+o21) * (o12+o22) * (o21+o22))
//! LR   = -2 [logL(o11,c1,c2/N) + logL(c2-o11,N-c1,c2/N)
//!            - logL(o11,c1,o11/c1) - logL(c2-o11,N-c1,(c2-o11)/(N-c1))]
//! PMI  = log2(N*o11 / (c1*c2))
//! MI   = sum over cells of (o/N) log2(N*o / marginal product), 0 for empty cells
//! ```
//!
//! Zero marginals yield inf or NaN rather than an error. Ranking puts NaN
//! after every number so the order stays total.

mod formulas;

pub use formulas::{chi_square, log_likelihood_ratio, mutual_information, pmi, t_score};

use crate::models::{ContingencyRecord, Query, ScoredEntry};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    TTest,
    ChiSquare,
    LikelihoodRatio,
    Pmi,
    Mi,
}

impl Measure {
    pub fn all() -> &'static [Measure] {
        &[
            Measure::TTest,
            Measure::ChiSquare,
            Measure::LikelihoodRatio,
            Measure::Pmi,
            Measure::Mi,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Measure::TTest => "t-test",
            Measure::ChiSquare => "chi-square",
            Measure::LikelihoodRatio => "likelihood ratio",
            Measure::Pmi => "PMI",
            Measure::Mi => "MI",
        }
    }

    /// Score one record against a corpus of `corpus_size` tokens.
    pub fn score(&self, record: &ContingencyRecord, corpus_size: u64) -> f64 {
        let n = corpus_size as f64;
        match self {
            Measure::TTest => t_score(record, n),
            Measure::ChiSquare => chi_square(record, n),
            Measure::LikelihoodRatio => log_likelihood_ratio(record, n),
            Measure::Pmi => pmi(record, n),
            Measure::Mi => mutual_information(record, n),
        }
    }

    /// Score every record and sort by score descending. The sort is stable,
    /// so equal scores keep input order.
    pub fn rank(
        &self,
        records: &[ContingencyRecord],
        query: &Query,
        corpus_size: u64,
    ) -> Vec<ScoredEntry> {
        let mut entries: Vec<ScoredEntry> = records
            .iter()
            .map(|r| {
                let score = self.score(r, corpus_size);
                if !score.is_finite() {
                    debug!(
                        "{} is degenerate for {} {} ({}): o11={} o12={} o21={} o22={}",
                        self.name(),
                        r.word1,
                        r.word2,
                        score,
                        r.o11,
                        r.o12,
                        r.o21,
                        r.o22
                    );
                }
                ScoredEntry {
                    word1: r.word1.clone(),
                    word2: r.word2.clone(),
                    partner: query.partner(r).to_string(),
                    score,
                }
            })
            .collect();
        entries.sort_by(|a, b| descending(a.score, b.score));
        entries
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Descending order on scores with NaN sorted last.
pub fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
