//! Answer Normalization and Grading
//!
//! Decides whether a free-text quiz answer matches the reference answer,
//! tolerant of minor formatting differences.
//!
//! Two target languages, two pipelines:
//! - English target ([`QuizMode::Zh2En`]): lowercase, strip everything that
//!   is neither an ASCII word character nor whitespace, collapse whitespace,
//!   then accept on equality or substring containment in either direction.
//! - Chinese target ([`QuizMode::En2Zh`]): strip full-width punctuation and
//!   whitespace, then accept on equality, substring containment, or a
//!   character-overlap ratio at or above the configured threshold.
//!
//! Grading is pure: identical inputs always produce identical results.

use rayon::prelude::*;

use crate::types::{
    GradeRequest, GradeResult, QuizMode, DEFAULT_OVERLAP_THRESHOLD, ZH_PUNCTUATION,
};

// ==================== Normalization ====================

/// Normalize an English-target answer: lowercase, keep only ASCII word
/// characters and whitespace, collapse whitespace runs, trim.
pub fn normalize_en(input: &str) -> String {
    let kept: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a Chinese-target answer: strip the fixed full-width
/// punctuation set and all whitespace.
pub fn normalize_zh(input: &str) -> String {
    input
        .chars()
        .filter(|c| !ZH_PUNCTUATION.contains(c) && !c.is_whitespace())
        .collect()
}

/// Ratio of user characters present in the reference, over the reference
/// character count (at least 1).
fn overlap_ratio(user: &str, reference: &str) -> f64 {
    let ref_len = reference.chars().count().max(1);
    let matched = user.chars().filter(|c| reference.contains(*c)).count();
    matched as f64 / ref_len as f64
}

// ==================== Grader ====================

/// Grader configuration options.
#[derive(Clone, Debug, Default)]
pub struct GraderOptions {
    /// Overlap ratio threshold for Chinese-target answers
    /// (default: [`DEFAULT_OVERLAP_THRESHOLD`]).
    pub overlap_threshold: Option<f64>,
}

/// Fuzzy answer grader. Cheap to construct and share; all methods are pure.
#[derive(Clone, Debug)]
pub struct Grader {
    overlap_threshold: f64,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new(GraderOptions::default())
    }
}

impl Grader {
    pub fn new(options: GraderOptions) -> Self {
        Self {
            overlap_threshold: options
                .overlap_threshold
                .unwrap_or(DEFAULT_OVERLAP_THRESHOLD),
        }
    }

    pub fn overlap_threshold(&self) -> f64 {
        self.overlap_threshold
    }

    /// Grade one answer. An empty or whitespace-only submission is always
    /// incorrect, never "unanswered": a blank counts against the score.
    pub fn grade(&self, user_answer: &str, correct_answer: &str, mode: QuizMode) -> bool {
        let user = user_answer.trim();
        if user.is_empty() {
            return false;
        }

        match mode {
            QuizMode::Zh2En => {
                let nu = normalize_en(user);
                let nc = normalize_en(correct_answer);
                if nu.is_empty() {
                    return false;
                }
                nu == nc || nc.contains(&nu) || nu.contains(&nc)
            }
            QuizMode::En2Zh => {
                let nu = normalize_zh(user);
                let nc = normalize_zh(correct_answer);
                if nu.is_empty() {
                    return false;
                }
                if nu == nc || nc.contains(&nu) || nu.contains(&nc) {
                    return true;
                }
                if nc.is_empty() {
                    return false;
                }
                overlap_ratio(&nu, &nc) >= self.overlap_threshold
            }
        }
    }

    /// Grade a single request into its wire-shaped result.
    pub fn grade_request(&self, request: &GradeRequest) -> GradeResult {
        GradeResult {
            is_correct: self.grade(&request.user_answer, &request.correct_answer, request.mode),
        }
    }

    /// Grade a batch of independent requests in parallel. Output order
    /// matches input order.
    pub fn grade_batch(&self, requests: &[GradeRequest]) -> Vec<GradeResult> {
        requests
            .par_iter()
            .map(|request| self.grade_request(request))
            .collect()
    }
}

// ==================== Tests ====================
