//! Quiz Scoring Aggregation
//!
//! Folds a sequence of graded answers into overall and per-group totals.
//! Every submitted question counts as attempted, blanks included, so
//! `attempted == total`. Groups are keyed in a `BTreeMap`, which keeps the
//! aggregation stable and independent of input iteration order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==================== Data Structures ====================

/// One graded quiz answer, tagged with the group it belongs to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub group: String,
    pub is_correct: bool,
}

/// Per-group score breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupScore {
    pub correct: u32,
    pub total: u32,
    pub attempted: u32,
}

impl GroupScore {
    pub fn percentage(&self) -> u32 {
        percentage(self.correct, self.attempted)
    }
}

/// Aggregated quiz result: overall counts plus per-group breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub correct: u32,
    pub total: u32,
    pub attempted: u32,
    pub groups: BTreeMap<String, GroupScore>,
}

impl QuizSummary {
    pub fn percentage(&self) -> u32 {
        percentage(self.correct, self.attempted)
    }

    pub fn band(&self) -> ResultBand {
        ResultBand::from_percentage(self.percentage())
    }
}

// ==================== Aggregation ====================

/// Rounded percentage of `correct` over `attempted`; 0 when nothing was
/// attempted.
pub fn percentage(correct: u32, attempted: u32) -> u32 {
    if attempted == 0 {
        return 0;
    }
    (correct as f64 / attempted as f64 * 100.0).round() as u32
}

/// Aggregate graded answers into a [`QuizSummary`]. Deterministic for a
/// given multiset of answers, regardless of their order.
pub fn aggregate(answers: &[GradedAnswer]) -> QuizSummary {
    let mut summary = QuizSummary::default();
    for answer in answers {
        summary.total += 1;
        summary.attempted += 1;
        let group = summary.groups.entry(answer.group.clone()).or_default();
        group.total += 1;
        group.attempted += 1;
        if answer.is_correct {
            summary.correct += 1;
            group.correct += 1;
        }
    }
    summary
}

// ==================== Result Bands ====================

/// Encouragement tier derived from the rounded overall percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultBand {
    /// Exactly 100%
    Perfect,
    /// 90% - 99%
    Excellent,
    /// 80% - 89%
    Great,
    /// 70% - 79%
    Good,
    /// 60% - 69%
    KeepGoing,
    /// Below 60%
    StudyMore,
}

impl ResultBand {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 100 {
            ResultBand::Perfect
        } else if percentage >= 90 {
            ResultBand::Excellent
        } else if percentage >= 80 {
            ResultBand::Great
        } else if percentage >= 70 {
            ResultBand::Good
        } else if percentage >= 60 {
            ResultBand::KeepGoing
        } else {
            ResultBand::StudyMore
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultBand::Perfect => "完美！全部答對！",
            ResultBand::Excellent => "太棒了！",
            ResultBand::Great => "很好！",
            ResultBand::Good => "不錯！",
            ResultBand::KeepGoing => "加油！",
            ResultBand::StudyMore => "繼續努力！",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ResultBand::Perfect => "🎉",
            ResultBand::Excellent => "🌟",
            ResultBand::Great => "😊",
            ResultBand::Good => "👍",
            ResultBand::KeepGoing => "💪",
            ResultBand::StudyMore => "📚",
        }
    }
}

// ==================== Tests ====================
